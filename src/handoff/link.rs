use crate::config::FlowConfig;

/// Build the messaging deep link: `https://<domain>/<recipient>?text=<encoded>`.
pub fn build(config: &FlowConfig, payload: &str) -> String {
    let encoded: String = form_urlencoded::byte_serialize(payload.as_bytes()).collect();
    format!(
        "https://{}/{}?text={}",
        config.messaging_domain, config.recipient_id, encoded
    )
}

/// Build the link for a payload, substituting the shortened payload when the
/// encoded link exceeds the budget; deep-link transports truncate or reject
/// overlong URLs. Returns the link and whether the short template was used.
pub fn build_within_budget(config: &FlowConfig, full: &str, short: &str) -> (String, bool) {
    let link = build(config, full);
    if link.len() <= config.link_budget {
        return (link, false);
    }
    (build(config, short), true)
}
