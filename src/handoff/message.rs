use crate::config::FlowConfig;
use crate::submission::fields::{SubmissionRequest, TemplateKind};

const NOT_PROVIDED: &str = "Not provided";
const TO_BE_DISCUSSED: &str = "To be discussed";
const NO_DETAILS: &str = "No additional details provided";
const DEFAULT_SESSIONS: &str = "1";

/// Build the full message payload for a validated request. Deterministic;
/// blank optionals become explicit fallback labels, never the literal absence.
pub fn compose(kind: TemplateKind, req: &SubmissionRequest, config: &FlowConfig) -> String {
    match kind {
        TemplateKind::Quote => compose_quote(req, config),
        TemplateKind::Registration => compose_registration(req, config),
    }
}

/// Minimal payload carrying only the identifying fields, used when the full
/// link would exceed the length budget.
pub fn compose_short(kind: TemplateKind, req: &SubmissionRequest, config: &FlowConfig) -> String {
    match kind {
        TemplateKind::Quote => format!(
            "🎉 New Quote Request\n\n\
             Name: {} {}\n\
             Email: {}\n\
             Phone: {}\n\
             Event: {}\n\
             Duration: {}\n\n\
             Please provide a quote. Thanks!",
            req.first_name,
            req.last_name,
            req.email,
            req.phone,
            req.event_type,
            or_label(&req.event_duration, TO_BE_DISCUSSED),
        ),
        TemplateKind::Registration => format!(
            "Hello {org}, I'd like to register. Name: {name}, Phone: {phone}, Email: {email}.",
            org = config.org_name,
            name = or_label(&full_name(req), NOT_PROVIDED),
            phone = or_label(&req.phone, NOT_PROVIDED),
            email = or_label(&req.email, NOT_PROVIDED),
        ),
    }
}

fn compose_quote(req: &SubmissionRequest, config: &FlowConfig) -> String {
    format!(
        "🎉 *New Quote Request - {org}*\n\n\
         👤 *Client Details:*\n\
         • Name: {first} {last}\n\
         • Email: {email}\n\
         • Phone: {phone}\n\n\
         🎊 *Event Information:*\n\
         • Type: {event}\n\
         • Duration: {duration}\n\
         • Sessions: {sessions}\n\n\
         📝 *Additional Details:*\n\
         {details}\n\n\
         _This message was sent via the {org} booking system_\n\
         Please provide a customized quote for this event. Thank you! 🙏",
        org = config.org_name,
        first = req.first_name,
        last = req.last_name,
        email = req.email,
        phone = req.phone,
        event = req.event_type,
        duration = or_label(&req.event_duration, TO_BE_DISCUSSED),
        sessions = req.session_count.as_deref().unwrap_or(DEFAULT_SESSIONS),
        details = req.event_details.as_deref().unwrap_or(NO_DETAILS),
    )
}

fn compose_registration(req: &SubmissionRequest, config: &FlowConfig) -> String {
    format!(
        "Hello {org}, I'd like to register myself to the members group. Here are my details:\n\
         Name: {name}\n\
         Phone: {phone}\n\
         Email: {email}\n\
         Acknowledgement: I acknowledge I ought to pay {fee} to join the platform.",
        org = config.org_name,
        name = or_label(&full_name(req), NOT_PROVIDED),
        phone = or_label(&req.phone, NOT_PROVIDED),
        email = or_label(&req.email, NOT_PROVIDED),
        fee = config.registration_fee,
    )
}

fn full_name(req: &SubmissionRequest) -> String {
    [req.first_name.as_str(), req.last_name.as_str()]
        .iter()
        .filter(|part| !part.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
}

fn or_label<'a>(value: &'a str, label: &'a str) -> &'a str {
    if value.is_empty() { label } else { value }
}
