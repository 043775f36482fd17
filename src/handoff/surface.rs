use crate::submission::fields::FieldId;

/// Presentation surface the flow reads field values from and writes feedback
/// to. Rendering technology is the caller's concern; the orchestrator only
/// holds `&self`, so implementations use interior mutability.
pub trait Surface: Send + Sync {
    /// Current value of a form field, `None` when the field is absent from
    /// the surface entirely.
    fn field_value(&self, field: FieldId) -> Option<String>;

    fn show_field_error(&self, field: FieldId, message: &str);

    fn clear_field_error(&self, field: FieldId);

    /// Blocking form-level notice.
    fn show_notice(&self, message: &str);

    /// Hide the form and greet the requester while the countdown runs.
    fn show_success(&self, first_name: &str);

    /// Countdown region, called once per remaining tick.
    fn set_countdown(&self, remaining: u32);

    /// Replace the countdown region with a manual link the user can follow.
    fn show_manual_link(&self, url: &str, reason: &str);

    fn set_submit_enabled(&self, enabled: bool);

    fn scroll_to_confirmation(&self);
}
