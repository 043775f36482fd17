use std::collections::HashMap;

use async_trait::async_trait;

use crate::handoff::opener::{ContextHandle, OpenError, Opener};
use crate::handoff::surface::Surface;
use crate::submission::fields::FieldId;

/// Surface backed by a parsed form body, reporting feedback on stdout.
pub struct ConsoleSurface {
    fields: HashMap<String, String>,
}

impl ConsoleSurface {
    pub fn new(fields: HashMap<String, String>) -> Self {
        Self { fields }
    }
}

impl Surface for ConsoleSurface {
    fn field_value(&self, field: FieldId) -> Option<String> {
        self.fields.get(field.name()).cloned()
    }

    fn show_field_error(&self, field: FieldId, message: &str) {
        println!("{}: {message}", field.label());
    }

    fn clear_field_error(&self, _field: FieldId) {}

    fn show_notice(&self, message: &str) {
        println!("{message}");
    }

    fn show_success(&self, first_name: &str) {
        println!("Thank you {first_name}, your request has been prepared!");
    }

    fn set_countdown(&self, remaining: u32) {
        let plural = if remaining == 1 { "" } else { "s" };
        println!("Redirecting in {remaining} second{plural}...");
    }

    fn show_manual_link(&self, url: &str, reason: &str) {
        println!("Unable to open the conversation automatically ({reason}).");
        println!("Follow this link instead:\n{url}");
    }

    fn set_submit_enabled(&self, _enabled: bool) {}

    fn scroll_to_confirmation(&self) {}
}

/// A console has no browsing context to open, so every attempt reports a
/// blocked popup and the redirect fallback prints the link.
pub struct ConsoleOpener;

#[async_trait]
impl Opener for ConsoleOpener {
    async fn open_new_context(&self, _url: &str) -> Result<Option<ContextHandle>, OpenError> {
        Ok(None)
    }

    async fn navigate_current(&self, url: &str) {
        println!("Open the conversation here:\n{url}");
    }
}
