use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use bookflow::config::{FlowConfig, PhoneRules};
use bookflow::handoff::opener::{ContextHandle, OpenError, Opener};
use bookflow::handoff::surface::Surface;
use bookflow::handoff::ticks::TickSource;
use bookflow::handoff::HandoffFlow;
use bookflow::submission::fields::FieldId;

/// Config with a short cool-down so tests never wait on wall-clock seconds.
pub fn test_config() -> FlowConfig {
    FlowConfig {
        messaging_domain: "wa.me".to_string(),
        recipient_id: "254114995449".to_string(),
        org_name: "Generali Global".to_string(),
        registration_fee: "KES 1,500".to_string(),
        link_budget: 2000,
        countdown_ticks: 3,
        cooldown: Duration::from_millis(50),
        log_level: "debug".to_string(),
        phone: PhoneRules {
            country_code: "254".to_string(),
            trunk_prefix: "0".to_string(),
        },
    }
}

pub fn valid_quote_fields() -> Vec<(FieldId, &'static str)> {
    vec![
        (FieldId::FirstName, "Amina"),
        (FieldId::LastName, "Odhiambo"),
        (FieldId::Email, "amina@example.com"),
        (FieldId::Phone, "0712 345 678"),
        (FieldId::EventType, "Wedding"),
        (FieldId::EventDuration, "2 days"),
        (FieldId::SessionCount, "2"),
        (FieldId::EventDetails, "Outdoor ceremony"),
    ]
}

/// In-memory presentation surface recording everything the flow writes to it.
#[derive(Default)]
pub struct StubSurface {
    pub fields: Mutex<HashMap<FieldId, String>>,
    pub field_errors: Mutex<HashMap<FieldId, String>>,
    pub notices: Mutex<Vec<String>>,
    pub countdown: Mutex<Vec<u32>>,
    pub success_name: Mutex<Option<String>>,
    pub manual_link: Mutex<Option<(String, String)>>,
    pub submit_enabled: Mutex<bool>,
    pub scrolled: Mutex<bool>,
}

impl StubSurface {
    pub fn with_fields(pairs: &[(FieldId, &str)]) -> Arc<Self> {
        let surface = Self::default();
        *surface.submit_enabled.lock().unwrap() = true;
        {
            let mut fields = surface.fields.lock().unwrap();
            for (field, value) in pairs {
                fields.insert(*field, value.to_string());
            }
        }
        Arc::new(surface)
    }

    pub fn set_field(&self, field: FieldId, value: &str) {
        self.fields.lock().unwrap().insert(field, value.to_string());
    }

    pub fn remove_field(&self, field: FieldId) {
        self.fields.lock().unwrap().remove(&field);
    }

    pub fn error_for(&self, field: FieldId) -> Option<String> {
        self.field_errors.lock().unwrap().get(&field).cloned()
    }
}

impl Surface for StubSurface {
    fn field_value(&self, field: FieldId) -> Option<String> {
        self.fields.lock().unwrap().get(&field).cloned()
    }

    fn show_field_error(&self, field: FieldId, message: &str) {
        self.field_errors
            .lock()
            .unwrap()
            .insert(field, message.to_string());
    }

    fn clear_field_error(&self, field: FieldId) {
        self.field_errors.lock().unwrap().remove(&field);
    }

    fn show_notice(&self, message: &str) {
        self.notices.lock().unwrap().push(message.to_string());
    }

    fn show_success(&self, first_name: &str) {
        *self.success_name.lock().unwrap() = Some(first_name.to_string());
    }

    fn set_countdown(&self, remaining: u32) {
        self.countdown.lock().unwrap().push(remaining);
    }

    fn show_manual_link(&self, url: &str, reason: &str) {
        *self.manual_link.lock().unwrap() = Some((url.to_string(), reason.to_string()));
    }

    fn set_submit_enabled(&self, enabled: bool) {
        *self.submit_enabled.lock().unwrap() = enabled;
    }

    fn scroll_to_confirmation(&self) {
        *self.scrolled.lock().unwrap() = true;
    }
}

/// What the scripted opener should report for `open_new_context`.
#[derive(Clone, Copy)]
pub enum OpenScript {
    Opens,
    Blocked,
    Fails(&'static str),
}

pub struct ScriptedOpener {
    script: OpenScript,
    pub opened: Mutex<Vec<String>>,
    pub navigated: Mutex<Vec<String>>,
}

impl ScriptedOpener {
    pub fn new(script: OpenScript) -> Arc<Self> {
        Arc::new(Self {
            script,
            opened: Mutex::new(Vec::new()),
            navigated: Mutex::new(Vec::new()),
        })
    }
}

#[async_trait]
impl Opener for ScriptedOpener {
    async fn open_new_context(&self, url: &str) -> Result<Option<ContextHandle>, OpenError> {
        self.opened.lock().unwrap().push(url.to_string());
        match self.script {
            OpenScript::Opens => Ok(Some(ContextHandle::new())),
            OpenScript::Blocked => Ok(None),
            OpenScript::Fails(message) => Err(OpenError::from(message)),
        }
    }

    async fn navigate_current(&self, url: &str) {
        self.navigated.lock().unwrap().push(url.to_string());
    }
}

/// Tick source that resolves immediately so the countdown never sleeps.
pub struct InstantTicks;

#[async_trait]
impl TickSource for InstantTicks {
    async fn tick(&self) {}
}

pub fn build_flow(surface: Arc<StubSurface>, opener: Arc<ScriptedOpener>) -> HandoffFlow {
    build_flow_with(test_config(), surface, opener)
}

pub fn build_flow_with(
    config: FlowConfig,
    surface: Arc<StubSurface>,
    opener: Arc<ScriptedOpener>,
) -> HandoffFlow {
    bookflow::build_flow(config, surface, opener, Arc::new(InstantTicks))
        .expect("flow construction failed")
}
