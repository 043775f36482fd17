use serde::{Deserialize, Serialize};

use crate::error::FlowError;

/// Form fields the submission flow knows about, in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldId {
    FirstName,
    LastName,
    Email,
    Phone,
    EventType,
    EventDuration,
    SessionCount,
    EventDetails,
}

impl FieldId {
    /// Validation failures are reported in this order.
    pub const ALL: [FieldId; 8] = [
        FieldId::FirstName,
        FieldId::LastName,
        FieldId::Email,
        FieldId::Phone,
        FieldId::EventType,
        FieldId::EventDuration,
        FieldId::SessionCount,
        FieldId::EventDetails,
    ];

    /// Wire name used by raw form bodies.
    pub fn name(&self) -> &'static str {
        match self {
            FieldId::FirstName => "first_name",
            FieldId::LastName => "last_name",
            FieldId::Email => "email",
            FieldId::Phone => "phone",
            FieldId::EventType => "event_type",
            FieldId::EventDuration => "event_duration",
            FieldId::SessionCount => "session_count",
            FieldId::EventDetails => "event_details",
        }
    }

    /// User-facing label for error indicators.
    pub fn label(&self) -> &'static str {
        match self {
            FieldId::FirstName => "First name",
            FieldId::LastName => "Last name",
            FieldId::Email => "Email",
            FieldId::Phone => "Phone",
            FieldId::EventType => "Event type",
            FieldId::EventDuration => "Event duration",
            FieldId::SessionCount => "Number of sessions",
            FieldId::EventDetails => "Event details",
        }
    }
}

/// Which message template a submission feeds. The quote form requires the
/// contact and event fields; the registration modal sends whatever it has and
/// blanks become fallback labels at composition time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateKind {
    Quote,
    Registration,
}

impl TemplateKind {
    pub fn required_fields(&self) -> &'static [FieldId] {
        match self {
            TemplateKind::Quote => &[
                FieldId::FirstName,
                FieldId::LastName,
                FieldId::Email,
                FieldId::Phone,
                FieldId::EventType,
                FieldId::EventDuration,
            ],
            TemplateKind::Registration => &[],
        }
    }
}

/// One submission's field values, trimmed at collection time. Never passed
/// around as an untyped map.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SubmissionRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub event_type: String,
    pub event_duration: String,
    pub session_count: Option<String>,
    pub event_details: Option<String>,
}

impl SubmissionRequest {
    /// Build a request from a field lookup, trimming every value. A required
    /// field whose key is absent entirely is the caller's construction error:
    /// it aborts here, before any hand-off state machine is instantiated.
    pub fn collect<F>(kind: TemplateKind, lookup: F) -> Result<Self, FlowError>
    where
        F: Fn(FieldId) -> Option<String>,
    {
        let missing: Vec<FieldId> = kind
            .required_fields()
            .iter()
            .copied()
            .filter(|f| lookup(*f).is_none())
            .collect();
        if !missing.is_empty() {
            return Err(FlowError::MissingRequiredData(missing));
        }

        let get = |f: FieldId| lookup(f).map(|v| v.trim().to_string());

        Ok(Self {
            first_name: get(FieldId::FirstName).unwrap_or_default(),
            last_name: get(FieldId::LastName).unwrap_or_default(),
            email: get(FieldId::Email).unwrap_or_default(),
            phone: get(FieldId::Phone).unwrap_or_default(),
            event_type: get(FieldId::EventType).unwrap_or_default(),
            event_duration: get(FieldId::EventDuration).unwrap_or_default(),
            session_count: get(FieldId::SessionCount).filter(|s| !s.is_empty()),
            event_details: get(FieldId::EventDetails).filter(|s| !s.is_empty()),
        })
    }

    /// Uniform read access for the validator; blank optionals read as empty.
    pub fn value(&self, field: FieldId) -> &str {
        match field {
            FieldId::FirstName => &self.first_name,
            FieldId::LastName => &self.last_name,
            FieldId::Email => &self.email,
            FieldId::Phone => &self.phone,
            FieldId::EventType => &self.event_type,
            FieldId::EventDuration => &self.event_duration,
            FieldId::SessionCount => self.session_count.as_deref().unwrap_or(""),
            FieldId::EventDetails => self.event_details.as_deref().unwrap_or(""),
        }
    }
}
