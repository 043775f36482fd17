use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::config::PhoneRules;

use super::fields::{FieldId, SubmissionRequest, TemplateKind};

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    EmptyField,
    InvalidEmailFormat,
    InvalidPhoneFormat,
}

impl FailureKind {
    /// User-facing message for the inline field indicator.
    pub fn message(&self) -> &'static str {
        match self {
            FailureKind::EmptyField => "This field is required",
            FailureKind::InvalidEmailFormat => "Please enter a valid email address",
            FailureKind::InvalidPhoneFormat => "Please enter a valid phone number",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldFailure {
    pub field: FieldId,
    pub kind: FailureKind,
}

/// Outcome of one validation pass. Ephemeral; failures are kept in
/// field-declaration order so the caller can report every problem at once.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ValidationResult {
    failures: Vec<FieldFailure>,
}

impl ValidationResult {
    pub fn is_ok(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn failures(&self) -> &[FieldFailure] {
        &self.failures
    }
}

/// Compiled rule set. Pure: mutates nothing, collects every failure instead of
/// short-circuiting on the first.
pub struct Validator {
    phone_re: Regex,
}

impl Validator {
    pub fn new(rules: &PhoneRules) -> Result<Self, String> {
        rules.check()?;
        // Optional international or trunk prefix, then 8-10 digits starting non-zero.
        let pattern = format!(
            r"^(\+?{}|{})?[1-9]\d{{7,9}}$",
            regex::escape(&rules.country_code),
            regex::escape(&rules.trunk_prefix),
        );
        let phone_re =
            Regex::new(&pattern).map_err(|e| format!("Invalid phone rules: {e}"))?;
        Ok(Self { phone_re })
    }

    /// Validate a whole request against the fields its template kind requires.
    pub fn validate(&self, kind: TemplateKind, req: &SubmissionRequest) -> ValidationResult {
        let required = kind.required_fields();
        let mut failures = Vec::new();

        for field in FieldId::ALL {
            let value = req.value(field);
            if required.contains(&field) && value.is_empty() {
                failures.push(FieldFailure {
                    field,
                    kind: FailureKind::EmptyField,
                });
                continue;
            }
            if let Some(failure) = self.check_shape(field, value) {
                failures.push(FieldFailure {
                    field,
                    kind: failure,
                });
            }
        }

        ValidationResult { failures }
    }

    /// Validate a single field, e.g. when it loses focus. `None` means the
    /// value is acceptable.
    pub fn check_field(
        &self,
        kind: TemplateKind,
        field: FieldId,
        value: &str,
    ) -> Option<FailureKind> {
        let value = value.trim();
        if kind.required_fields().contains(&field) && value.is_empty() {
            return Some(FailureKind::EmptyField);
        }
        self.check_shape(field, value)
    }

    /// Shape rules apply only to non-empty email and phone values.
    fn check_shape(&self, field: FieldId, value: &str) -> Option<FailureKind> {
        if value.is_empty() {
            return None;
        }
        match field {
            FieldId::Email if !EMAIL_RE.is_match(value) => {
                Some(FailureKind::InvalidEmailFormat)
            }
            FieldId::Phone if !self.phone_re.is_match(&clean_phone(value)) => {
                Some(FailureKind::InvalidPhoneFormat)
            }
            _ => None,
        }
    }
}

/// Strip the separators people type into phone numbers before matching.
fn clean_phone(value: &str) -> String {
    value
        .chars()
        .filter(|c| !c.is_whitespace() && !matches!(c, '-' | '(' | ')'))
        .collect()
}
