use crate::submission::fields::FieldId;
use crate::submission::rules::ValidationResult;

#[derive(Debug)]
pub enum FlowError {
    Config(String),
    MissingRequiredData(Vec<FieldId>),
    Validation(ValidationResult),
    CoolingDown(u64),
}

impl std::fmt::Display for FlowError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FlowError::Config(msg) => write!(f, "Configuration error: {msg}"),
            FlowError::MissingRequiredData(fields) => {
                let names: Vec<&str> = fields.iter().map(|f| f.name()).collect();
                write!(f, "Missing required data: {}", names.join(", "))
            }
            FlowError::Validation(result) => {
                write!(f, "Validation failed: {} problem(s)", result.failures().len())
            }
            FlowError::CoolingDown(ms) => {
                write!(f, "Submission suppressed. Retry after {ms}ms")
            }
        }
    }
}
