use super::error_code::{self, VeilErrorCode};

/// An operator could not produce a replacement, or the span set handed to the
/// anonymizer broke its ordering/disjointness contract.
#[derive(Debug, thiserror::Error)]
pub enum AnonymizationError {
    #[error("invalid span [{start}, {end}): {reason}")]
    InvalidSpan {
        start: usize,
        end: usize,
        reason: String,
    },

    #[error("operator {operator} failed on {entity_type}: {reason}")]
    OperatorFailed {
        operator: String,
        entity_type: String,
        reason: String,
    },
}

impl VeilErrorCode for AnonymizationError {
    fn error_code(&self) -> &'static str {
        error_code::ANONYMIZATION_ERROR
    }
}
