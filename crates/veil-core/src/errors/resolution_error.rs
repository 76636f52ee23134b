use super::error_code::{self, VeilErrorCode};

/// Span resolution failure.
///
/// The resolver only ever discards malformed candidates, so nothing in the
/// workspace constructs this. It exists so custom resolvers and the error
/// taxonomy stay complete.
#[derive(Debug, thiserror::Error)]
pub enum ResolutionError {
    #[error("inconsistent span set: {details}")]
    Inconsistent { details: String },
}

impl VeilErrorCode for ResolutionError {
    fn error_code(&self) -> &'static str {
        error_code::RESOLUTION_ERROR
    }
}
