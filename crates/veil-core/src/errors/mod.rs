//! Error handling for Veil.
//! One error enum per subsystem, `thiserror` only, aggregated by `VeilError`.

mod anonymization_error;
mod config_error;
mod error_code;
mod recognizer_error;
mod resolution_error;

pub use anonymization_error::AnonymizationError;
pub use config_error::ConfigError;
pub use error_code::VeilErrorCode;
pub use recognizer_error::RecognizerError;
pub use resolution_error::ResolutionError;

/// Top-level error. Every failure of a sanitize call surfaces as one of these;
/// callers get a single failed outcome, never a partially sanitized result.
#[derive(Debug, thiserror::Error)]
pub enum VeilError {
    #[error("recognizer failure: {0}")]
    Recognizer(#[from] RecognizerError),

    #[error("resolution failure: {0}")]
    Resolution(#[from] ResolutionError),

    #[error("anonymization failure: {0}")]
    Anonymization(#[from] AnonymizationError),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

pub type VeilResult<T> = Result<T, VeilError>;

impl VeilErrorCode for VeilError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Recognizer(e) => e.error_code(),
            Self::Resolution(e) => e.error_code(),
            Self::Anonymization(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
        }
    }
}
