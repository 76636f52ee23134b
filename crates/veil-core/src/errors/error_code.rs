//! Stable error codes attached to structured log events.

pub const RECOGNIZER_ERROR: &str = "RECOGNIZER_ERROR";
pub const RESOLUTION_ERROR: &str = "RESOLUTION_ERROR";
pub const ANONYMIZATION_ERROR: &str = "ANONYMIZATION_ERROR";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";

/// Maps an error to a stable, machine-readable code.
pub trait VeilErrorCode {
    fn error_code(&self) -> &'static str;
}
