use super::error_code::{self, VeilErrorCode};

/// A recognizer could not process the given text or language.
#[derive(Debug, thiserror::Error)]
pub enum RecognizerError {
    #[error("pattern '{pattern}' of recognizer {recognizer} is unavailable")]
    PatternUnavailable { recognizer: String, pattern: String },

    #[error("recognizer {recognizer} produced span [{start}, {end}) outside text of length {len}")]
    SpanOutOfBounds {
        recognizer: String,
        start: usize,
        end: usize,
        len: usize,
    },

    #[error("recognizer {recognizer} failed: {reason}")]
    Failed { recognizer: String, reason: String },
}

impl VeilErrorCode for RecognizerError {
    fn error_code(&self) -> &'static str {
        error_code::RECOGNIZER_ERROR
    }
}
