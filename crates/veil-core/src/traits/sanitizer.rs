use crate::errors::VeilResult;
use crate::models::SanitizationResult;

/// End-to-end PII sanitization of one text value.
pub trait ISanitizer: Send + Sync {
    /// Detect and substitute PII. Fails as a whole rather than returning a
    /// partially anonymized result.
    fn sanitize(&self, text: &str, language: &str) -> VeilResult<SanitizationResult>;
}
