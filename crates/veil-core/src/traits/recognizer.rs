use crate::errors::VeilResult;
use crate::models::{CandidateSpan, EntityType};
use crate::text::Text;

/// Detection logic for one or more PII categories.
///
/// Implementations hold only immutable setup state (compiled patterns, word
/// lists, model handles) and are shared across threads.
pub trait IRecognizer: Send + Sync {
    /// Unique name, used in logs and for registry removal.
    fn name(&self) -> &str;

    /// Entity types this recognizer can emit.
    fn supported_entities(&self) -> &[EntityType];

    /// Whether this recognizer handles `language`. Unsupported languages are
    /// skipped by the registry, not treated as errors.
    fn supports_language(&self, language: &str) -> bool;

    /// Propose candidate spans in character offsets of `text`.
    ///
    /// Must return an empty vector for empty or unremarkable text. Errors are
    /// reserved for broken setup state.
    fn analyze(&self, text: &Text<'_>, language: &str) -> VeilResult<Vec<CandidateSpan>>;
}
