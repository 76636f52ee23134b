//! Registry → Resolver → report → Anonymizer, end to end for one text.

use rayon::prelude::*;
use tracing::{debug, info_span, warn};

use veil_core::errors::VeilResult;
use veil_core::tracing::spans;
use veil_core::traits::ISanitizer;
use veil_core::{AcceptedSpan, DetectionEntry, SanitizationResult, Text, VeilConfig};

use crate::anonymizer::Anonymizer;
use crate::registry::RecognizerRegistry;
use crate::resolver::resolve;

/// Sanitization pipeline over frozen setup state.
///
/// Build it once at startup and share it (`Arc`, `&`) across threads; nothing
/// in it is mutated by `sanitize`.
pub struct SanitizationPipeline {
    registry: RecognizerRegistry,
    anonymizer: Anonymizer,
    default_language: String,
}

impl SanitizationPipeline {
    pub fn new(registry: RecognizerRegistry, anonymizer: Anonymizer) -> Self {
        Self {
            registry,
            anonymizer,
            default_language: veil_core::constants::DEFAULT_LANGUAGE.to_string(),
        }
    }

    /// Pipeline with built-in recognizers and `<ENTITY_TYPE>` replacement.
    pub fn with_defaults() -> VeilResult<Self> {
        Self::from_config(&VeilConfig::default())
    }

    pub fn from_config(config: &VeilConfig) -> VeilResult<Self> {
        VeilConfig::validate(config)?;
        let registry = RecognizerRegistry::from_config(&config.detection)?;
        let anonymizer = Anonymizer::from_config(&config.anonymization)?;
        Ok(Self::new(registry, anonymizer)
            .with_default_language(&config.detection.default_language))
    }

    pub fn with_default_language(mut self, language: &str) -> Self {
        self.default_language = language.to_string();
        self
    }

    pub fn default_language(&self) -> &str {
        &self.default_language
    }

    pub fn registry(&self) -> &RecognizerRegistry {
        &self.registry
    }

    pub fn anonymizer(&self) -> &Anonymizer {
        &self.anonymizer
    }

    /// Detection report only, without rewriting the text.
    pub fn analyze(&self, text: &str, language: &str) -> VeilResult<Vec<DetectionEntry>> {
        let _span = info_span!(spans::ANALYZE, language = %language).entered();
        let text = Text::new(text);
        let accepted = self.accepted_spans(&text, language)?;
        Ok(accepted.iter().map(DetectionEntry::from).collect())
    }

    /// Sanitize independent texts in parallel. Results keep input order; the
    /// first failure fails the whole batch.
    pub fn sanitize_batch(
        &self,
        texts: &[&str],
        language: &str,
    ) -> VeilResult<Vec<SanitizationResult>> {
        texts
            .par_iter()
            .map(|text| self.sanitize(text, language))
            .collect()
    }

    fn accepted_spans(&self, text: &Text<'_>, language: &str) -> VeilResult<Vec<AcceptedSpan>> {
        let candidates = self.registry.analyze(text, language)?;
        let candidate_count = candidates.len();
        let accepted = resolve(candidates);
        debug!(
            candidates = candidate_count,
            accepted = accepted.len(),
            entities = ?accepted.iter().map(|s| s.entity_type.as_str()).collect::<Vec<_>>(),
            "spans resolved"
        );
        Ok(accepted)
    }
}

impl ISanitizer for SanitizationPipeline {
    fn sanitize(&self, text: &str, language: &str) -> VeilResult<SanitizationResult> {
        let text = Text::new(text);
        let _span = info_span!(
            spans::SANITIZE,
            language = %language,
            text_chars = text.char_len()
        )
        .entered();

        if !self.registry.supports_language(language) {
            warn!(language = %language, "no recognizer supports language, passing text through");
            return Ok(SanitizationResult::unchanged(text.as_str()));
        }

        let accepted = self.accepted_spans(&text, language)?;

        // Report from input coordinates before anything is rewritten.
        let detections: Vec<DetectionEntry> = accepted.iter().map(DetectionEntry::from).collect();
        let sanitized_text = self.anonymizer.anonymize(&text, &accepted)?;

        Ok(SanitizationResult {
            sanitized_text,
            detections,
        })
    }
}
