//! Ordered collection of recognizers queried as one.

use tracing::debug;

use veil_core::config::DetectionConfig;
use veil_core::errors::{ConfigError, RecognizerError, VeilResult};
use veil_core::traits::IRecognizer;
use veil_core::{CandidateSpan, EntityType, Text};

use crate::recognizers::patterns::{all_patterns, check_pattern_health};
use crate::recognizers::secrets::secret_patterns;
use crate::recognizers::{DenyListRecognizer, PatternRecognizer};

/// Runs every recognizer that supports the requested language and
/// concatenates their candidates. Overlaps are left for the resolver.
pub struct RecognizerRegistry {
    recognizers: Vec<Box<dyn IRecognizer>>,
    score_threshold: f64,
    /// Allow-list; empty means every entity type passes.
    entities: Vec<EntityType>,
}

impl RecognizerRegistry {
    /// Empty registry with no threshold and no entity filter.
    pub fn new() -> Self {
        Self {
            recognizers: Vec::new(),
            score_threshold: 0.0,
            entities: Vec::new(),
        }
    }

    /// Registry with every built-in recognizer for the default config.
    pub fn with_defaults() -> Result<Self, ConfigError> {
        Self::from_config(&DetectionConfig::default())
    }

    /// Build the built-in pattern recognizers, the credential recognizers
    /// when enabled, then one deny-list recognizer per configured entity.
    pub fn from_config(config: &DetectionConfig) -> Result<Self, ConfigError> {
        check_pattern_health()?;

        let mut registry = Self::new()
            .with_score_threshold(config.score_threshold)
            .with_entities(config.entities.iter().map(EntityType::new).collect());

        let secrets = if config.secrets {
            secret_patterns()
        } else {
            Vec::new()
        };
        for pattern in all_patterns().into_iter().chain(secrets) {
            registry.add(Box::new(
                PatternRecognizer::new(pattern, config.languages.clone())
                    .with_context(config.context_boost, config.context_window),
            ));
        }
        for (entity, terms) in &config.deny_lists {
            registry.add(Box::new(DenyListRecognizer::new(
                EntityType::new(entity),
                terms,
                config.languages.clone(),
            )?));
        }

        debug!(
            recognizers = registry.len(),
            languages = ?config.languages,
            "recognizer registry built"
        );
        Ok(registry)
    }

    pub fn with_score_threshold(mut self, threshold: f64) -> Self {
        self.score_threshold = threshold;
        self
    }

    pub fn with_entities(mut self, entities: Vec<EntityType>) -> Self {
        self.entities = entities;
        self
    }

    pub fn with_recognizer(mut self, recognizer: Box<dyn IRecognizer>) -> Self {
        self.add(recognizer);
        self
    }

    /// Append a recognizer; it runs after those already registered.
    pub fn add(&mut self, recognizer: Box<dyn IRecognizer>) {
        self.recognizers.push(recognizer);
    }

    /// Remove every recognizer called `name`. Returns whether any was removed.
    pub fn remove(&mut self, name: &str) -> bool {
        let before = self.recognizers.len();
        self.recognizers.retain(|r| r.name() != name);
        self.recognizers.len() != before
    }

    pub fn names(&self) -> Vec<&str> {
        self.recognizers.iter().map(|r| r.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.recognizers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recognizers.is_empty()
    }

    /// Whether at least one recognizer handles `language`.
    pub fn supports_language(&self, language: &str) -> bool {
        self.recognizers.iter().any(|r| r.supports_language(language))
    }

    /// Whether `recognizer` can produce an entity the allow-list keeps.
    fn wants(&self, recognizer: &dyn IRecognizer) -> bool {
        self.entities.is_empty()
            || recognizer
                .supported_entities()
                .iter()
                .any(|e| self.entities.contains(e))
    }

    /// Collect candidates from every recognizer supporting `language`.
    ///
    /// Recognizers whose entities are all outside the allow-list are not run.
    /// Candidates under the score threshold or outside the entity allow-list
    /// are dropped. A candidate ending past the text is a recognizer bug and
    /// fails the call.
    pub fn analyze(&self, text: &Text<'_>, language: &str) -> VeilResult<Vec<CandidateSpan>> {
        let len = text.char_len();
        let mut candidates = Vec::new();

        for recognizer in &self.recognizers {
            if !recognizer.supports_language(language) || !self.wants(recognizer.as_ref()) {
                continue;
            }
            let found = recognizer.analyze(text, language)?;
            debug!(recognizer = recognizer.name(), found = found.len(), "recognizer ran");

            for candidate in found {
                if candidate.end > len {
                    return Err(RecognizerError::SpanOutOfBounds {
                        recognizer: recognizer.name().to_string(),
                        start: candidate.start,
                        end: candidate.end,
                        len,
                    }
                    .into());
                }
                if candidate.score < self.score_threshold {
                    continue;
                }
                if !self.entities.is_empty() && !self.entities.contains(&candidate.entity_type) {
                    continue;
                }
                candidates.push(candidate);
            }
        }
        Ok(candidates)
    }
}

impl Default for RecognizerRegistry {
    fn default() -> Self {
        Self::new()
    }
}
