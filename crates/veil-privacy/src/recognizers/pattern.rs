use regex::Regex;

use veil_core::errors::{RecognizerError, VeilResult};
use veil_core::traits::IRecognizer;
use veil_core::{CandidateSpan, EntityType, Text};

use super::context::{boost, has_context_word, looks_like_placeholder};
use super::patterns::PiiPattern;

/// Regex recognizer for one entity type.
///
/// Each match is checked against the pattern's validator, dropped if it looks
/// like a placeholder, and boosted when a context word precedes it.
pub struct PatternRecognizer {
    name: String,
    pattern: PiiPattern,
    entities: Vec<EntityType>,
    languages: Vec<String>,
    context_boost: f64,
    context_window: usize,
}

impl PatternRecognizer {
    pub fn new(pattern: PiiPattern, languages: Vec<String>) -> Self {
        Self {
            name: format!("pattern:{}", pattern.name),
            entities: vec![pattern.entity_type.clone()],
            pattern,
            languages,
            context_boost: veil_core::constants::DEFAULT_CONTEXT_BOOST,
            context_window: veil_core::constants::DEFAULT_CONTEXT_WINDOW,
        }
    }

    /// Override the context boost and the window it searches.
    pub fn with_context(mut self, boost: f64, window: usize) -> Self {
        self.context_boost = boost;
        self.context_window = window;
        self
    }

    pub fn pattern(&self) -> &PiiPattern {
        &self.pattern
    }

    /// The match when it validates, else its longest prefix cut at a space
    /// that validates and is still a whole match on its own. Grouped formats
    /// can run into the next word, as in "BE68 5390 0754 7034 EUR".
    fn validated<'t>(&self, re: &Regex, matched: &'t str) -> Option<&'t str> {
        let Some(validate) = self.pattern.validator else {
            return Some(matched);
        };
        if validate(matched) {
            return Some(matched);
        }
        let mut candidate = matched;
        while let Some(cut) = candidate.rfind(' ') {
            candidate = candidate[..cut].trim_end();
            let whole = re
                .find(candidate)
                .is_some_and(|m| m.start() == 0 && m.end() == candidate.len());
            if whole && validate(candidate) {
                return Some(candidate);
            }
        }
        None
    }
}

impl IRecognizer for PatternRecognizer {
    fn name(&self) -> &str {
        &self.name
    }

    fn supported_entities(&self) -> &[EntityType] {
        &self.entities
    }

    fn supports_language(&self, language: &str) -> bool {
        self.languages.iter().any(|l| l.eq_ignore_ascii_case(language))
    }

    fn analyze(&self, text: &Text<'_>, _language: &str) -> VeilResult<Vec<CandidateSpan>> {
        let Some(re) = self.pattern.regex.as_ref() else {
            return Err(RecognizerError::PatternUnavailable {
                recognizer: self.name.clone(),
                pattern: self.pattern.name.to_string(),
            }
            .into());
        };

        let raw = text.as_str();
        let mut out = Vec::new();
        for m in re.find_iter(raw) {
            if looks_like_placeholder(m.as_str()) {
                continue;
            }
            let Some(matched) = self.validated(re, m.as_str()) else {
                continue;
            };
            let Some((start, end)) = text.char_range(m.start(), m.start() + matched.len()) else {
                continue;
            };

            let mut score = self.pattern.base_score;
            if has_context_word(raw, m.start(), self.context_window, self.pattern.context) {
                score = boost(score, self.context_boost);
            }

            out.push(CandidateSpan::new(
                self.pattern.entity_type.clone(),
                start,
                end,
                score,
                self.name.as_str(),
            ));
        }
        Ok(out)
    }
}
