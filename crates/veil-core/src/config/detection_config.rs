use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::constants;

/// Recognizer registry configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectionConfig {
    /// Language used when a record does not carry one.
    pub default_language: String,
    /// Languages the built-in recognizers are registered for.
    pub languages: Vec<String>,
    /// Candidates scoring below this are dropped before resolution.
    pub score_threshold: f64,
    /// Entity allow-list. Empty means every entity type is reported.
    pub entities: Vec<String>,
    /// Score added when a context word appears before a pattern match.
    pub context_boost: f64,
    /// Characters before a match searched for context words.
    pub context_window: usize,
    /// Literal terms per entity type, e.g. `PERSON = ["Jane Doe"]`.
    pub deny_lists: BTreeMap<String, Vec<String>>,
    /// Register the credential recognizers (cloud keys, tokens, private keys).
    pub secrets: bool,
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            default_language: constants::DEFAULT_LANGUAGE.to_string(),
            languages: vec![constants::DEFAULT_LANGUAGE.to_string()],
            score_threshold: constants::DEFAULT_SCORE_THRESHOLD,
            entities: Vec::new(),
            context_boost: constants::DEFAULT_CONTEXT_BOOST,
            context_window: constants::DEFAULT_CONTEXT_WINDOW,
            deny_lists: BTreeMap::new(),
            secrets: true,
        }
    }
}
