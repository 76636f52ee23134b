use regex::Regex;

use veil_core::errors::{ConfigError, VeilResult};
use veil_core::traits::IRecognizer;
use veil_core::{CandidateSpan, EntityType, Text};

/// Score given to deny-list hits: the term was listed explicitly.
const DENY_LIST_SCORE: f64 = 1.0;

/// Dictionary recognizer: flags literal terms for one entity type.
///
/// Matching is case-insensitive. Terms starting or ending with a word
/// character only match on word boundaries, so "Ann" does not hit "Annual".
pub struct DenyListRecognizer {
    name: String,
    entities: Vec<EntityType>,
    languages: Vec<String>,
    regex: Option<Regex>,
}

impl DenyListRecognizer {
    pub fn new(
        entity_type: EntityType,
        terms: &[String],
        languages: Vec<String>,
    ) -> Result<Self, ConfigError> {
        let name = format!("deny_list:{}", entity_type.as_str().to_ascii_lowercase());

        // Longest first so alternation prefers "Jane Doe" over "Jane".
        let mut sorted: Vec<&str> = terms
            .iter()
            .map(|t| t.trim())
            .filter(|t| !t.is_empty())
            .collect();
        sorted.sort_by(|a, b| b.chars().count().cmp(&a.chars().count()).then(a.cmp(b)));
        sorted.dedup();

        let regex = if sorted.is_empty() {
            None
        } else {
            let alternatives: Vec<String> = sorted.iter().map(|t| bounded(t)).collect();
            let source = format!("(?i)(?:{})", alternatives.join("|"));
            Some(Regex::new(&source).map_err(|e| ConfigError::ValidationFailed {
                field: format!("detection.deny_lists.{entity_type}"),
                message: e.to_string(),
            })?)
        };

        Ok(Self {
            name,
            entities: vec![entity_type],
            languages,
            regex,
        })
    }
}

fn bounded(term: &str) -> String {
    let is_word = |c: char| c.is_alphanumeric() || c == '_';
    let mut out = String::new();
    if term.chars().next().is_some_and(is_word) {
        out.push_str(r"\b");
    }
    out.push_str(&regex::escape(term));
    if term.chars().last().is_some_and(is_word) {
        out.push_str(r"\b");
    }
    out
}

/// Whether `raw[start..end]` is the name inside a placeholder such as `<PERSON>`.
fn inside_tag(raw: &str, start: usize, end: usize) -> bool {
    raw[..start].ends_with('<') && raw[end..].starts_with('>')
}

impl IRecognizer for DenyListRecognizer {
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
        let Some(re) = self.regex.as_ref() else {
            return Ok(Vec::new());
        };
        let raw = text.as_str();
        Ok(re
            .find_iter(raw)
            .filter(|m| !inside_tag(raw, m.start(), m.end()))
            .filter_map(|m| text.char_range(m.start(), m.end()))
            .map(|(start, end)| {
                CandidateSpan::new(
                    self.entities[0].clone(),
                    start,
                    end,
                    DENY_LIST_SCORE,
                    self.name.as_str(),
                )
            })
            .collect())
    }
}
