//! Text rewriting from accepted spans.

pub mod operators;

use std::collections::HashMap;

use veil_core::config::AnonymizationConfig;
use veil_core::errors::{AnonymizationError, ConfigError, VeilResult};
use veil_core::traits::IOperator;
use veil_core::{AcceptedSpan, EntityType, Text};

use operators::ReplaceOperator;

/// Applies one operator per entity type, falling back to a default.
pub struct Anonymizer {
    operators: HashMap<EntityType, Box<dyn IOperator>>,
    default_operator: Box<dyn IOperator>,
}

impl Anonymizer {
    pub fn new(default_operator: Box<dyn IOperator>) -> Self {
        Self {
            operators: HashMap::new(),
            default_operator,
        }
    }

    pub fn from_config(config: &AnonymizationConfig) -> Result<Self, ConfigError> {
        let mut anonymizer = Self::new(operators::from_config(&config.default_operator)?);
        for (entity, op) in &config.operators {
            anonymizer.set_operator(EntityType::new(entity), operators::from_config(op)?);
        }
        Ok(anonymizer)
    }

    pub fn with_operator(mut self, entity_type: EntityType, operator: Box<dyn IOperator>) -> Self {
        self.set_operator(entity_type, operator);
        self
    }

    pub fn set_operator(&mut self, entity_type: EntityType, operator: Box<dyn IOperator>) {
        self.operators.insert(entity_type, operator);
    }

    /// Exact entity match first, else the default.
    pub fn operator_for(&self, entity_type: &EntityType) -> &dyn IOperator {
        self.operators
            .get(entity_type)
            .map_or(self.default_operator.as_ref(), |op| op.as_ref())
    }

    /// Rewrite `text`, substituting each span and copying the gaps verbatim.
    ///
    /// `spans` must be sorted by start, disjoint and inside the text, as the
    /// resolver guarantees; anything else is rejected rather than patched up.
    pub fn anonymize(&self, text: &Text<'_>, spans: &[AcceptedSpan]) -> VeilResult<String> {
        let raw = text.as_str();
        let mut out = String::with_capacity(raw.len());
        let mut cursor_char = 0;
        let mut cursor_byte = 0;

        for span in spans {
            if span.start >= span.end {
                return Err(invalid(span, "empty or inverted range"));
            }
            if span.start < cursor_char {
                return Err(invalid(span, "overlaps or precedes the previous span"));
            }
            let (Some(from), Some(to)) = (text.byte_offset(span.start), text.byte_offset(span.end))
            else {
                return Err(invalid(
                    span,
                    &format!("outside text of length {}", text.char_len()),
                ));
            };

            let operator = self.operator_for(&span.entity_type);
            let replacement = operator.operate(&raw[from..to], &span.entity_type)?;

            out.push_str(&raw[cursor_byte..from]);
            out.push_str(&replacement);
            cursor_char = span.end;
            cursor_byte = to;
        }
        out.push_str(&raw[cursor_byte..]);
        Ok(out)
    }
}

impl Default for Anonymizer {
    fn default() -> Self {
        Self::new(Box::new(ReplaceOperator::tag()))
    }
}

fn invalid(span: &AcceptedSpan, reason: &str) -> veil_core::VeilError {
    AnonymizationError::InvalidSpan {
        start: span.start,
        end: span.end,
        reason: reason.to_string(),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use operators::{MaskOperator, RedactOperator};
    use veil_core::errors::VeilError;

    fn accepted(entity: EntityType, start: usize, end: usize) -> AcceptedSpan {
        AcceptedSpan {
            entity_type: entity,
            start,
            end,
            score: 1.0,
        }
    }

    #[test]
    fn replaces_spans_and_keeps_gaps() {
        let raw = "Contact Jane Doe at jane@example.com";
        let out = Anonymizer::default()
            .anonymize(
                &Text::new(raw),
                &[
                    accepted(EntityType::PERSON, 8, 16),
                    accepted(EntityType::EMAIL, 20, 36),
                ],
            )
            .unwrap();
        assert_eq!(out, "Contact <PERSON> at <EMAIL>");
    }

    #[test]
    fn per_entity_operator_overrides_default() {
        let anonymizer = Anonymizer::default()
            .with_operator(EntityType::PERSON, Box::new(RedactOperator))
            .with_operator(EntityType::PHONE, Box::new(MaskOperator::new('*', None, false)));
        let out = anonymizer
            .anonymize(
                &Text::new("Jane: 555"),
                &[accepted(EntityType::PERSON, 0, 4), accepted(EntityType::PHONE, 6, 9)],
            )
            .unwrap();
        assert_eq!(out, ": ***");
    }

    #[test]
    fn multibyte_text_is_sliced_by_characters() {
        let out = Anonymizer::default()
            .anonymize(&Text::new("Zoë Ünal ok"), &[accepted(EntityType::PERSON, 0, 8)])
            .unwrap();
        assert_eq!(out, "<PERSON> ok");
    }

    #[test]
    fn no_spans_is_identity() {
        let out = Anonymizer::default().anonymize(&Text::new("plain"), &[]).unwrap();
        assert_eq!(out, "plain");
    }

    #[test]
    fn overlapping_spans_rejected() {
        let err = Anonymizer::default()
            .anonymize(
                &Text::new("abcdefghij"),
                &[accepted(EntityType::EMAIL, 0, 5), accepted(EntityType::PHONE, 3, 8)],
            )
            .unwrap_err();
        assert!(matches!(
            err,
            VeilError::Anonymization(AnonymizationError::InvalidSpan { start: 3, end: 8, .. })
        ));
    }

    #[test]
    fn out_of_range_span_rejected() {
        let err = Anonymizer::default()
            .anonymize(&Text::new("abc"), &[accepted(EntityType::EMAIL, 1, 9)])
            .unwrap_err();
        assert!(err.to_string().contains("outside text of length 3"));
    }
}
