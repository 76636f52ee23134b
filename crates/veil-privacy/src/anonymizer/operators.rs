//! Built-in substitution operators.

use veil_core::config::OperatorConfig;
use veil_core::errors::{ConfigError, VeilResult};
use veil_core::traits::IOperator;
use veil_core::EntityType;

/// Replace with a fixed value, or `<ENTITY_TYPE>` when none is configured.
#[derive(Debug, Clone, Default)]
pub struct ReplaceOperator {
    new_value: Option<String>,
}

impl ReplaceOperator {
    pub fn new(new_value: Option<String>) -> Self {
        Self { new_value }
    }

    /// The `<ENTITY_TYPE>` tag form.
    pub fn tag() -> Self {
        Self { new_value: None }
    }
}

impl IOperator for ReplaceOperator {
    fn name(&self) -> &str {
        "replace"
    }

    fn operate(&self, _original: &str, entity_type: &EntityType) -> VeilResult<String> {
        Ok(match &self.new_value {
            Some(value) => value.clone(),
            None => format!("<{entity_type}>"),
        })
    }
}

/// Remove the span.
#[derive(Debug, Clone, Default)]
pub struct RedactOperator;

impl IOperator for RedactOperator {
    fn name(&self) -> &str {
        "redact"
    }

    fn operate(&self, _original: &str, _entity_type: &EntityType) -> VeilResult<String> {
        Ok(String::new())
    }
}

/// Overwrite characters with a masking character.
#[derive(Debug, Clone)]
pub struct MaskOperator {
    masking_char: char,
    /// `None` masks the whole span.
    chars_to_mask: Option<usize>,
    from_end: bool,
}

impl MaskOperator {
    pub fn new(masking_char: char, chars_to_mask: Option<usize>, from_end: bool) -> Self {
        Self {
            masking_char,
            chars_to_mask,
            from_end,
        }
    }
}

impl IOperator for MaskOperator {
    fn name(&self) -> &str {
        "mask"
    }

    fn operate(&self, original: &str, _entity_type: &EntityType) -> VeilResult<String> {
        let total = original.chars().count();
        let masked = self.chars_to_mask.unwrap_or(total).min(total);
        let (mask_from, mask_to) = if self.from_end {
            (total - masked, total)
        } else {
            (0, masked)
        };
        Ok(original
            .chars()
            .enumerate()
            .map(|(i, c)| {
                if (mask_from..mask_to).contains(&i) {
                    self.masking_char
                } else {
                    c
                }
            })
            .collect())
    }
}

/// Deterministic pseudonym: BLAKE3 over salt, entity type and original text,
/// rendered as lowercase hex. The same input always maps to the same output.
#[derive(Debug, Clone, Default)]
pub struct HashOperator {
    salt: String,
}

impl HashOperator {
    pub fn new(salt: Option<String>) -> Self {
        Self {
            salt: salt.unwrap_or_default(),
        }
    }
}

impl IOperator for HashOperator {
    fn name(&self) -> &str {
        "hash"
    }

    fn operate(&self, original: &str, entity_type: &EntityType) -> VeilResult<String> {
        let mut hasher = blake3::Hasher::new();
        hasher.update(self.salt.as_bytes());
        hasher.update(&[0]);
        hasher.update(entity_type.as_str().as_bytes());
        hasher.update(&[0]);
        hasher.update(original.as_bytes());
        Ok(hasher.finalize().to_hex().to_string())
    }
}

/// Leave the text as is. The span still shows up in the report.
#[derive(Debug, Clone, Default)]
pub struct KeepOperator;

impl IOperator for KeepOperator {
    fn name(&self) -> &str {
        "keep"
    }

    fn operate(&self, original: &str, _entity_type: &EntityType) -> VeilResult<String> {
        Ok(original.to_string())
    }
}

/// Build an operator from its config form.
pub fn from_config(config: &OperatorConfig) -> Result<Box<dyn IOperator>, ConfigError> {
    Ok(match config {
        OperatorConfig::Replace { new_value } => Box::new(ReplaceOperator::new(new_value.clone())),
        OperatorConfig::Redact => Box::new(RedactOperator),
        OperatorConfig::Mask {
            masking_char,
            chars_to_mask,
            from_end,
        } => {
            let mut chars = masking_char.chars();
            let (Some(c), None) = (chars.next(), chars.next()) else {
                return Err(ConfigError::ValidationFailed {
                    field: "masking_char".to_string(),
                    message: "must be exactly one character".to_string(),
                });
            };
            Box::new(MaskOperator::new(c, *chars_to_mask, *from_end))
        }
        OperatorConfig::Hash { salt } => Box::new(HashOperator::new(salt.clone())),
        OperatorConfig::Keep => Box::new(KeepOperator),
    })
}
