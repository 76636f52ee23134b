use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::constants;

/// Operator selection per entity type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnonymizationConfig {
    /// Applied to every entity type without an entry in `operators`.
    pub default_operator: OperatorConfig,
    /// Keyed by entity type name.
    pub operators: BTreeMap<String, OperatorConfig>,
}

impl Default for AnonymizationConfig {
    fn default() -> Self {
        Self {
            default_operator: OperatorConfig::Replace { new_value: None },
            operators: BTreeMap::new(),
        }
    }
}

/// Declarative form of a substitution operator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum OperatorConfig {
    /// Replace with `new_value`, or `<ENTITY_TYPE>` when unset.
    Replace {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        new_value: Option<String>,
    },
    /// Remove the span entirely.
    Redact,
    /// Overwrite characters with `masking_char`.
    Mask {
        #[serde(default = "default_masking_char")]
        masking_char: String,
        /// How many characters to mask. All of them when unset.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        chars_to_mask: Option<usize>,
        /// Mask from the end of the span instead of the start.
        #[serde(default)]
        from_end: bool,
    },
    /// Deterministic BLAKE3 pseudonym.
    Hash {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        salt: Option<String>,
    },
    /// Leave the span as is (still reported).
    Keep,
}

fn default_masking_char() -> String {
    constants::DEFAULT_MASKING_CHAR.to_string()
}
