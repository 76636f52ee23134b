//! Block-on-detection policy.
//!
//! Some callers must not forward text containing PII at all, sanitized or
//! not. `guard` turns a sanitization result into a verdict they can act on.
//! The same check runs on requests going in and on tool responses coming
//! back; only the notice differs.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use veil_core::errors::VeilResult;
use veil_core::traits::ISanitizer;
use veil_core::EntityType;

/// Which side of a tool call the guarded text comes from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GuardDirection {
    /// A request about to be sent.
    #[default]
    Input,
    /// A response about to be returned to the caller.
    Output,
}

/// Outcome of a guard check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "verdict", rename_all = "snake_case")]
pub enum GuardVerdict {
    /// Nothing detected; `sanitized` equals the input.
    Allowed { sanitized: String },
    /// At least one entity was detected. Types are unique and sorted.
    Blocked {
        direction: GuardDirection,
        entity_types: Vec<EntityType>,
    },
}

impl GuardVerdict {
    pub fn is_blocked(&self) -> bool {
        matches!(self, Self::Blocked { .. })
    }

    /// Human-readable notice for blocked text; `None` when allowed.
    pub fn message(&self) -> Option<String> {
        let Self::Blocked {
            direction,
            entity_types,
        } = self
        else {
            return None;
        };
        let names = entity_types
            .iter()
            .map(EntityType::as_str)
            .collect::<Vec<_>>()
            .join(", ");
        Some(match direction {
            GuardDirection::Input => format!(
                "[Sensitive Data Detected] Your request contains sensitive information ({names}) and has been cancelled."
            ),
            GuardDirection::Output => format!(
                "[Sensitive Data Detected in Output] The tool's response contains sensitive information ({names}) and has been blocked."
            ),
        })
    }
}

/// Sanitize `text` and block it if anything was detected.
pub fn guard(
    sanitizer: &dyn ISanitizer,
    text: &str,
    language: &str,
    direction: GuardDirection,
) -> VeilResult<GuardVerdict> {
    let result = sanitizer.sanitize(text, language)?;
    if result.detections.is_empty() {
        return Ok(GuardVerdict::Allowed {
            sanitized: result.sanitized_text,
        });
    }
    let entity_types: BTreeSet<EntityType> = result
        .detections
        .into_iter()
        .map(|d| d.entity_type)
        .collect();
    Ok(GuardVerdict::Blocked {
        direction,
        entity_types: entity_types.into_iter().collect(),
    })
}
