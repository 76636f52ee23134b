use serde::{Deserialize, Serialize};

use super::{AcceptedSpan, EntityType};

/// One entry of the detection report: where an accepted span sits in the
/// *original* text. Never expressed in post-substitution coordinates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetectionEntry {
    #[serde(rename = "type")]
    pub entity_type: EntityType,
    pub start: usize,
    pub end: usize,
}

impl From<&AcceptedSpan> for DetectionEntry {
    fn from(span: &AcceptedSpan) -> Self {
        Self {
            entity_type: span.entity_type.clone(),
            start: span.start,
            end: span.end,
        }
    }
}

/// Output of one sanitization call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SanitizationResult {
    pub sanitized_text: String,
    /// Ordered by ascending `start`.
    pub detections: Vec<DetectionEntry>,
}

impl SanitizationResult {
    /// Result for text that passed through untouched.
    pub fn unchanged(text: &str) -> Self {
        Self {
            sanitized_text: text.to_string(),
            detections: Vec::new(),
        }
    }

    pub fn has_detections(&self) -> bool {
        !self.detections.is_empty()
    }
}
