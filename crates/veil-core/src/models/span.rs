use serde::{Deserialize, Serialize};

use super::EntityType;

/// An unconfirmed detection proposed by one recognizer.
///
/// `start`/`end` are character offsets into the original text, `[start, end)`.
/// Candidates may overlap or nest; the resolver sorts that out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateSpan {
    pub entity_type: EntityType,
    pub start: usize,
    pub end: usize,
    /// Confidence in `[0.0, 1.0]`.
    pub score: f64,
    /// Name of the recognizer that produced this candidate.
    pub recognizer: String,
}

impl CandidateSpan {
    pub fn new(
        entity_type: EntityType,
        start: usize,
        end: usize,
        score: f64,
        recognizer: impl Into<String>,
    ) -> Self {
        Self {
            entity_type,
            start,
            end,
            score,
            recognizer: recognizer.into(),
        }
    }

    /// Length in characters; zero for inverted ranges.
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }
}

/// A candidate that survived conflict resolution. Accepted spans produced by
/// one resolver pass never intersect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AcceptedSpan {
    pub entity_type: EntityType,
    pub start: usize,
    pub end: usize,
    pub score: f64,
}

impl AcceptedSpan {
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Whether `[start, end)` ranges intersect.
    pub fn overlaps(&self, other: &AcceptedSpan) -> bool {
        self.start < other.end && other.start < self.end
    }
}

impl From<CandidateSpan> for AcceptedSpan {
    fn from(c: CandidateSpan) -> Self {
        Self {
            entity_type: c.entity_type,
            start: c.start,
            end: c.end,
            score: c.score,
        }
    }
}
