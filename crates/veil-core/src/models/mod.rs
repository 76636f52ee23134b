mod entity_type;
mod report;
mod span;

pub use entity_type::EntityType;
pub use report::{DetectionEntry, SanitizationResult};
pub use span::{AcceptedSpan, CandidateSpan};
