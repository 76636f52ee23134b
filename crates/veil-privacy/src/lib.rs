//! # veil-privacy
//!
//! PII sanitization engine.
//! Regex, checksum and dictionary recognizers feed a registry; a greedy
//! interval resolver picks one consistent span set; per-entity operators
//! rewrite the text while the report keeps input coordinates.

pub mod anonymizer;
pub mod guard;
pub mod pipeline;
pub mod recognizers;
pub mod registry;
pub mod resolver;

pub use anonymizer::Anonymizer;
pub use guard::{guard, GuardDirection, GuardVerdict};
pub use pipeline::SanitizationPipeline;
pub use registry::RecognizerRegistry;
pub use resolver::resolve;
