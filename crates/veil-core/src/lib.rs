//! # veil-core
//!
//! Foundation crate for the Veil PII sanitizer.
//! Defines the span and report types, the recognizer/operator/sanitizer traits,
//! errors, config, constants and tracing setup. Every other crate in the
//! workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod text;
pub mod tracing;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::VeilConfig;
pub use errors::{VeilError, VeilResult};
pub use models::{AcceptedSpan, CandidateSpan, DetectionEntry, EntityType, SanitizationResult};
pub use text::Text;
