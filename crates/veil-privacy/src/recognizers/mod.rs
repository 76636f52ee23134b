//! Built-in recognizers: regex patterns with checksum validation and context
//! boosting, credential patterns, plus literal deny lists.

pub mod checksums;
pub mod context;
pub mod deny_list;
pub mod pattern;
pub mod patterns;
pub mod secrets;

pub use deny_list::DenyListRecognizer;
pub use pattern::PatternRecognizer;
