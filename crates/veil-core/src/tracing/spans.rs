//! Span names shared by every crate, so log queries stay stable.
//!
//! Span fields carry counts, entity types and offsets. Raw text never goes
//! into a span or event.

/// One `sanitize` call.
pub const SANITIZE: &str = "veil.sanitize";

/// One `analyze` call (detection report only).
pub const ANALYZE: &str = "veil.analyze";

/// One record handled by the stream processor.
pub const STREAM_RECORD: &str = "veil.stream.record";


/// One file read and analyzed by the directory scan.
pub const SCAN_FILE: &str = "veil.scan.file";
