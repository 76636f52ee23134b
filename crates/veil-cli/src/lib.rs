//! # veil-cli
//!
//! Process-level collaborators around the sanitization pipeline: the
//! JSON-lines stream processor, whole-file sanitization and the directory
//! scan. The `veil` binary wires these to stdin/stdout.

pub mod file;
pub mod scan;
pub mod stream;

pub use file::{sanitize_file, FileReport};
pub use scan::{scan_dir, FileFindings, ScanFinding, ScanReport, SkippedFile};
pub use stream::{process_line, run, StreamRecord, StreamStats};
