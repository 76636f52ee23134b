//! JSON-lines stream processor.
//!
//! One input object per line, one output object per line, in order. A record
//! that cannot be parsed or sanitized becomes an error record and the stream
//! keeps going; only I/O failures stop it.

use std::io::{BufRead, Write};

use anyhow::Context;
use serde::{Deserialize, Serialize};
use tracing::{info, info_span, warn};

use veil_core::errors::VeilErrorCode;
use veil_core::tracing::spans;
use veil_core::traits::ISanitizer;
use veil_core::DetectionEntry;

/// Input envelope: `{"text": "...", "language": "en"}`.
#[derive(Debug, Deserialize)]
struct InputRecord {
    #[serde(default)]
    text: String,
    #[serde(default)]
    language: Option<String>,
}

/// Output envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StreamRecord {
    /// The record could not be sanitized. `sanitized` carries the input text
    /// as-is when it could be read, else an empty string.
    Failure {
        error: String,
        sanitized: String,
        detected_entities: Vec<DetectionEntry>,
    },
    Success {
        sanitized: String,
        detected_entities: Vec<DetectionEntry>,
    },
}

impl StreamRecord {
    fn failure(error: impl ToString, sanitized: String) -> Self {
        Self::Failure {
            error: error.to_string(),
            sanitized,
            detected_entities: Vec::new(),
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failure { .. })
    }
}

/// Counters for one `run`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StreamStats {
    pub records: usize,
    pub failures: usize,
    pub detections: usize,
}

/// Turn one input line into one output record. Never fails.
pub fn process_line(sanitizer: &dyn ISanitizer, line: &str, default_language: &str) -> StreamRecord {
    let value: serde_json::Value = match serde_json::from_str(line) {
        Ok(v) => v,
        Err(e) => {
            warn!(error_code = "PARSE_ERROR", "input line is not valid JSON");
            return StreamRecord::failure(e, String::new());
        }
    };

    let input = match InputRecord::deserialize(&value) {
        Ok(input) => input,
        Err(e) => {
            warn!(error_code = "PARSE_ERROR", "input record has the wrong shape");
            let text = value
                .get("text")
                .and_then(serde_json::Value::as_str)
                .unwrap_or_default()
                .to_string();
            return StreamRecord::failure(e, text);
        }
    };

    let language = input.language.as_deref().unwrap_or(default_language);
    match sanitizer.sanitize(&input.text, language) {
        Ok(result) => StreamRecord::Success {
            sanitized: result.sanitized_text,
            detected_entities: result.detections,
        },
        Err(e) => {
            warn!(error_code = e.error_code(), error = %e, "record failed, passing text through");
            StreamRecord::failure(e, input.text)
        }
    }
}

/// Filter `reader` into `writer` line by line. Output is flushed after every
/// record so a downstream reader sees results as they are produced. A line
/// that is not valid UTF-8 becomes an error record like any other bad input.
pub fn run<R, W>(
    sanitizer: &dyn ISanitizer,
    mut reader: R,
    mut writer: W,
    default_language: &str,
) -> anyhow::Result<StreamStats>
where
    R: BufRead,
    W: Write,
{
    let mut stats = StreamStats::default();
    let mut buf = Vec::new();
    let mut line_no = 0usize;

    loop {
        buf.clear();
        let read = reader
            .read_until(b'\n', &mut buf)
            .with_context(|| format!("failed to read input line {}", line_no + 1))?;
        if read == 0 {
            break;
        }
        line_no += 1;

        let bytes = strip_line_ending(&buf);
        let _span = info_span!(spans::STREAM_RECORD, line = line_no).entered();
        let record = match std::str::from_utf8(bytes) {
            Ok(line) if line.trim().is_empty() => continue,
            Ok(line) => process_line(sanitizer, line, default_language),
            Err(e) => {
                warn!(error_code = "PARSE_ERROR", "input line is not valid UTF-8");
                StreamRecord::failure(e, String::new())
            }
        };

        stats.records += 1;
        match &record {
            StreamRecord::Failure { .. } => stats.failures += 1,
            StreamRecord::Success {
                detected_entities, ..
            } => stats.detections += detected_entities.len(),
        }

        serde_json::to_writer(&mut writer, &record).context("failed to encode output record")?;
        writer.write_all(b"\n").context("failed to write output")?;
        writer.flush().context("failed to flush output")?;
    }

    info!(
        records = stats.records,
        failures = stats.failures,
        detections = stats.detections,
        "stream finished"
    );
    Ok(stats)
}

fn strip_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}
