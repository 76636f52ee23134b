//! Whole-file sanitization.

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Serialize;
use tracing::info;

use veil_core::traits::ISanitizer;
use veil_core::DetectionEntry;

/// What `sanitize_file` did. Offsets refer to the input file's characters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileReport {
    pub input: PathBuf,
    /// Where the sanitized text was written; `None` leaves it to the caller.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,
    pub detected_entities: Vec<DetectionEntry>,
    #[serde(skip)]
    pub sanitized_text: String,
}

/// Sanitize the whole content of `input` as one text. With an `output` path
/// the result is written there; the sanitized text is always in the report.
///
/// Nothing is written when sanitization fails.
pub fn sanitize_file(
    sanitizer: &dyn ISanitizer,
    input: &Path,
    output: Option<&Path>,
    language: &str,
) -> anyhow::Result<FileReport> {
    let content = std::fs::read_to_string(input)
        .with_context(|| format!("failed to read {}", input.display()))?;

    let result = sanitizer
        .sanitize(&content, language)
        .with_context(|| format!("failed to sanitize {}", input.display()))?;

    if let Some(output) = output {
        std::fs::write(output, &result.sanitized_text)
            .with_context(|| format!("failed to write {}", output.display()))?;
    }

    info!(
        detections = result.detections.len(),
        input = %input.display(),
        "file sanitized"
    );
    Ok(FileReport {
        input: input.to_path_buf(),
        output: output.map(Path::to_path_buf),
        detected_entities: result.detections,
        sanitized_text: result.sanitized_text,
    })
}
