//! Directory scan: walk a tree, analyze every text file, and report where
//! sensitive data sits. Findings carry positions and entity types only; the
//! matched text is never reported.

use std::path::{Path, PathBuf};

use anyhow::Context;
use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, info, info_span, warn};
use walkdir::{DirEntry, WalkDir};

use veil_core::tracing::spans;
use veil_core::{DetectionEntry, EntityType};
use veil_privacy::SanitizationPipeline;

/// Directories never descended into.
const IGNORED_DIRS: &[&str] = &[".git"];

/// One detection, located by 1-based line and column (in characters).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScanFinding {
    pub line: usize,
    pub column: usize,
    #[serde(rename = "type")]
    pub entity_type: EntityType,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileFindings {
    pub path: PathBuf,
    pub findings: Vec<ScanFinding>,
}

/// A file or directory the scan could not read or analyze.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScanReport {
    pub root: PathBuf,
    pub files_scanned: usize,
    /// Files with at least one finding, in path order.
    pub files: Vec<FileFindings>,
    pub skipped: Vec<SkippedFile>,
}

impl ScanReport {
    pub fn finding_count(&self) -> usize {
        self.files.iter().map(|f| f.findings.len()).sum()
    }

    pub fn is_clean(&self) -> bool {
        self.files.is_empty()
    }
}

/// Scan every regular file under `root`. Files are analyzed in parallel; a
/// file that is unreadable, not UTF-8, or fails analysis is listed under
/// `skipped` and the scan goes on.
pub fn scan_dir(
    pipeline: &SanitizationPipeline,
    root: &Path,
    language: &str,
) -> anyhow::Result<ScanReport> {
    if !root.is_dir() {
        anyhow::bail!("{} is not a directory", root.display());
    }

    let mut skipped = Vec::new();
    let mut paths = Vec::new();
    let walker = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| !is_ignored(e));
    for entry in walker {
        match entry {
            Ok(entry) if entry.file_type().is_file() => paths.push(entry.into_path()),
            Ok(_) => {}
            Err(e) => {
                let path = e.path().unwrap_or(root).to_path_buf();
                warn!(path = %path.display(), error = %e, "walk error, skipping");
                skipped.push(SkippedFile {
                    path,
                    reason: e.to_string(),
                });
            }
        }
    }

    let outcomes: Vec<(PathBuf, anyhow::Result<Vec<ScanFinding>>)> = paths
        .into_par_iter()
        .map(|path| {
            let outcome = scan_file(pipeline, &path, language);
            (path, outcome)
        })
        .collect();

    let mut files_scanned = 0;
    let mut files = Vec::new();
    for (path, outcome) in outcomes {
        match outcome {
            Ok(findings) => {
                files_scanned += 1;
                if !findings.is_empty() {
                    files.push(FileFindings { path, findings });
                }
            }
            Err(e) => {
                debug!(path = %path.display(), error = %e, "file skipped");
                skipped.push(SkippedFile {
                    path,
                    reason: format!("{e:#}"),
                });
            }
        }
    }

    let report = ScanReport {
        root: root.to_path_buf(),
        files_scanned,
        files,
        skipped,
    };
    info!(
        files_scanned = report.files_scanned,
        files_with_findings = report.files.len(),
        findings = report.finding_count(),
        skipped = report.skipped.len(),
        "scan finished"
    );
    Ok(report)
}

fn is_ignored(entry: &DirEntry) -> bool {
    entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| IGNORED_DIRS.contains(&name))
}

fn scan_file(
    pipeline: &SanitizationPipeline,
    path: &Path,
    language: &str,
) -> anyhow::Result<Vec<ScanFinding>> {
    let _span = info_span!(spans::SCAN_FILE).entered();
    let bytes = std::fs::read(path).context("failed to read file")?;
    let content = String::from_utf8(bytes).context("not UTF-8 text")?;
    let detections = pipeline
        .analyze(&content, language)
        .context("analysis failed")?;
    Ok(locate(&content, &detections))
}

/// Turn character offsets into line and column positions.
fn locate(content: &str, detections: &[DetectionEntry]) -> Vec<ScanFinding> {
    let line_starts: Vec<usize> = std::iter::once(0)
        .chain(
            content
                .chars()
                .enumerate()
                .filter(|(_, c)| *c == '\n')
                .map(|(i, _)| i + 1),
        )
        .collect();

    detections
        .iter()
        .map(|d| {
            // line_starts[0] is 0, so at least one start precedes any offset.
            let line = line_starts.partition_point(|&s| s <= d.start);
            ScanFinding {
                line,
                column: d.start - line_starts[line - 1] + 1,
                entity_type: d.entity_type.clone(),
            }
        })
        .collect()
}
