//! Test fixture loader for Veil golden datasets.
//!
//! Provides typed deserialization of the fixture JSON files and helper
//! functions for loading them in tests across crates.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::path::PathBuf;

/// Root directory of the test-fixtures folder.
fn fixtures_root() -> PathBuf {
    // Works from any crate in the workspace: walk up to find test-fixtures.
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);

    while !path.join("test-fixtures").join("golden").exists() {
        if !path.pop() {
            panic!(
                "Could not find test-fixtures directory from CARGO_MANIFEST_DIR={}",
                manifest_dir
            );
        }
    }
    path.join("test-fixtures")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// List all JSON files in a fixture subdirectory, sorted by name.
pub fn list_fixtures(subdir: &str) -> Vec<PathBuf> {
    let dir = fixtures_root().join(subdir);
    if !dir.exists() {
        return Vec::new();
    }
    let mut files: Vec<PathBuf> = std::fs::read_dir(&dir)
        .unwrap_or_else(|e| panic!("Failed to read directory {}: {}", dir.display(), e))
        .filter_map(|entry| {
            let entry = entry.ok()?;
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                Some(path)
            } else {
                None
            }
        })
        .collect();
    files.sort();
    files
}

/// A golden sanitization dataset.
#[derive(Debug, Deserialize)]
pub struct GoldenSet {
    pub description: String,
    pub cases: Vec<GoldenCase>,
}

/// One input text with its expected report and, optionally, exact output.
#[derive(Debug, Deserialize)]
pub struct GoldenCase {
    pub id: String,
    pub text: String,
    #[serde(default = "default_language")]
    pub language: String,
    /// Exact sanitized text, when the case pins it.
    #[serde(default)]
    pub expected_sanitized: Option<String>,
    pub expected_detections: Vec<ExpectedDetection>,
}

/// Expected detection in original-text character offsets.
#[derive(Debug, Deserialize, PartialEq, Eq)]
pub struct ExpectedDetection {
    #[serde(rename = "type")]
    pub entity_type: String,
    pub start: usize,
    pub end: usize,
}

fn default_language() -> String {
    "en".to_string()
}

/// Load a golden dataset from `golden/privacy/<name>.json`.
pub fn load_golden(name: &str) -> GoldenSet {
    load_fixture(&format!("golden/privacy/{name}.json"))
}
