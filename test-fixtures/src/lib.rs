//! Test fixture loader for Verity golden article datasets.
//!
//! Provides typed deserialization of the fixture JSON files and helper
//! functions for loading them in tests across crates.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::path::PathBuf;

/// A golden dataset file: a description plus labelled article samples.
#[derive(Debug, Clone, Deserialize)]
pub struct GoldenArticles {
    pub description: String,
    pub samples: Vec<ArticleSample>,
}

/// One labelled article.
#[derive(Debug, Clone, Deserialize)]
pub struct ArticleSample {
    pub id: String,
    pub text: String,
    /// "fake", "real", or "uncertain". Absent when an error is expected.
    #[serde(default)]
    pub expected_result: Option<String>,
    /// Exact confidence, compared with a small tolerance.
    #[serde(default)]
    pub expected_confidence: Option<f64>,
    /// Error code expected instead of a verdict.
    #[serde(default)]
    pub expected_error: Option<String>,
    #[serde(default)]
    pub expected_fake_matches: Option<Vec<String>>,
    #[serde(default)]
    pub expected_real_matches: Option<Vec<String>>,
    #[serde(default)]
    pub expected_quality_matches: Option<Vec<String>>,
    #[serde(default)]
    pub expected_all_caps_escalated: Option<bool>,
    #[serde(default)]
    pub expected_emotional_escalated: Option<bool>,
}

/// Root directory of the test-fixtures folder.
fn fixtures_root() -> PathBuf {
    // Works from any crate in the workspace: walk up to find test-fixtures.
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);

    // Inside the fixtures crate itself, the manifest dir is the root.
    if path.join("golden").exists() {
        return path;
    }

    while !path.join("test-fixtures").exists() {
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

/// Load a fixture file as raw JSON Value.
pub fn load_fixture_value(relative_path: &str) -> serde_json::Value {
    load_fixture(relative_path)
}

/// Load a golden article dataset.
pub fn load_golden_articles(relative_path: &str) -> GoldenArticles {
    load_fixture(relative_path)
}

/// Check that a fixture file exists.
pub fn fixture_exists(relative_path: &str) -> bool {
    fixtures_root().join(relative_path).exists()
}

/// Get the absolute path to a fixture file.
pub fn fixture_path(relative_path: &str) -> PathBuf {
    fixtures_root().join(relative_path)
}

/// List all JSON files in a fixture subdirectory, sorted by path.
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
