//! Fixture loading and management.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::HarnessError;

/// A single fixture test case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixtureCase {
    /// Case identifier.
    pub name: String,
    /// Function being tested (`inet6_aton`, `inet6_ntoa`, `is_ipv4`, ...).
    pub function: String,
    /// Input parameters (`{"text": ...}` or `{"bytes": "<hex>"}`).
    pub inputs: serde_json::Value,
    /// Expected output: lower-case hex for binary results, text otherwise,
    /// `NULL` when the function yields no result.
    pub expected_output: String,
    /// Expected rejection kind when `expected_output` is `NULL`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_error: Option<String>,
}

/// A collection of fixture cases for a function family.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixtureSet {
    /// Schema version.
    pub version: String,
    /// Function family name.
    pub family: String,
    /// UTC timestamp of capture.
    pub captured_at: String,
    /// Individual test cases.
    pub cases: Vec<FixtureCase>,
}

impl FixtureSet {
    /// Load fixture set from JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize fixture set to JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load fixture set from a file path.
    pub fn from_file(path: &Path) -> Result<Self, HarnessError> {
        let content = std::fs::read_to_string(path)?;
        let set = Self::from_json(&content)?;
        Ok(set)
    }

    /// Load every `*.json` fixture set from a directory, or the single set
    /// at `path` if it is a file. Sets are ordered by file name.
    pub fn load_all(path: &Path) -> Result<Vec<Self>, HarnessError> {
        if path.is_file() {
            return Ok(vec![Self::from_file(path)?]);
        }

        let mut files = Vec::new();
        for entry in std::fs::read_dir(path)? {
            let file = entry?.path();
            if file.extension().is_some_and(|ext| ext == "json") {
                files.push(file);
            }
        }
        files.sort();

        files.iter().map(|file| Self::from_file(file)).collect()
    }
}
