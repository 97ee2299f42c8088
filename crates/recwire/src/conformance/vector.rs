//! Test vector loading.

use std::fs;
use std::path::Path;

use serde::Deserialize;

/// Which codec a vector exercises.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CodecKind {
    Fixed,
    Tagged,
    CompactLen,
}

/// An externally authored golden vector: a logical value plus the bytes a
/// conforming encoder must produce for it.
///
/// Immutable once loaded; consumed once per harness run.
#[derive(Debug, Clone, Deserialize)]
pub struct TestVector {
    pub name: String,
    pub codec: CodecKind,
    pub type_tag: String,
    pub value: serde_json::Value,
    pub encoded: Vec<u8>,
}

/// Errors that abort a whole harness run.
#[derive(Debug, thiserror::Error)]
pub enum HarnessError {
    #[error("cannot read vector file: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed vector file: {0}")]
    Json(#[from] serde_json::Error),
}

/// Parses a vector file's JSON contents.
pub fn load_vectors(json: &str) -> Result<Vec<TestVector>, HarnessError> {
    Ok(serde_json::from_str(json)?)
}

/// Reads and parses a vector file.
pub fn load_vectors_file(path: &Path) -> Result<Vec<TestVector>, HarnessError> {
    load_vectors(&fs::read_to_string(path)?)
}
