//! Batch input parsing and result output.
//!
//! Batch files are either a JSON array (strings, or values stringified) or
//! plain text with one input per line. Blank lines are skipped.

use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::types::ClassificationRecord;
use crate::{FlokkrError, Result};

/// Parse batch input content into individual texts.
///
/// A JSON array is taken element-wise (strings as-is, other values
/// serialised); anything else is split into non-empty trimmed lines.
pub fn parse_texts(content: &str) -> Vec<String> {
    let trimmed = content.trim();
    if let Ok(Value::Array(items)) = serde_json::from_str::<Value>(trimmed) {
        return items
            .into_iter()
            .map(|v| match v {
                Value::String(s) => s,
                other => other.to_string(),
            })
            .collect();
    }
    trimmed
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}

/// Read batch input texts from a file.
pub fn read_texts(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path)
        .map_err(|e| FlokkrError::Data(format!("failed to read input file {path:?}: {e}")))?;
    let texts = parse_texts(&content);
    if texts.is_empty() {
        return Err(FlokkrError::Data(format!(
            "no texts found in input file {path:?}"
        )));
    }
    Ok(texts)
}

/// Serialise records as pretty JSON.
pub fn to_pretty_json(records: &[ClassificationRecord]) -> Result<String> {
    Ok(serde_json::to_string_pretty(records)?)
}

/// Write records to a file as pretty JSON.
pub fn write_records(records: &[ClassificationRecord], path: &Path) -> Result<()> {
    let json = to_pretty_json(records)?;
    fs::write(path, json)
        .map_err(|e| FlokkrError::Data(format!("failed to write output file {path:?}: {e}")))
}
