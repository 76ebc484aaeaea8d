//! Decoding column lists from JSON or TOML documents.
//!
//! Accepted shapes:
//!
//! - a JSON object with a `postgres_columns` array
//! - a bare JSON array of columns
//! - a TOML document with `[[postgres_columns]]` tables
//!
//! JSON is tried first when the document starts with `{` or `[`.

use std::fs;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::source::SourceColumn;

/// Errors while reading a column list.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("Failed to read input: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON input: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid TOML input: {0}")]
    Toml(#[from] toml::de::Error),
}

/// The document wrapping a column list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnsDocument {
    pub postgres_columns: Vec<SourceColumn>,
}

/// Parse a column list from a string.
pub fn parse_columns(content: &str) -> Result<Vec<SourceColumn>, InputError> {
    let trimmed = content.trim_start();

    if trimmed.starts_with('{') {
        let doc: ColumnsDocument = serde_json::from_str(trimmed)?;
        return Ok(doc.postgres_columns);
    }
    if trimmed.starts_with('[') {
        return Ok(serde_json::from_str(trimmed)?);
    }

    let doc: ColumnsDocument = toml::from_str(content)?;
    Ok(doc.postgres_columns)
}

/// Read a column list from a file.
pub fn read_columns_file<P: AsRef<Path>>(path: P) -> Result<Vec<SourceColumn>, InputError> {
    let content = fs::read_to_string(path)?;
    parse_columns(&content)
}

/// Read a column list from any reader (stdin in the CLI).
pub fn read_columns<R: Read>(mut reader: R) -> Result<Vec<SourceColumn>, InputError> {
    let mut content = String::new();
    reader.read_to_string(&mut content)?;
    parse_columns(&content)
}
