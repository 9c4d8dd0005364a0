//! Error types for the Assay library.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Fatal conditions that stop a table from being profiled.
///
/// These are returned as data in [`ProfileResult::errors`](crate::ProfileResult)
/// rather than raised, so callers can show them next to any parser warnings.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ParseError {
    /// The input contained no non-blank lines.
    #[error("Input is empty")]
    EmptyInput,

    /// The header line produced no column names.
    #[error("No headers found in the first line")]
    NoHeaders,

    /// A header line was present but no data rows followed it.
    #[error("No data rows found after the header")]
    NoDataRows,
}

/// Main error type for Assay operations.
#[derive(Debug, Error)]
pub enum AssayError {
    /// Error reading or accessing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Input could not be parsed into a table.
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AssayError {
    /// Build a configuration error from any message.
    pub fn config(message: impl Into<String>) -> Self {
        AssayError::Config(message.into())
    }
}

/// Result type alias for Assay operations.
pub type Result<T> = std::result::Result<T, AssayError>;
