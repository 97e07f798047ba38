//! Error types for the loader and report layers.
//!
//! The analyzer core itself never fails; only the I/O adapters around it do.

use std::path::PathBuf;

use thiserror::Error;

/// A single CSV row that could not be turned into a token.
/// These are skipped one by one and never abort a file.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RowError {
    #[error("too few columns ({found}), expected at least 8")]
    TooFewColumns { found: usize },

    #[error("invalid lexeme id '{value}'")]
    InvalidLexemeId { value: String },
}

/// Errors raised while loading a corpus directory.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("directory '{0}' does not exist")]
    MissingDirectory(PathBuf),

    #[error("no CSV files found in '{0}'")]
    NoCsvFiles(PathBuf),

    #[error("failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed CSV in '{path}': {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

/// Errors raised while rendering a report.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for loader operations.
pub type Result<T, E = LoadError> = std::result::Result<T, E>;
