//! Data Load Error Types

use thiserror::Error;

/// Errors while loading a tabular element data source
#[derive(Debug, Error)]
pub enum DataLoadError {
    /// Source file could not be opened or read
    #[error("Failed to read element data: {0}")]
    Io(#[from] std::io::Error),

    /// Source is not well-formed CSV
    #[error("Malformed element data: {0}")]
    Csv(#[from] csv::Error),

    /// Header row lacks a required column
    #[error("Missing required column: {0}")]
    MissingColumn(String),

    /// A field could not be parsed as a number
    #[error("Invalid {column} value '{value}' at line {line}")]
    InvalidValue {
        column: String,
        value: String,
        line: u64,
    },
}
