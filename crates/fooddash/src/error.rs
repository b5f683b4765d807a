//! Error types for the fooddash library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for fooddash operations.
#[derive(Debug, Error)]
pub enum FooddashError {
    /// Error reading or accessing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error from the CSV library.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Empty file or no data rows.
    #[error("Empty data: {0}")]
    EmptyData(String),

    /// A required column is absent from the source table.
    #[error("Schema error: required column '{column}' is missing")]
    Schema { column: String },

    /// A cell could not be coerced to its target type.
    ///
    /// `row` is the 1-based data row of the source table (header excluded),
    /// so it still points at the input after incomplete rows were dropped.
    #[error("Malformed value at row {row}, column '{column}': '{value}' ({reason})")]
    MalformedValue {
        row: usize,
        column: String,
        value: String,
        reason: String,
    },

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl FooddashError {
    /// Build a [`FooddashError::MalformedValue`].
    pub fn malformed(
        row: usize,
        column: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        FooddashError::MalformedValue {
            row,
            column: column.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }
}

/// Result type alias for fooddash operations.
pub type Result<T> = std::result::Result<T, FooddashError>;
