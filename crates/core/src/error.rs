//! Error types for the ledger analyzer.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the ledger analyzer.
///
/// Only [`Error::MalformedFile`] is fatal to a whole load; every other
/// failure mode is contained to the smallest affected feature and surfaced
/// as a [`crate::Warning`] or a disabled-feature marker instead.
#[derive(Error, Debug)]
pub enum Error {
    /// The input could not be parsed as tabular data at all.
    #[error("Malformed file: {0}")]
    MalformedFile(String),

    /// A column required by a specific feature is absent.
    #[error("Missing column '{column}' required by {feature}")]
    MissingColumn { column: String, feature: String },

    /// An aggregation step failed on unexpected input shape.
    #[error("Computation error: {0}")]
    Computation(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV (de)serialization error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON (de)serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create a malformed-file error.
    pub fn malformed(msg: impl Into<String>) -> Self {
        Error::MalformedFile(msg.into())
    }

    /// Create a missing-column error.
    pub fn missing_column(column: impl Into<String>, feature: impl Into<String>) -> Self {
        Error::MissingColumn {
            column: column.into(),
            feature: feature.into(),
        }
    }

    /// Create a computation error.
    pub fn computation(msg: impl Into<String>) -> Self {
        Error::Computation(msg.into())
    }
}
