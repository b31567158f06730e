//! Error types for segment ordering.

use std::num::ParseIntError;

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SegSortError>;

/// Errors produced while configuring or reading segment ordering inputs.
///
/// The data-level variants (`MissingDiagnostic`, `InvalidTimestamp`) are
/// absorbed by the timestamp extractor and never leave a comparator.
#[derive(Debug, Error)]
pub enum SegSortError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Segment {segment} has no '{key}' diagnostic")]
    MissingDiagnostic { segment: String, key: String },

    #[error("Segment {segment} has an unparsable timestamp '{value}'")]
    InvalidTimestamp {
        segment: String,
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl SegSortError {
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        SegSortError::InvalidConfig(msg.into())
    }

    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        SegSortError::InvalidArgument(msg.into())
    }

    pub fn other(msg: impl Into<String>) -> Self {
        SegSortError::Other(msg.into())
    }
}
