//! Store-subsystem error type.

use thiserror::Error;

/// Errors produced by position-store backends.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The queried key exists but holds no usable data (absent or `null`).
    #[error("no data at store path {0:?}")]
    NoData(String),

    /// A record was present but a required field was not.
    #[error("record at {path:?} is missing field {field:?}")]
    MissingField { path: String, field: &'static str },

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("failed to parse store response: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("CSV read error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;
