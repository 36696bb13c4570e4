//! Map-sink error type.

use thiserror::Error;

/// Errors that can occur while rendering or saving the map artifact.
#[derive(Debug, Error)]
pub enum MapError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("map data serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

pub type MapResult<T> = Result<T, MapError>;
