//! Route-provider error type.

use serde::Deserialize;
use thiserror::Error;

/// Structured error payload returned by the directions API.
#[derive(Deserialize, Debug)]
pub struct ApiErrorDetail {
    pub code: u32,
    pub message: String,
}

#[derive(Deserialize, Debug)]
pub struct ApiErrorPayload {
    pub error: ApiErrorDetail,
}

/// Everything that can go wrong talking to the routing provider.
///
/// All variants route to the straight-line fallback in
/// [`materialize`](crate::materialize) — none is fatal to the run.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("API error (code {code}): {message}")]
    Api { code: u32, message: String },

    /// Non-success response whose body was not the expected JSON shape.
    #[error("unstructured API error: {0}")]
    RawApi(String),

    #[error("no route in provider response")]
    NoRoute,

    #[error("malformed polyline geometry: {0}")]
    BadGeometry(String),

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("failed to parse provider response: {0}")]
    Parse(#[from] serde_json::Error),
}
