//! Core error type.
//!
//! Sub-crates define their own error enums and either wrap `CoreError` as
//! a variant via `#[from]` or convert at the call site.  Both patterns are
//! acceptable; prefer whichever keeps error sites clean.

use thiserror::Error;

/// Errors produced by `resq-core` validation.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("coordinate ({lat}, {lon}) is non-finite or out of geographic range")]
    BadCoordinate { lat: f64, lon: f64 },
}

/// Shorthand result type for `resq-core`.
pub type CoreResult<T> = Result<T, CoreError>;
