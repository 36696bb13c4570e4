//! `resq-core` — foundational types for the `resq` dispatch system.
//!
//! This crate is a dependency of every other `resq-*` crate.  It
//! intentionally has no `resq-*` dependencies and minimal external ones
//! (only `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module    | Contents                                  |
//! |-----------|-------------------------------------------|
//! | [`geo`]   | `Coordinate`, haversine distance          |
//! | [`ids`]   | `NodeId`                                  |
//! | [`error`] | `CoreError`, `CoreResult`                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod error;
pub mod geo;
pub mod ids;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use geo::Coordinate;
pub use ids::NodeId;
