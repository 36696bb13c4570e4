//! `resq-graph` — dispatch graph construction and nearest-facility resolution.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                |
//! |--------------|---------------------------------------------------------|
//! | [`graph`]    | `DispatchGraph`, `GraphBuilder`, `ACTOR_LABEL`          |
//! | [`search`]   | `PathSearch` trait, `SearchPath`, `AStarSearch`         |
//! | [`resolver`] | `resolve_nearest`, `Resolution`                         |
//! | [`error`]    | `GraphError`, `GraphResult<T>`, `SearchError`           |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                             |
//! |---------|----------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types. |

pub mod error;
pub mod graph;
pub mod resolver;
pub mod search;

#[cfg(test)]
mod tests;

pub use error::{GraphError, GraphResult, SearchError};
pub use graph::{ACTOR_LABEL, DispatchGraph, GraphBuilder};
pub use resolver::{Resolution, resolve_nearest};
pub use search::{AStarSearch, PathSearch, SearchPath};
