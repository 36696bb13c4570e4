//! `resq-route` — drivable-route retrieval with a local fallback.
//!
//! The resolved path gives a straight-line polyline; this crate tries to
//! upgrade it to a road-following one from a routing provider, and falls
//! back to the straight line on any provider failure.  Provider errors
//! never propagate out of [`materialize`].
//!
//! # Crate layout
//!
//! | Module          | Contents                                            |
//! |-----------------|-----------------------------------------------------|
//! | [`provider`]    | `RouteProvider` trait, `OrsProvider`, `ProviderConfig` |
//! | [`polyline`]    | encoded-polyline decoding                           |
//! | [`materialize`] | `materialize`, `RoutePlan`, `RouteSource`           |
//! | [`error`]       | `ProviderError`                                     |

pub mod error;
pub mod materialize;
pub mod polyline;
pub mod provider;


pub use error::ProviderError;
pub use materialize::{RoutePlan, RouteSource, materialize};
pub use provider::{OrsProvider, ProviderConfig, RouteProvider};
