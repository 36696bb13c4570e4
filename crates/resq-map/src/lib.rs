//! `resq-map` — the presentation sink.
//!
//! Consumes markers and one styled polyline, produces a self-contained
//! Leaflet HTML document.  The document is the pipeline's only artifact;
//! nothing here feeds back into resolution.
//!
//! # Crate layout
//!
//! | Module       | Contents                                             |
//! |--------------|------------------------------------------------------|
//! | [`document`] | `MapDocument`, `MarkerStyle`, `RouteStyle`           |
//! | [`error`]    | `MapError`, `MapResult<T>`                           |

pub mod document;
pub mod error;


pub use document::{MapDocument, MarkerStyle, RouteStyle};
pub use error::{MapError, MapResult};
