//! Route materialization: provider attempt with straight-line fallback.

use resq_core::Coordinate;

use crate::provider::RouteProvider;

/// Where the displayed polyline came from — the sink styles the two
/// differently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteSource {
    /// Road-following geometry from the routing provider.
    Provider,
    /// Straight lines between the resolved path's node coordinates.
    StraightLine,
}

/// The polyline to display, tagged with its origin.
#[derive(Debug, Clone)]
pub struct RoutePlan {
    pub coords: Vec<Coordinate>,
    pub source: RouteSource,
}

/// Produce the display polyline for a resolved path.
///
/// `path_coords` is the resolved path's node coordinates in order, actor
/// first; `from`/`to` are its endpoints.  The provider is attempted once;
/// on any [`ProviderError`](crate::ProviderError) (or an empty geometry)
/// the straight-line polyline is used instead.  This function cannot fail:
/// the fallback is pure local computation.
pub fn materialize(
    provider: &dyn RouteProvider,
    from: Coordinate,
    to: Coordinate,
    path_coords: Vec<Coordinate>,
) -> RoutePlan {
    match provider.drive_route(from, to) {
        Ok(coords) if !coords.is_empty() => RoutePlan {
            coords,
            source: RouteSource::Provider,
        },
        Ok(_) => {
            log::warn!("routing provider returned empty geometry; using straight-line route");
            RoutePlan { coords: path_coords, source: RouteSource::StraightLine }
        }
        Err(e) => {
            log::warn!("routing provider failed ({e}); using straight-line route");
            RoutePlan { coords: path_coords, source: RouteSource::StraightLine }
        }
    }
}
