//! Geographic coordinate type and great-circle distance.
//!
//! `Coordinate` uses `f64` latitude/longitude.  The resolver compares
//! path costs at kilometre scale against sub-metre tolerances, so the
//! extra precision over `f32` matters more than the memory — node counts
//! here are tens, not millions.

use crate::{CoreError, CoreResult};

/// A WGS-84 geographic coordinate in decimal degrees.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    #[inline]
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Haversine great-circle distance in kilometres.
    ///
    /// Symmetric, non-negative, zero iff the two coordinates coincide
    /// (within floating-point tolerance), and satisfies the triangle
    /// inequality — the properties the dispatch graph relies on for both
    /// edge weights and the search heuristic.
    pub fn distance_km(self, other: Coordinate) -> f64 {
        const R_KM: f64 = 6_371.008_8; // mean Earth radius

        let d_lat = (other.lat - self.lat).to_radians();
        let d_lon = (other.lon - self.lon).to_radians();

        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();

        let a = (d_lat * 0.5).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lon * 0.5).sin().powi(2);

        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        R_KM * c
    }

    /// Reject non-finite or out-of-range components.
    ///
    /// Called once per coordinate before graph construction; the graph and
    /// resolver assume every stored coordinate has passed this check.
    pub fn validate(self) -> CoreResult<()> {
        let in_range = self.lat.is_finite()
            && self.lon.is_finite()
            && self.lat.abs() <= 90.0
            && self.lon.abs() <= 180.0;
        if in_range {
            Ok(())
        } else {
            Err(CoreError::BadCoordinate { lat: self.lat, lon: self.lon })
        }
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lon)
    }
}
