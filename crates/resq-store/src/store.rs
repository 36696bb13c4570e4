//! The `PositionStore` trait implemented by all store backends.

use resq_core::Coordinate;

use crate::StoreResult;

// ── Records ───────────────────────────────────────────────────────────────────

/// One facility as the store serves it.
#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
pub struct FacilityRecord {
    pub name: String,
    pub lat: f64,
    pub lon: f64,
}

impl FacilityRecord {
    pub fn position(&self) -> Coordinate {
        Coordinate::new(self.lat, self.lon)
    }
}

/// Whether the actor is currently attached to a facility context.
///
/// Anything but an affirmative flag aborts the run before graph work; the
/// raw flag value is carried for the abort message.
#[derive(Debug, Clone, PartialEq)]
pub enum LinkStatus {
    Connected,
    NotConnected(String),
}

impl LinkStatus {
    pub fn is_connected(&self) -> bool {
        matches!(self, LinkStatus::Connected)
    }
}

// ── PositionStore trait ───────────────────────────────────────────────────────

/// Backend-agnostic access to the position store.
///
/// Reads have no retry semantics — a failed read aborts the run.  The
/// assignment write is best-effort: the pipeline reports a failure but
/// does not treat it as fatal.
pub trait PositionStore {
    /// All facility records in the store's order.  That order becomes the
    /// resolver's tie-break order, so backends must not reorder.
    fn facilities(&self) -> StoreResult<Vec<FacilityRecord>>;

    /// The actor's current position.  Missing latitude or longitude is an
    /// error, not a default.
    fn actor_position(&self) -> StoreResult<Coordinate>;

    /// The actor's facility-link flag.
    fn link_status(&self) -> StoreResult<LinkStatus>;

    /// Write the resolved facility's coordinate under the actor's status
    /// record.
    fn write_assignment(&self, facility: Coordinate) -> StoreResult<()>;
}
