//! In-memory position store for tests and offline runs.

use std::sync::Mutex;

use resq_core::Coordinate;

use crate::store::{FacilityRecord, LinkStatus, PositionStore};
use crate::{StoreError, StoreResult};

/// A fully local [`PositionStore`].
///
/// Facilities are served in the order given, matching the backend
/// contract.  The assignment write is captured so tests can assert on it
/// via [`take_assignment`](Self::take_assignment).
pub struct MemoryStore {
    facilities: Vec<FacilityRecord>,
    actor: Option<Coordinate>,
    status: LinkStatus,
    assignment: Mutex<Option<Coordinate>>,
}

impl MemoryStore {
    pub fn new(
        facilities: Vec<FacilityRecord>,
        actor: Option<Coordinate>,
        status: LinkStatus,
    ) -> Self {
        Self {
            facilities,
            actor,
            status,
            assignment: Mutex::new(None),
        }
    }

    /// The last written assignment, if any.
    pub fn take_assignment(&self) -> Option<Coordinate> {
        self.assignment
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .take()
    }
}

impl PositionStore for MemoryStore {
    fn facilities(&self) -> StoreResult<Vec<FacilityRecord>> {
        if self.facilities.is_empty() {
            return Err(StoreError::NoData("facilities".to_string()));
        }
        Ok(self.facilities.clone())
    }

    fn actor_position(&self) -> StoreResult<Coordinate> {
        self.actor.ok_or(StoreError::MissingField {
            path: "actor".to_string(),
            field: "latitude",
        })
    }

    fn link_status(&self) -> StoreResult<LinkStatus> {
        Ok(self.status.clone())
    }

    fn write_assignment(&self, facility: Coordinate) -> StoreResult<()> {
        *self.assignment.lock().unwrap_or_else(|e| e.into_inner()) = Some(facility);
        Ok(())
    }
}
