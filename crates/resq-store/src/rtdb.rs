//! Firebase-RTDB-style REST backend.
//!
//! Every key is readable as JSON at `GET {base}/{path}.json`; the
//! assignment write is a `PATCH` against the actor's status record.  All
//! identifiers are explicit constructor parameters — nothing is baked into
//! the component.

use std::time::Duration;

use reqwest::blocking::Client;
use serde::Deserialize;
use serde_json::{Value, json};

use resq_core::Coordinate;

use crate::store::{FacilityRecord, LinkStatus, PositionStore};
use crate::{StoreError, StoreResult};

/// Affirmative link-status flag; anything else aborts the run.
const CONNECTED_FLAG: &str = "Yes";

#[derive(Deserialize)]
struct ActorRecord {
    latitude: Option<f64>,
    longitude: Option<f64>,
}

#[derive(Deserialize)]
struct StatusRecord {
    #[serde(rename = "connectedHospital")]
    connected: Option<String>,
}

/// Position store served over a key-value REST endpoint.
pub struct RtdbStore {
    client: Client,
    base_url: String,
    facilities_path: String,
    actor_path: String,
    status_path: String,
}

impl RtdbStore {
    /// Build a store client.
    ///
    /// - `base_url`: database root, e.g. `https://example.firebaseio.com`.
    /// - `facilities_path`: key holding the facility array.
    /// - `actor_path`: key holding the actor's `{latitude, longitude}`.
    /// - `status_path`: key holding the link-status record; also the
    ///   target of the assignment write.
    pub fn new(
        base_url: impl Into<String>,
        facilities_path: impl Into<String>,
        actor_path: impl Into<String>,
        status_path: impl Into<String>,
        timeout: Duration,
    ) -> StoreResult<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
            facilities_path: facilities_path.into(),
            actor_path: actor_path.into(),
            status_path: status_path.into(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}.json", self.base_url.trim_end_matches('/'), path)
    }

    /// Fetch a key as JSON.  RTDB serves `null` for absent keys; that is
    /// reported as [`StoreError::NoData`] rather than parsed further.
    fn get_json(&self, path: &str) -> StoreResult<Value> {
        let url = self.url(path);
        log::debug!("[STORE] GET {url}");
        let value: Value = self
            .client
            .get(&url)
            .send()?
            .error_for_status()?
            .json()?;
        if value.is_null() {
            return Err(StoreError::NoData(path.to_string()));
        }
        Ok(value)
    }
}

impl PositionStore for RtdbStore {
    fn facilities(&self) -> StoreResult<Vec<FacilityRecord>> {
        let value = self.get_json(&self.facilities_path)?;
        let records: Vec<FacilityRecord> = serde_json::from_value(value)?;
        if records.is_empty() {
            return Err(StoreError::NoData(self.facilities_path.clone()));
        }
        Ok(records)
    }

    fn actor_position(&self) -> StoreResult<Coordinate> {
        let value = self.get_json(&self.actor_path)?;
        let record: ActorRecord = serde_json::from_value(value)?;
        let lat = record.latitude.ok_or_else(|| StoreError::MissingField {
            path: self.actor_path.clone(),
            field: "latitude",
        })?;
        let lon = record.longitude.ok_or_else(|| StoreError::MissingField {
            path: self.actor_path.clone(),
            field: "longitude",
        })?;
        Ok(Coordinate::new(lat, lon))
    }

    fn link_status(&self) -> StoreResult<LinkStatus> {
        let value = self.get_json(&self.status_path)?;
        let record: StatusRecord = serde_json::from_value(value)?;
        Ok(match record.connected {
            Some(flag) if flag == CONNECTED_FLAG => LinkStatus::Connected,
            Some(flag) => LinkStatus::NotConnected(flag),
            None => LinkStatus::NotConnected("<absent>".to_string()),
        })
    }

    fn write_assignment(&self, facility: Coordinate) -> StoreResult<()> {
        let url = self.url(&self.status_path);
        log::debug!("[STORE] PATCH {url}");
        let body = json!({
            "facility_lat": facility.lat,
            "facility_lon": facility.lon,
        });
        self.client
            .patch(&url)
            .json(&body)
            .send()?
            .error_for_status()?;
        Ok(())
    }
}
