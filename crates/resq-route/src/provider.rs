//! Routing-provider trait and OpenRouteService-compatible implementation.

use std::time::Duration;

use reqwest::blocking::Client;
use serde::Deserialize;
use serde_json::json;

use resq_core::Coordinate;

use crate::ProviderError;
use crate::error::ApiErrorPayload;
use crate::polyline;

const ORS_BASE_URL: &str = "https://api.openrouteservice.org";

// ── Configuration ─────────────────────────────────────────────────────────────

/// Explicit provider configuration — nothing is read from process globals.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    /// API credential, supplied out of band.
    pub api_key: String,
    /// Snap radius per waypoint, in metres.
    pub search_radius_m: f64,
    /// Overall request timeout.
    pub request_timeout_ms: u64,
}

impl ProviderConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            search_radius_m: 5_000.0,
            request_timeout_ms: 15_000,
        }
    }
}

// ── RouteProvider trait ───────────────────────────────────────────────────────

/// A turn-by-turn routing backend.
///
/// Best-effort by contract: implementations may fail for any reason
/// (timeout, API error, no road near a waypoint) and callers must be
/// prepared to fall back locally.
pub trait RouteProvider {
    /// A drivable route from `from` to `to` as an ordered coordinate
    /// sequence.
    fn drive_route(&self, from: Coordinate, to: Coordinate)
    -> Result<Vec<Coordinate>, ProviderError>;
}

// ── OrsProvider ───────────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub(crate) struct DirectionsResponse {
    pub(crate) routes: Vec<DirectionsRoute>,
}

#[derive(Deserialize)]
pub(crate) struct DirectionsRoute {
    pub(crate) geometry: String,
}

/// Driving directions from an OpenRouteService-compatible endpoint.
pub struct OrsProvider {
    client: Client,
    config: ProviderConfig,
    base_url: String,
}

impl OrsProvider {
    pub fn new(config: ProviderConfig) -> Result<Self, ProviderError> {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.request_timeout_ms))
            .build()?;
        Ok(Self {
            client,
            config,
            base_url: ORS_BASE_URL.to_string(),
        })
    }

    /// Point at a self-hosted instance instead of the public API.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

impl RouteProvider for OrsProvider {
    fn drive_route(
        &self,
        from: Coordinate,
        to: Coordinate,
    ) -> Result<Vec<Coordinate>, ProviderError> {
        let url = format!("{}/v2/directions/driving-car", self.base_url);
        // The API takes (lon, lat) order.
        let body = json!({
            "coordinates": [[from.lon, from.lat], [to.lon, to.lat]],
            "radiuses": [self.config.search_radius_m, self.config.search_radius_m],
        });
        log::debug!("[PROVIDER] POST {url} for {from} -> {to}");

        let response = self
            .client
            .post(&url)
            .header("Authorization", &self.config.api_key)
            .json(&body)
            .send()?;

        let status = response.status();
        let text = response.text()?;

        if !status.is_success() {
            // Prefer the structured error payload; fall back to the raw body.
            return Err(match serde_json::from_str::<ApiErrorPayload>(&text) {
                Ok(payload) => ProviderError::Api {
                    code: payload.error.code,
                    message: payload.error.message,
                },
                Err(_) => ProviderError::RawApi(text),
            });
        }

        let parsed: DirectionsResponse = serde_json::from_str(&text)?;
        let route = parsed.routes.first().ok_or(ProviderError::NoRoute)?;
        polyline::decode(&route.geometry)
    }
}
