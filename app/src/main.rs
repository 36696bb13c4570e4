//! resq — locate the nearest facility to a driver and draw the route.
//!
//! One synchronous pipeline per invocation:
//! store read → graph build → nearest-facility resolution → route
//! materialization → map artifact, plus an assignment write back into the
//! store.  Precondition failures abort with a message and no artifact;
//! provider failures degrade to the straight-line route.
//!
//! Usage: `resq <driver-id> [output.html]`.  The routing-provider
//! credential is read from `ORS_API_KEY`; without it the provider step is
//! skipped and the straight-line route is drawn.

use std::time::Duration;

use anyhow::{Context, Result, bail};
use env_logger::{Builder, Env};

use resq_graph::{AStarSearch, GraphBuilder, Resolution, resolve_nearest};
use resq_map::{MapDocument, MarkerStyle, RouteStyle};
use resq_route::{OrsProvider, ProviderConfig, RoutePlan, RouteSource, materialize};
use resq_store::{LinkStatus, PositionStore, RtdbStore};

// ── Constants ─────────────────────────────────────────────────────────────────

const STORE_BASE_URL: &str = "https://resq-dispatch-default-rtdb.firebaseio.com";
const FACILITIES_PATH: &str = "Hospital/elements";
const STORE_TIMEOUT_MS: u64 = 10_000;
const ORS_API_KEY_ENV: &str = "ORS_API_KEY";
const DEFAULT_OUTPUT: &str = "dispatch_map.html";
const MAP_ZOOM: u8 = 15;

fn init_logging() {
    Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp_secs()
        .format_module_path(false)
        .init();
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    init_logging();

    let mut args = std::env::args().skip(1);
    let Some(driver_id) = args.next() else {
        bail!("usage: resq <driver-id> [output.html]");
    };
    let output = args.next().unwrap_or_else(|| DEFAULT_OUTPUT.to_string());

    // 1. Store client — all identifiers explicit, nothing process-global.
    let store = RtdbStore::new(
        STORE_BASE_URL,
        FACILITIES_PATH,
        format!("drivers/{driver_id}"),
        format!("status/{driver_id}"),
        Duration::from_millis(STORE_TIMEOUT_MS),
    )?;

    // 2. Link-status gate, before any graph work.
    match store.link_status().context("reading driver link status")? {
        LinkStatus::Connected => {}
        LinkStatus::NotConnected(flag) => {
            bail!("driver {driver_id} is not connected to a facility (status flag {flag:?})");
        }
    }

    // 3. Snapshot facilities and the driver position.
    let facilities = store.facilities().context("fetching facility records")?;
    let driver_pos = store
        .actor_position()
        .context("fetching driver position")?;
    println!("Driver position: {driver_pos}");
    println!("Facilities: {}", facilities.len());

    // 4. Build the dispatch graph for this run.
    let mut builder = GraphBuilder::new();
    for record in &facilities {
        builder.add_facility(&record.name, record.position());
    }
    builder.actor(driver_pos);
    let graph = builder.build().context("building dispatch graph")?;

    // 5. Resolve the nearest facility.
    let resolution = resolve_nearest(&graph, &AStarSearch).context("resolving nearest facility")?;
    let Resolution::Nearest { facility, path } = resolution else {
        println!("No path found to any facility.");
        return Ok(());
    };
    let facility_pos = graph.position(facility);
    println!(
        "Nearest facility: {}, distance: {:.2} km",
        graph.label(facility),
        path.total_km
    );
    let hops: Vec<&str> = path.nodes.iter().map(|&n| graph.label(n)).collect();
    println!("Path: {}", hops.join(" -> "));

    // 6. Write the assignment back — best-effort, never fatal.
    if let Err(e) = store.write_assignment(facility_pos) {
        log::warn!("failed to write assignment back to store: {e}");
    }

    // 7. Materialize the display route, provider first.
    let path_coords = path.coordinates(&graph);
    let plan = match std::env::var(ORS_API_KEY_ENV) {
        Ok(api_key) => {
            let provider = OrsProvider::new(ProviderConfig::new(api_key))?;
            materialize(&provider, driver_pos, facility_pos, path_coords)
        }
        Err(_) => {
            log::warn!("{ORS_API_KEY_ENV} not set; drawing the straight-line route");
            RoutePlan { coords: path_coords, source: RouteSource::StraightLine }
        }
    };

    // 8. Render the artifact.
    let mut doc = MapDocument::new(driver_pos, MAP_ZOOM);
    for record in &facilities {
        doc.add_marker(record.position(), &record.name, MarkerStyle::facility());
    }
    doc.add_marker(driver_pos, "Driver", MarkerStyle::actor());
    let style = match plan.source {
        RouteSource::Provider => RouteStyle::provider(),
        RouteSource::StraightLine => RouteStyle::straight_line(),
    };
    doc.set_route(&plan.coords, style);
    doc.save(output.as_ref()).context("saving map artifact")?;

    println!("Map saved as {output}. Open it in your browser.");
    Ok(())
}
