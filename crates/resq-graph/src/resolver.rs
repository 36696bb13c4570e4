//! Nearest-facility resolution.
//!
//! Runs the path search from the actor to every facility independently and
//! keeps the cheapest.  A single-source pass (or, on a complete graph, a
//! direct comparison) would do fewer searches; the per-target form is kept
//! because it stays correct under any topology a future builder produces,
//! and facility counts are tens.

use resq_core::NodeId;

use crate::SearchError;
use crate::graph::DispatchGraph;
use crate::search::{PathSearch, SearchPath};

/// Terminal artifact of a resolution run.
#[derive(Debug, Clone)]
pub enum Resolution {
    /// The minimum-cost facility with its full path from the actor.
    /// Total distance is `path.total_km`.
    Nearest { facility: NodeId, path: SearchPath },

    /// Every facility was unreachable from the actor.  A defined result,
    /// not an error; no route is materialized for it.
    NoPathFound,
}

impl Resolution {
    pub fn is_resolved(&self) -> bool {
        matches!(self, Resolution::Nearest { .. })
    }
}

/// Find the facility with minimum shortest-path cost from the actor.
///
/// Facilities are searched in [`DispatchGraph::facilities`] order — the
/// order they were supplied to the builder — and only a strictly smaller
/// cost replaces the incumbent, so on a tie the first-supplied facility
/// wins.  Callers needing determinism across runs must supply facilities
/// in a reproducible order.
///
/// `Err` propagates fatal search failures only (unsound edge weights);
/// unreachable facilities are skipped and, if none is reachable at all,
/// the run resolves to [`Resolution::NoPathFound`].
pub fn resolve_nearest<S: PathSearch>(
    graph: &DispatchGraph,
    search: &S,
) -> Result<Resolution, SearchError> {
    let actor = graph.actor();
    let mut best: Option<(NodeId, SearchPath)> = None;

    for facility in graph.facilities() {
        let Some(path) = search.shortest_path(graph, actor, facility)? else {
            continue;
        };
        let closer = best
            .as_ref()
            .is_none_or(|(_, incumbent)| path.total_km < incumbent.total_km);
        if closer {
            best = Some((facility, path));
        }
    }

    Ok(match best {
        Some((facility, path)) => Resolution::Nearest { facility, path },
        None => Resolution::NoPathFound,
    })
}
