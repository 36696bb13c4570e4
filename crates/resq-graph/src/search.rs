//! Path-search trait and default informed best-first implementation.
//!
//! # Pluggability
//!
//! The resolver calls the search via the [`PathSearch`] trait, so callers
//! can swap in other algorithms (plain Dijkstra, bidirectional search)
//! without touching the resolution logic.  The default [`AStarSearch`] is
//! sufficient for dispatch-scale graphs.
//!
//! # Heuristic
//!
//! [`AStarSearch`] uses the great-circle distance from a node to the
//! target as its heuristic.  Edge weights are the same metric, so the
//! heuristic never overestimates the true remaining cost (admissible) and
//! obeys the triangle inequality along edges (consistent) — the search is
//! therefore guaranteed to return a true minimum-weight path.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use resq_core::NodeId;

use crate::SearchError;
use crate::graph::DispatchGraph;

// ── SearchPath ────────────────────────────────────────────────────────────────

/// The result of a successful search: the node sequence from source to
/// target (inclusive) and its total weight in kilometres.
#[derive(Debug, Clone)]
pub struct SearchPath {
    pub nodes: Vec<NodeId>,
    pub total_km: f64,
}

impl SearchPath {
    /// `true` if source and target are the same node.
    pub fn is_trivial(&self) -> bool {
        self.nodes.len() < 2
    }

    /// Look up each node's coordinate, in path order — the straight-line
    /// polyline implied by this path.
    pub fn coordinates(&self, graph: &DispatchGraph) -> Vec<resq_core::Coordinate> {
        self.nodes.iter().map(|&n| graph.position(n)).collect()
    }
}

// ── PathSearch trait ──────────────────────────────────────────────────────────

/// Pluggable shortest-path engine.
pub trait PathSearch {
    /// Compute a minimum-weight path from `from` to `to`.
    ///
    /// Returns `Ok(None)` when no path exists — an ordinary outcome, not
    /// an error.  `Err` is reserved for invariant violations (see
    /// [`SearchError`]); implementations must refuse to produce a result
    /// from an unsound graph rather than return a wrong one.
    fn shortest_path(
        &self,
        graph: &DispatchGraph,
        from: NodeId,
        to: NodeId,
    ) -> Result<Option<SearchPath>, SearchError>;
}

// ── AStarSearch ───────────────────────────────────────────────────────────────

/// Best-first search ordered by `g + h` with the geodesic heuristic.
///
/// On the complete graphs the builder produces, the winning path is always
/// the direct edge; the implementation stays general because topology is
/// an input, not part of this contract.
pub struct AStarSearch;

/// Heap entry.  `priority` is `g + h`; `cost` is `g` alone, needed for the
/// stale-entry check and the final path weight.
#[derive(Copy, Clone, PartialEq)]
struct Candidate {
    priority: f64,
    cost: f64,
    node: NodeId,
}

impl Eq for Candidate {}

// Min-heap by priority.  Weights are validated finite before use, so
// `partial_cmp` only falls back on exact priority ties, where the node id
// keeps pop order deterministic.
impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .priority
            .partial_cmp(&self.priority)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PathSearch for AStarSearch {
    fn shortest_path(
        &self,
        graph: &DispatchGraph,
        from: NodeId,
        to: NodeId,
    ) -> Result<Option<SearchPath>, SearchError> {
        if from == to {
            return Ok(Some(SearchPath { nodes: vec![from], total_km: 0.0 }));
        }

        let n = graph.node_count();
        let goal = graph.position(to);

        // best[v] = lowest known cost (km) to reach v.
        let mut best = vec![f64::INFINITY; n];
        // prev[v] = predecessor on the best path; INVALID for unreached nodes.
        let mut prev = vec![NodeId::INVALID; n];

        best[from.index()] = 0.0;

        let mut heap = BinaryHeap::new();
        heap.push(Candidate {
            priority: graph.position(from).distance_km(goal),
            cost: 0.0,
            node: from,
        });

        while let Some(Candidate { cost, node, .. }) = heap.pop() {
            if node == to {
                return Ok(Some(reconstruct(&prev, from, to, cost)));
            }

            // Skip stale heap entries.
            if cost > best[node.index()] {
                continue;
            }

            for (next, weight) in graph.neighbors(node) {
                if !weight.is_finite() || weight < 0.0 {
                    return Err(SearchError::CorruptWeight { from: node, to: next, weight });
                }

                let g = cost + weight;
                if g < best[next.index()] {
                    best[next.index()] = g;
                    prev[next.index()] = node;
                    heap.push(Candidate {
                        priority: g + graph.position(next).distance_km(goal),
                        cost: g,
                        node: next,
                    });
                }
            }
        }

        Ok(None)
    }
}

fn reconstruct(prev: &[NodeId], from: NodeId, to: NodeId, total_km: f64) -> SearchPath {
    let mut nodes = vec![to];
    let mut cur = to;
    while cur != from {
        cur = prev[cur.index()];
        nodes.push(cur);
    }
    nodes.reverse();
    SearchPath { nodes, total_km }
}
