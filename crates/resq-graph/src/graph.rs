//! Dispatch graph representation and builder.
//!
//! # Data layout
//!
//! The graph holds one node per facility plus exactly one actor node, each
//! a label paired with the coordinate copied in at build time.  Facilities
//! occupy `NodeId 0 .. facility_count` in insertion order; the actor is
//! always the last node.  Adjacency is a per-node `Vec<(NodeId, f64)>`
//! with the weight in kilometres — for the node counts involved (tens) a
//! flat list beats anything cleverer.
//!
//! # Completeness
//!
//! [`GraphBuilder::build`] derives the full edge set itself: every pair of
//! distinct nodes gets exactly one undirected edge weighted by the
//! great-circle distance between its endpoints.  Consumers must not assume
//! completeness — the search in [`crate::search`] walks adjacency like any
//! other graph algorithm, so a future builder that drops edges still
//! resolves correctly.

use std::collections::HashSet;

use resq_core::{Coordinate, NodeId};

use crate::{GraphError, GraphResult};

/// Reserved label for the actor node.  A facility may not use it.
pub const ACTOR_LABEL: &str = "Driver";

// ── DispatchGraph ─────────────────────────────────────────────────────────────

/// Immutable weighted graph over facility nodes plus one actor node.
///
/// Built fresh per resolution run via [`GraphBuilder`], never mutated
/// afterwards, discarded when the run completes.
pub struct DispatchGraph {
    /// Node labels.  Indexed by `NodeId`; the actor is last.
    pub(crate) labels: Vec<String>,

    /// Node coordinates, copied from the source records at build time.
    pub(crate) positions: Vec<Coordinate>,

    /// Undirected adjacency: `adjacency[n]` lists `(neighbor, weight_km)`
    /// for every edge incident to `n`, mirrored on both endpoints.
    pub(crate) adjacency: Vec<Vec<(NodeId, f64)>>,

    /// The actor node (always `NodeId(facility_count)`).
    pub(crate) actor: NodeId,
}

impl DispatchGraph {
    // ── Graph dimensions ──────────────────────────────────────────────────

    pub fn node_count(&self) -> usize {
        self.labels.len()
    }

    pub fn facility_count(&self) -> usize {
        self.labels.len() - 1
    }

    // ── Node access ───────────────────────────────────────────────────────

    pub fn actor(&self) -> NodeId {
        self.actor
    }

    /// Facility `NodeId`s in the order the facilities were supplied to the
    /// builder.  This order is the resolver's tie-break order.
    pub fn facilities(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.facility_count()).map(|i| NodeId(i as u32))
    }

    pub fn label(&self, node: NodeId) -> &str {
        &self.labels[node.index()]
    }

    pub fn position(&self, node: NodeId) -> Coordinate {
        self.positions[node.index()]
    }

    // ── Edge access ───────────────────────────────────────────────────────

    /// Iterator over `(neighbor, weight_km)` for all edges incident to `node`.
    #[inline]
    pub fn neighbors(&self, node: NodeId) -> impl Iterator<Item = (NodeId, f64)> + '_ {
        self.adjacency[node.index()].iter().copied()
    }

    /// Weight of the edge between `u` and `v`, if one exists.
    pub fn weight(&self, u: NodeId, v: NodeId) -> Option<f64> {
        self.adjacency[u.index()]
            .iter()
            .find(|(n, _)| *n == v)
            .map(|(_, w)| *w)
    }

    /// Number of undirected edges (each counted once).
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum::<usize>() / 2
    }
}

// ── GraphBuilder ──────────────────────────────────────────────────────────────

/// Collects facility records and the actor position, then derives the
/// complete weighted graph in [`build`](Self::build).
///
/// # Example
///
/// ```
/// use resq_core::Coordinate;
/// use resq_graph::GraphBuilder;
///
/// let mut b = GraphBuilder::new();
/// b.add_facility("City General", Coordinate::new(26.46, 80.33));
/// b.add_facility("St. Mary's", Coordinate::new(26.50, 80.28));
/// b.actor(Coordinate::new(26.47, 80.35));
/// let graph = b.build().unwrap();
/// assert_eq!(graph.node_count(), 3);
/// assert_eq!(graph.edge_count(), 3); // complete
/// ```
pub struct GraphBuilder {
    facilities: Vec<(String, Coordinate)>,
    actor: Option<Coordinate>,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self { facilities: Vec::new(), actor: None }
    }

    /// Add a facility record.  Supply facilities in the order they should
    /// rank on equal path cost.
    pub fn add_facility(&mut self, name: impl Into<String>, pos: Coordinate) -> &mut Self {
        self.facilities.push((name.into(), pos));
        self
    }

    /// Set the actor's current position (exactly one per run).
    pub fn actor(&mut self, pos: Coordinate) -> &mut Self {
        self.actor = Some(pos);
        self
    }

    /// Validate the inputs and derive the complete graph.
    ///
    /// Fails if no facilities were supplied, the actor position is missing,
    /// any coordinate is malformed, or a label repeats (the reserved actor
    /// label counts as taken).
    pub fn build(self) -> GraphResult<DispatchGraph> {
        if self.facilities.is_empty() {
            return Err(GraphError::NoFacilities);
        }
        let actor_pos = self.actor.ok_or(GraphError::MissingActor)?;
        actor_pos.validate()?;

        {
            let mut seen: HashSet<&str> = HashSet::with_capacity(self.facilities.len() + 1);
            seen.insert(ACTOR_LABEL);
            for (name, pos) in &self.facilities {
                pos.validate()?;
                if !seen.insert(name.as_str()) {
                    return Err(GraphError::DuplicateLabel(name.clone()));
                }
            }
        }

        // Node table: facilities in insertion order, actor last.
        let mut labels: Vec<String> = Vec::with_capacity(self.facilities.len() + 1);
        let mut positions: Vec<Coordinate> = Vec::with_capacity(self.facilities.len() + 1);
        for (name, pos) in self.facilities {
            labels.push(name);
            positions.push(pos);
        }
        let actor = NodeId(labels.len() as u32);
        labels.push(ACTOR_LABEL.to_string());
        positions.push(actor_pos);

        // Complete undirected edge set, one weight per unordered pair,
        // mirrored into both adjacency lists.
        let n = labels.len();
        let mut adjacency: Vec<Vec<(NodeId, f64)>> = vec![Vec::with_capacity(n - 1); n];
        for i in 0..n {
            for j in (i + 1)..n {
                let w = positions[i].distance_km(positions[j]);
                adjacency[i].push((NodeId(j as u32), w));
                adjacency[j].push((NodeId(i as u32), w));
            }
        }

        Ok(DispatchGraph { labels, positions, adjacency, actor })
    }
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}
