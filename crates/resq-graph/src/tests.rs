//! Unit tests for resq-graph.
//!
//! All fixtures are hand-crafted coordinate sets; no I/O anywhere.

#[cfg(test)]
mod helpers {
    use resq_core::Coordinate;

    use crate::{DispatchGraph, GraphBuilder};

    /// Three facilities around an actor, all pairwise-distinct distances.
    ///
    /// Facility order: General (nearest), Riverside, Hilltop (farthest).
    pub fn city_graph() -> DispatchGraph {
        let mut b = GraphBuilder::new();
        b.add_facility("General", Coordinate::new(26.47, 80.34));
        b.add_facility("Riverside", Coordinate::new(26.52, 80.30));
        b.add_facility("Hilltop", Coordinate::new(26.60, 80.20));
        b.actor(Coordinate::new(26.46, 80.35));
        b.build().unwrap()
    }
}

// ── Builder & graph structure ─────────────────────────────────────────────────

#[cfg(test)]
mod builder {
    use resq_core::Coordinate;

    use crate::{ACTOR_LABEL, GraphBuilder, GraphError};

    #[test]
    fn complete_and_undirected() {
        let g = super::helpers::city_graph();
        let n = g.node_count();
        assert_eq!(n, 4);
        // Exactly one edge per unordered pair.
        assert_eq!(g.edge_count(), n * (n - 1) / 2);
        for u in 0..n {
            for v in 0..n {
                let u = resq_core::NodeId(u as u32);
                let v = resq_core::NodeId(v as u32);
                if u == v {
                    assert!(g.weight(u, v).is_none(), "self-edge at {u}");
                } else {
                    let uv = g.weight(u, v).unwrap();
                    let vu = g.weight(v, u).unwrap();
                    assert_eq!(uv, vu, "asymmetric weight {u} {v}");
                    assert!(uv >= 0.0);
                }
            }
        }
    }

    #[test]
    fn weights_equal_geodesic_distance() {
        let g = super::helpers::city_graph();
        for u in g.facilities() {
            let w = g.weight(g.actor(), u).unwrap();
            let d = g.position(g.actor()).distance_km(g.position(u));
            assert!((w - d).abs() < 1e-12);
        }
    }

    #[test]
    fn facility_order_is_insertion_order() {
        let g = super::helpers::city_graph();
        let labels: Vec<&str> = g.facilities().map(|f| g.label(f)).collect();
        assert_eq!(labels, ["General", "Riverside", "Hilltop"]);
        assert_eq!(g.label(g.actor()), ACTOR_LABEL);
    }

    #[test]
    fn empty_facility_set_rejected() {
        let mut b = GraphBuilder::new();
        b.actor(Coordinate::new(0.0, 0.0));
        assert!(matches!(b.build(), Err(GraphError::NoFacilities)));
    }

    #[test]
    fn missing_actor_rejected() {
        let mut b = GraphBuilder::new();
        b.add_facility("General", Coordinate::new(0.0, 0.0));
        assert!(matches!(b.build(), Err(GraphError::MissingActor)));
    }

    #[test]
    fn malformed_coordinate_rejected() {
        let mut b = GraphBuilder::new();
        b.add_facility("General", Coordinate::new(f64::NAN, 0.0));
        b.actor(Coordinate::new(0.0, 0.0));
        assert!(matches!(b.build(), Err(GraphError::Coordinate(_))));

        let mut b = GraphBuilder::new();
        b.add_facility("General", Coordinate::new(0.0, 0.0));
        b.actor(Coordinate::new(95.0, 0.0));
        assert!(matches!(b.build(), Err(GraphError::Coordinate(_))));
    }

    #[test]
    fn duplicate_labels_rejected() {
        let mut b = GraphBuilder::new();
        b.add_facility("General", Coordinate::new(0.0, 0.0));
        b.add_facility("General", Coordinate::new(0.0, 1.0));
        b.actor(Coordinate::new(0.0, 0.5));
        assert!(matches!(b.build(), Err(GraphError::DuplicateLabel(_))));

        // The actor label is reserved.
        let mut b = GraphBuilder::new();
        b.add_facility(crate::ACTOR_LABEL, Coordinate::new(0.0, 0.0));
        b.actor(Coordinate::new(0.0, 0.5));
        assert!(matches!(b.build(), Err(GraphError::DuplicateLabel(_))));
    }
}

// ── A* search ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod search {
    use resq_core::NodeId;

    use crate::{AStarSearch, PathSearch, SearchError};

    #[test]
    fn trivial_same_node() {
        let g = super::helpers::city_graph();
        let p = AStarSearch
            .shortest_path(&g, g.actor(), g.actor())
            .unwrap()
            .unwrap();
        assert!(p.is_trivial());
        assert_eq!(p.total_km, 0.0);
    }

    #[test]
    fn complete_graph_path_is_direct_edge() {
        let g = super::helpers::city_graph();
        for f in g.facilities() {
            let p = AStarSearch.shortest_path(&g, g.actor(), f).unwrap().unwrap();
            assert_eq!(p.nodes, vec![g.actor(), f], "detour to {}", g.label(f));
            let direct = g.weight(g.actor(), f).unwrap();
            assert!((p.total_km - direct).abs() < 1e-12);
        }
    }

    #[test]
    fn finds_detour_when_direct_edge_missing() {
        // Remove the direct actor→Hilltop edge; the search must route
        // through an intermediate node instead of giving up.
        let mut g = super::helpers::city_graph();
        let (actor, target) = (g.actor(), NodeId(2));
        g.adjacency[actor.index()].retain(|(n, _)| *n != target);
        g.adjacency[target.index()].retain(|(n, _)| *n != actor);

        let p = AStarSearch.shortest_path(&g, actor, target).unwrap().unwrap();
        assert!(p.nodes.len() > 2);
        assert_eq!(p.nodes.first(), Some(&actor));
        assert_eq!(p.nodes.last(), Some(&target));
        // Cost equals the cheapest two-hop detour.
        let best_detour = g
            .facilities()
            .filter(|f| *f != target)
            .map(|mid| g.weight(actor, mid).unwrap() + g.weight(mid, target).unwrap())
            .fold(f64::INFINITY, f64::min);
        assert!((p.total_km - best_detour).abs() < 1e-9);
    }

    #[test]
    fn path_coordinates_follow_node_order() {
        let g = super::helpers::city_graph();
        let p = AStarSearch
            .shortest_path(&g, g.actor(), NodeId(0))
            .unwrap()
            .unwrap();
        let coords = p.coordinates(&g);
        assert_eq!(coords.len(), p.nodes.len());
        assert_eq!(coords[0], g.position(g.actor()));
        assert_eq!(*coords.last().unwrap(), g.position(NodeId(0)));
    }

    #[test]
    fn unreachable_is_none_not_error() {
        let mut g = super::helpers::city_graph();
        // Isolate the actor completely.
        let actor = g.actor();
        g.adjacency[actor.index()].clear();
        for adj in &mut g.adjacency {
            adj.retain(|(n, _)| *n != actor);
        }
        for f in g.facilities() {
            assert!(AStarSearch.shortest_path(&g, actor, f).unwrap().is_none());
        }
    }

    #[test]
    fn corrupt_weight_is_fatal() {
        let mut g = super::helpers::city_graph();
        let actor = g.actor();
        g.adjacency[actor.index()][0].1 = -1.0;
        let r = AStarSearch.shortest_path(&g, actor, NodeId(0));
        assert!(matches!(r, Err(SearchError::CorruptWeight { .. })));

        let mut g = super::helpers::city_graph();
        g.adjacency[actor.index()][0].1 = f64::NAN;
        let r = AStarSearch.shortest_path(&g, actor, NodeId(0));
        assert!(matches!(r, Err(SearchError::CorruptWeight { .. })));
    }
}

// ── Nearest-facility resolution ───────────────────────────────────────────────

#[cfg(test)]
mod resolver {
    use resq_core::{Coordinate, NodeId};

    use crate::graph::DispatchGraph;
    use crate::{AStarSearch, GraphBuilder, PathSearch, Resolution, SearchPath, resolve_nearest};

    /// Seam stub: a search that never finds a path.
    struct NoRoutes;

    impl PathSearch for NoRoutes {
        fn shortest_path(
            &self,
            _graph: &DispatchGraph,
            _from: NodeId,
            _to: NodeId,
        ) -> Result<Option<SearchPath>, crate::SearchError> {
            Ok(None)
        }
    }

    #[test]
    fn matches_brute_force_minimum() {
        let g = super::helpers::city_graph();
        let r = resolve_nearest(&g, &AStarSearch).unwrap();
        let Resolution::Nearest { facility, path } = r else {
            panic!("expected a resolved facility");
        };

        let (expect, expect_km) = g
            .facilities()
            .map(|f| (f, g.position(g.actor()).distance_km(g.position(f))))
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .unwrap();
        assert_eq!(facility, expect);
        assert!((path.total_km - expect_km).abs() < 1e-9);
        // On a complete graph the winning path is the direct hop.
        assert_eq!(path.nodes, vec![g.actor(), facility]);
    }

    #[test]
    fn deterministic_across_runs() {
        let g = super::helpers::city_graph();
        let a = resolve_nearest(&g, &AStarSearch).unwrap();
        let b = resolve_nearest(&g, &AStarSearch).unwrap();
        match (a, b) {
            (
                Resolution::Nearest { facility: fa, path: pa },
                Resolution::Nearest { facility: fb, path: pb },
            ) => {
                assert_eq!(fa, fb);
                assert_eq!(pa.nodes, pb.nodes);
                assert_eq!(pa.total_km, pb.total_km);
            }
            _ => panic!("expected resolved runs"),
        }
    }

    #[test]
    fn tie_break_prefers_first_supplied() {
        // Two facilities mirrored across the actor's meridian — identical
        // great-circle distance by symmetry.
        let mut b = GraphBuilder::new();
        b.add_facility("West", Coordinate::new(0.0, -1.0));
        b.add_facility("East", Coordinate::new(0.0, 1.0));
        b.actor(Coordinate::new(0.0, 0.0));
        let g = b.build().unwrap();

        let r = resolve_nearest(&g, &AStarSearch).unwrap();
        let Resolution::Nearest { facility, .. } = r else {
            panic!("expected a resolved facility");
        };
        assert_eq!(g.label(facility), "West");
    }

    #[test]
    fn all_unreachable_resolves_to_no_path() {
        let g = super::helpers::city_graph();
        let r = resolve_nearest(&g, &NoRoutes).unwrap();
        assert!(matches!(r, Resolution::NoPathFound));
        assert!(!r.is_resolved());
    }

    #[test]
    fn isolated_actor_resolves_to_no_path() {
        let mut g = super::helpers::city_graph();
        let actor = g.actor();
        g.adjacency[actor.index()].clear();
        for adj in &mut g.adjacency {
            adj.retain(|(n, _)| *n != actor);
        }
        let r = resolve_nearest(&g, &AStarSearch).unwrap();
        assert!(matches!(r, Resolution::NoPathFound));
    }

    #[test]
    fn end_to_end_reference_case() {
        // A(0,0), B(0,1), actor between them but nearer B.
        let mut b = GraphBuilder::new();
        b.add_facility("A", Coordinate::new(0.0, 0.0));
        b.add_facility("B", Coordinate::new(0.0, 1.0));
        b.actor(Coordinate::new(0.0, 0.6));
        let g = b.build().unwrap();

        let r = resolve_nearest(&g, &AStarSearch).unwrap();
        let Resolution::Nearest { facility, path } = r else {
            panic!("expected a resolved facility");
        };
        assert_eq!(g.label(facility), "B");

        let direct = Coordinate::new(0.0, 0.6).distance_km(Coordinate::new(0.0, 1.0));
        assert!((path.total_km - direct).abs() < 1e-3, "got {}", path.total_km);
    }
}
