//! Multi-stop routing: start at the depot, visit every target, return.
//!
//! The next destination is always the nearest unvisited target by
//! straight-line distance, whatever the leg algorithm. The leg search then
//! walks the adjacency index to that destination; its expansion trace is
//! what the caller animates, while the distance reported for the leg is the
//! direct straight-line distance, rounded to one decimal.

use waypath_core::{CityGraph, NodeId, round_tenth, tenths};

use crate::algorithm::RoutingAlgorithm;
use crate::astar::astar_leg;
use crate::bfs::bfs_leg;
use crate::dfs::dfs_leg;
use crate::dijkstra::ucs_leg;
use crate::reconstruct::reconstruct;
use crate::result::{LegSummary, RoutingResult};

/// What one leg search did.
#[derive(Debug, Clone, Default)]
pub(crate) struct LegTrace {
    /// Nodes in the order the leg expanded them.
    pub(crate) visited: Vec<NodeId>,
    /// Origin → destination through back-pointers; empty if not reached.
    pub(crate) path: Vec<NodeId>,
}

impl LegTrace {
    pub(crate) fn finish(graph: &CityGraph, visited: Vec<NodeId>, reached: Option<NodeId>) -> Self {
        let path = match reached {
            Some(to) => reconstruct(to, graph.len(), |id| graph.node(id).parent),
            None => Vec::new(),
        };
        Self { visited, path }
    }

    #[inline]
    pub(crate) fn reached(&self) -> bool {
        !self.path.is_empty()
    }
}

/// Route from the depot through every target and back.
///
/// Every leg resets the graph's search fields before it runs; only the set
/// of visited targets, the route and the running distance carry across legs.
/// If a leg fails to reach its destination the tour stops early, and the
/// return to the depot is still appended.
pub fn route(graph: &mut CityGraph, algorithm: RoutingAlgorithm) -> RoutingResult {
    let Some(depot) = graph.depot() else {
        log::warn!("{algorithm} routing: graph has no depot");
        return RoutingResult::default();
    };

    let mut visited_targets = vec![false; graph.len()];
    let mut result = RoutingResult {
        visited_order: vec![depot],
        route: vec![depot],
        ..Default::default()
    };
    let mut total_tenths: u64 = 0;
    let mut current = depot;

    while let Some(next) = nearest_unvisited_target(graph, current, &visited_targets) {
        let leg = match algorithm {
            RoutingAlgorithm::Bfs => bfs_leg(graph, current, next),
            RoutingAlgorithm::Dfs => dfs_leg(graph, current, next),
            RoutingAlgorithm::Ucs => ucs_leg(graph, current, next),
            RoutingAlgorithm::Astar => astar_leg(graph, current, next),
        };
        result.visited_order.extend_from_slice(&leg.visited);
        if !leg.reached() {
            log::warn!("{algorithm} routing: target {next} unreachable from {current}");
            break;
        }

        let distance = round_tenth(graph.straight_line(current, next));
        total_tenths += tenths(distance);
        log::trace!(
            "{algorithm} leg {current} -> {next}: {distance:.1}, {} expanded",
            leg.visited.len()
        );

        visited_targets[next] = true;
        result.route.push(next);
        result.legs.push(LegSummary {
            from: current,
            to: next,
            distance,
            expanded: leg.visited.len(),
            path: leg.path,
        });
        current = next;
    }

    total_tenths += tenths(graph.straight_line(current, depot));
    result.route.push(depot);
    result.total_distance = total_tenths as f64 / 10.0;
    result.nodes_expanded = result.visited_order.len();

    log::debug!(
        "{algorithm} routing over {} targets: distance {:.1}, {} expanded",
        graph.bin_count(),
        result.total_distance,
        result.nodes_expanded
    );
    result
}

/// The unvisited target closest to `from` in a straight line. Ties go to
/// the lowest id.
pub fn nearest_unvisited_target(
    graph: &CityGraph,
    from: NodeId,
    visited: &[bool],
) -> Option<NodeId> {
    let mut nearest = None;
    let mut best = f64::MAX;
    for n in graph.nodes() {
        if !n.is_bin || visited.get(n.id).copied().unwrap_or(false) {
            continue;
        }
        let d = graph.straight_line(from, n.id);
        if d < best {
            best = d;
            nearest = Some(n.id);
        }
    }
    nearest
}

#[cfg(test)]
mod tests {
    use super::*;
    use waypath_core::Point;

    fn two_node() -> CityGraph {
        CityGraph::complete(Point::new(5, 5), &[Point::new(5, 8)])
    }

    #[test]
    fn single_target_round_trip_is_six() {
        for algo in RoutingAlgorithm::ALL {
            let mut g = two_node();
            let r = route(&mut g, algo);
            assert_eq!(r.total_distance, 6.0, "{algo}");
            assert_eq!(r.route, vec![0, 1, 0], "{algo}");
            assert_eq!(r.legs.len(), 1);
            assert_eq!(r.legs[0].distance, 3.0);
            assert_eq!(r.legs[0].path, vec![0, 1]);
        }
    }

    #[test]
    fn visited_order_starts_with_depot_then_leg_trace() {
        let mut g = two_node();
        let r = route(&mut g, RoutingAlgorithm::Bfs);
        // Seeded depot, then the leg pops the depot and the target.
        assert_eq!(r.visited_order, vec![0, 0, 1]);
        assert_eq!(r.nodes_expanded, 3);
    }

    #[test]
    fn nearest_neighbour_order() {
        // Targets at distance 4, 1 and 2 from the depot, all on one line.
        let mut g = CityGraph::complete(
            Point::new(0, 0),
            &[Point::new(4, 0), Point::new(1, 0), Point::new(2, 0)],
        );
        for algo in RoutingAlgorithm::ALL {
            let r = route(&mut g, algo);
            assert_eq!(r.route, vec![0, 2, 3, 1, 0], "{algo}");
            // 1 + 1 + 2 out, 4 back.
            assert_eq!(r.total_distance, 8.0, "{algo}");
            assert_eq!(r.targets_visited(), &[2, 3, 1]);
        }
    }

    #[test]
    fn ties_pick_lowest_id() {
        let g = CityGraph::complete(
            Point::new(0, 0),
            &[Point::new(0, 3), Point::new(3, 0), Point::new(0, -3)],
        );
        let visited = vec![false; g.len()];
        assert_eq!(nearest_unvisited_target(&g, 0, &visited), Some(1));
        let visited = vec![false, true, false, false];
        assert_eq!(nearest_unvisited_target(&g, 0, &visited), Some(2));
        let all = vec![true; g.len()];
        assert_eq!(nearest_unvisited_target(&g, 0, &all), None);
    }

    #[test]
    fn depot_only_graph_returns_home() {
        let mut g = CityGraph::complete(Point::new(3, 3), &[]);
        let r = route(&mut g, RoutingAlgorithm::Ucs);
        assert_eq!(r.route, vec![0, 0]);
        assert_eq!(r.total_distance, 0.0);
        assert_eq!(r.visited_order, vec![0]);
        assert!(r.legs.is_empty());
    }

    #[test]
    fn graph_without_depot_yields_empty_result() {
        let mut g = CityGraph::complete(Point::new(5, 5), &[Point::new(1, 1), Point::new(8, 2)]);
        g.node_mut(0).is_depot = false;
        for algo in RoutingAlgorithm::ALL {
            assert_eq!(route(&mut g, algo), RoutingResult::default(), "{algo}");
        }
    }

    #[test]
    fn per_leg_rounding_accumulates() {
        // Each diagonal hop is sqrt 2 = 1.414, rounded to 1.4 per leg.
        let mut g = CityGraph::complete(
            Point::new(0, 0),
            &[Point::new(1, 1), Point::new(2, 2)],
        );
        let r = route(&mut g, RoutingAlgorithm::Astar);
        assert_eq!(r.route, vec![0, 1, 2, 0]);
        // 1.4 + 1.4 + 2.8
        assert_eq!(r.total_distance, 5.6);
    }

    #[test]
    fn legs_reset_state_between_runs() {
        let mut g = CityGraph::complete(
            Point::new(5, 5),
            &[Point::new(0, 0), Point::new(9, 9), Point::new(1, 8)],
        );
        let first = route(&mut g, RoutingAlgorithm::Astar);
        let second = route(&mut g, RoutingAlgorithm::Astar);
        assert_eq!(first, second);
    }
}
