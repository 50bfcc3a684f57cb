use waypath_core::{Maze, NodeId, Point};

use crate::reconstruct::reconstruct;

/// Outcome of one start → goal search on a [`Maze`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchResult {
    /// Cells in the order they were finalised; each appears once.
    pub visited_order: Vec<Point>,
    /// Start → goal inclusive, or empty when the goal is unreachable.
    pub path: Vec<Point>,
    /// Number of cells on `path`.
    pub path_length: usize,
    pub nodes_visited: usize,
}

impl SearchResult {
    /// Build a result from a visitation trace of flat cell indices.
    ///
    /// `goal` is the finalised goal index, or `None` if the frontier ran dry.
    pub(crate) fn from_trace(maze: &Maze, trace: &[usize], goal: Option<usize>) -> Self {
        let path: Vec<Point> = match goal {
            Some(g) => reconstruct(g, maze.len(), |i| maze.cell_at(i).parent)
                .into_iter()
                .map(|i| maze.point(i))
                .collect(),
            None => Vec::new(),
        };
        Self {
            visited_order: trace.iter().map(|&i| maze.point(i)).collect(),
            path_length: path.len(),
            nodes_visited: trace.len(),
            path,
        }
    }

    /// Whether a path to the goal was found.
    #[inline]
    pub fn is_found(&self) -> bool {
        !self.path.is_empty()
    }
}

/// One outbound routing leg.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LegSummary {
    pub from: NodeId,
    pub to: NodeId,
    /// Straight-line distance, rounded to one decimal.
    pub distance: f64,
    /// Traversal path the leg search took, reconstructed from back-pointers.
    pub path: Vec<NodeId>,
    /// Nodes the leg search expanded.
    pub expanded: usize,
}

/// Outcome of a multi-stop route over a
/// [`CityGraph`](waypath_core::CityGraph).
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoutingResult {
    /// Nodes in visitation order across every leg.
    pub visited_order: Vec<NodeId>,
    /// Depot, each target in visiting order, depot.
    pub route: Vec<NodeId>,
    /// Sum of per-leg straight-line distances, each rounded to one decimal.
    pub total_distance: f64,
    /// Length of `visited_order`.
    pub nodes_expanded: usize,
    /// Outbound legs in order; the closing return to the depot is not a
    /// searched leg and has no entry.
    pub legs: Vec<LegSummary>,
}

impl RoutingResult {
    /// Targets in the order they were reached.
    pub fn targets_visited(&self) -> &[NodeId] {
        if self.route.len() < 2 {
            return &[];
        }
        &self.route[1..self.route.len() - 1]
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn routing_result_round_trip() {
        let r = RoutingResult {
            visited_order: vec![0, 0, 1],
            route: vec![0, 1, 0],
            total_distance: 6.0,
            nodes_expanded: 3,
            legs: vec![LegSummary {
                from: 0,
                to: 1,
                distance: 3.0,
                path: vec![0, 1],
                expanded: 2,
            }],
        };
        let json = serde_json::to_string(&r).unwrap();
        let back: RoutingResult = serde_json::from_str(&json).unwrap();
        assert_eq!(r, back);
    }
}
