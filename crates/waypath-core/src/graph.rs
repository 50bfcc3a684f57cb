//! The weighted-graph model: a depot plus target nodes ("bins"), fully
//! connected by straight-line edges.
//!
//! Node ids are indices into the node list: id 0 is the depot and ids
//! `1..=N` are the targets. The adjacency index is id-indexed, and each
//! node's neighbour list enumerates the other nodes in ascending id order.

use crate::distance::{euclidean, round_tenth};
use crate::geom::Point;

/// Stable node identifier (the node's index).
pub type NodeId = usize;

/// One graph node.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Node {
    pub id: NodeId,
    pub pos: Point,
    pub is_depot: bool,
    pub is_bin: bool,
    pub visited: bool,
    /// Traversal cost from the leg origin; `None` until discovered.
    pub cost: Option<f64>,
    pub heuristic: f64,
    pub parent: Option<NodeId>,
}

impl Node {
    fn new(id: NodeId, pos: Point, is_depot: bool) -> Self {
        Self {
            id,
            pos,
            is_depot,
            is_bin: !is_depot,
            visited: false,
            cost: None,
            heuristic: 0.0,
            parent: None,
        }
    }

    /// Clear the search fields, keeping id, position and flags.
    #[inline]
    pub fn reset(&mut self) {
        self.visited = false;
        self.cost = None;
        self.heuristic = 0.0;
        self.parent = None;
    }
}

/// An undirected weighted edge.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge {
    pub a: NodeId,
    pub b: NodeId,
    /// Straight-line length rounded to one decimal.
    pub weight: f64,
}

/// An adjacency entry.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Neighbor {
    pub id: NodeId,
    pub weight: f64,
}

/// A complete graph over one depot and its target nodes.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CityGraph {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    adjacency: Vec<Vec<Neighbor>>,
}

impl CityGraph {
    /// Build the complete graph over a depot at `depot` and one target per
    /// entry of `bins` (target `i` gets id `i + 1`).
    pub fn complete(depot: Point, bins: &[Point]) -> Self {
        let mut nodes = Vec::with_capacity(bins.len() + 1);
        nodes.push(Node::new(0, depot, true));
        for (i, &p) in bins.iter().enumerate() {
            nodes.push(Node::new(i + 1, p, false));
        }

        let n = nodes.len();
        let mut edges = Vec::with_capacity(n * n.saturating_sub(1) / 2);
        let mut adjacency = vec![Vec::with_capacity(n.saturating_sub(1)); n];
        for a in 0..n {
            for b in a + 1..n {
                let weight = round_tenth(euclidean(nodes[a].pos, nodes[b].pos));
                edges.push(Edge { a, b, weight });
                adjacency[a].push(Neighbor { id: b, weight });
                adjacency[b].push(Neighbor { id: a, weight });
            }
        }

        Self {
            nodes,
            edges,
            adjacency,
        }
    }

    /// All nodes, indexed by id.
    #[inline]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// All edges, each listed once.
    #[inline]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    #[inline]
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id]
    }

    #[inline]
    pub fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id]
    }

    /// Neighbours of `id` with edge weights, in ascending id order.
    #[inline]
    pub fn neighbors(&self, id: NodeId) -> &[Neighbor] {
        &self.adjacency[id]
    }

    /// Number of nodes, depot included.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Id of the depot.
    pub fn depot(&self) -> Option<NodeId> {
        self.nodes.iter().position(|n| n.is_depot)
    }

    /// Number of target nodes.
    pub fn bin_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_bin).count()
    }

    /// Weight of the edge between `a` and `b`.
    pub fn weight(&self, a: NodeId, b: NodeId) -> Option<f64> {
        self.adjacency
            .get(a)?
            .iter()
            .find(|nb| nb.id == b)
            .map(|nb| nb.weight)
    }

    /// Straight-line distance between two nodes (unrounded).
    #[inline]
    pub fn straight_line(&self, a: NodeId, b: NodeId) -> f64 {
        euclidean(self.nodes[a].pos, self.nodes[b].pos)
    }

    /// Clear every node's search fields.
    pub fn reset(&mut self) {
        for n in self.nodes.iter_mut() {
            n.reset();
        }
    }
}
