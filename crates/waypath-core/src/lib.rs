//! **waypath-core**: models for the waypath search engine.
//!
//! This crate provides the data the search algorithms operate on: geometry
//! primitives, the rectangular [`Maze`] grid model, the complete weighted
//! [`CityGraph`] model used for multi-stop routing, and the rule/fact shapes
//! handed to diagnostic callers.
//!
//! Both models carry their own per-node search state (visited flag, cost,
//! heuristic, back-pointer) and expose a `reset` that clears it in one pass.

pub mod distance;
pub mod geom;
pub mod graph;
pub mod maze;
pub mod rules;

pub use distance::{euclidean, manhattan, round_tenth, tenths};
pub use geom::{Point, Range};
pub use graph::{CityGraph, Edge, Neighbor, Node, NodeId};
pub use maze::{Cell, Maze, MazeError, UNREACHABLE};
pub use rules::{Fact, Rule, RuleError};
