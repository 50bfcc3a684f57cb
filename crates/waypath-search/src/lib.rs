//! Search algorithms over the waypath models.
//!
//! Two families share one set of primitives (a frontier, per-node cost and
//! heuristic, back-pointer reconstruction):
//!
//! - **Grid search** from a [`Maze`](waypath_core::Maze) start to its goal:
//!   [`bfs`], [`dfs`], [`astar`] and [`greedy`], or [`search`] with a
//!   [`GridAlgorithm`].
//! - **Multi-stop routing** over a [`CityGraph`](waypath_core::CityGraph):
//!   [`route`] with a [`RoutingAlgorithm`] visits every target, nearest
//!   first, and returns to the depot.
//!
//! Every call runs to completion on a caller-owned model and returns a fully
//! materialised result ([`SearchResult`] / [`RoutingResult`]). An
//! unreachable goal is not an error: it yields an empty path.
//!
//! # Exploration order
//!
//! | Algorithm | Frontier | Optimal |
//! |---|---|---|
//! | BFS | FIFO queue | yes (unit steps) |
//! | DFS | LIFO stack | no |
//! | A\* | min-heap on cost + heuristic | yes |
//! | Greedy | min-heap on heuristic | no |
//! | UCS | min-heap on cost | yes (per leg) |
//!
//! Grid neighbours are always generated up, right, down, left, and heap
//! ties go to the entry queued first.

mod algorithm;
mod astar;
mod bfs;
mod dfs;
mod dijkstra;
mod frontier;
mod reconstruct;
mod result;
mod routing;

pub use algorithm::{GridAlgorithm, ParseAlgorithmError, RoutingAlgorithm, search};
pub use astar::{astar, greedy};
pub use bfs::bfs;
pub use dfs::dfs;
pub use reconstruct::reconstruct;
pub use result::{LegSummary, RoutingResult, SearchResult};
pub use routing::{nearest_unvisited_target, route};
