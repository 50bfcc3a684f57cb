//! Algorithm selectors and the grid search entry point.

use std::fmt;
use std::str::FromStr;

use waypath_core::Maze;

use crate::astar::{astar, greedy};
use crate::bfs::bfs;
use crate::dfs::dfs;
use crate::result::SearchResult;

/// Which search runs on a [`Maze`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum GridAlgorithm {
    Bfs,
    Dfs,
    Astar,
    Greedy,
}

impl GridAlgorithm {
    pub const ALL: [Self; 4] = [Self::Bfs, Self::Dfs, Self::Astar, Self::Greedy];

    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Bfs => "BFS",
            Self::Dfs => "DFS",
            Self::Astar => "A*",
            Self::Greedy => "Greedy",
        }
    }

    /// Whether the returned path is always a shortest one.
    pub fn is_optimal(self) -> bool {
        matches!(self, Self::Bfs | Self::Astar)
    }
}

impl fmt::Display for GridAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for GridAlgorithm {
    type Err = ParseAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bfs" => Ok(Self::Bfs),
            "dfs" => Ok(Self::Dfs),
            "astar" | "a*" => Ok(Self::Astar),
            "greedy" | "gbfs" => Ok(Self::Greedy),
            _ => Err(ParseAlgorithmError {
                input: s.to_string(),
                expected: "bfs, dfs, astar, greedy",
            }),
        }
    }
}

/// Which leg search drives a multi-stop route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum RoutingAlgorithm {
    Bfs,
    Dfs,
    Ucs,
    Astar,
}

impl RoutingAlgorithm {
    pub const ALL: [Self; 4] = [Self::Bfs, Self::Dfs, Self::Ucs, Self::Astar];

    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Bfs => "BFS",
            Self::Dfs => "DFS",
            Self::Ucs => "UCS",
            Self::Astar => "A*",
        }
    }
}

impl fmt::Display for RoutingAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RoutingAlgorithm {
    type Err = ParseAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bfs" => Ok(Self::Bfs),
            "dfs" => Ok(Self::Dfs),
            "ucs" | "dijkstra" => Ok(Self::Ucs),
            "astar" | "a*" => Ok(Self::Astar),
            _ => Err(ParseAlgorithmError {
                input: s.to_string(),
                expected: "bfs, dfs, ucs, astar",
            }),
        }
    }
}

/// An unrecognised algorithm name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseAlgorithmError {
    input: String,
    expected: &'static str,
}

impl fmt::Display for ParseAlgorithmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown algorithm '{}' (expected one of: {})",
            self.input, self.expected
        )
    }
}

impl std::error::Error for ParseAlgorithmError {}

/// Reset `maze` and run `algorithm` from its start to its goal.
pub fn search(maze: &mut Maze, algorithm: GridAlgorithm) -> SearchResult {
    maze.reset();
    let result = match algorithm {
        GridAlgorithm::Bfs => bfs(maze),
        GridAlgorithm::Dfs => dfs(maze),
        GridAlgorithm::Astar => astar(maze),
        GridAlgorithm::Greedy => greedy(maze),
    };
    log::debug!(
        "{algorithm} search on {}x{} maze: path {} cells, {} visited",
        maze.rows(),
        maze.cols(),
        result.path_length,
        result.nodes_visited
    );
    result
}
