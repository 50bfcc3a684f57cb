//! Shared rendering and timing for the `waypath` binary.
//!
//! Mazes are drawn as one glyph per cell, coloured through crossterm; routes
//! are printed as a single `Depot (x,y) → Bin i (x,y) → …` line.

use std::io::{self, Write};
use std::time::Instant;

use crossterm::{
    queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
};
use serde::Serialize;
use waypath_core::{CityGraph, Maze, NodeId};
use waypath_search::{
    GridAlgorithm, RoutingAlgorithm, RoutingResult, SearchResult, route, search,
};

/// What a maze cell is drawn as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    Open,
    Wall,
    Visited,
    Path,
    Start,
    Goal,
}

impl Glyph {
    pub fn ch(self) -> char {
        match self {
            Self::Open => '.',
            Self::Wall => '#',
            Self::Visited => 'o',
            Self::Path => '*',
            Self::Start => 'S',
            Self::Goal => 'G',
        }
    }

    pub fn color(self) -> Color {
        match self {
            Self::Open => Color::DarkGrey,
            Self::Wall => Color::Grey,
            Self::Visited => Color::Blue,
            Self::Path => Color::Yellow,
            Self::Start => Color::Green,
            Self::Goal => Color::Red,
        }
    }
}

/// Glyphs for every cell, row by row. Path cells win over visited ones and
/// the endpoints win over both.
pub fn maze_glyphs(maze: &Maze, result: Option<&SearchResult>) -> Vec<Vec<Glyph>> {
    let mut rows: Vec<Vec<Glyph>> = (0..maze.rows())
        .map(|_| vec![Glyph::Open; maze.cols() as usize])
        .collect();
    for c in maze.cells() {
        if c.is_wall {
            rows[c.pos.row() as usize][c.pos.col() as usize] = Glyph::Wall;
        }
    }
    if let Some(r) = result {
        for p in &r.visited_order {
            rows[p.row() as usize][p.col() as usize] = Glyph::Visited;
        }
        for p in &r.path {
            rows[p.row() as usize][p.col() as usize] = Glyph::Path;
        }
    }
    let (s, g) = (maze.start(), maze.goal());
    rows[s.row() as usize][s.col() as usize] = Glyph::Start;
    rows[g.row() as usize][g.col() as usize] = Glyph::Goal;
    rows
}

/// Draw the maze to `out`, coloured when `color` is set.
pub fn draw_maze(
    out: &mut impl Write,
    maze: &Maze,
    result: Option<&SearchResult>,
    color: bool,
) -> io::Result<()> {
    for row in maze_glyphs(maze, result) {
        for g in row {
            if color {
                queue!(out, SetForegroundColor(g.color()), Print(g.ch()))?;
            } else {
                queue!(out, Print(g.ch()))?;
            }
        }
        if color {
            queue!(out, ResetColor)?;
        }
        queue!(out, Print('\n'))?;
    }
    out.flush()
}

fn stop_label(graph: &CityGraph, id: NodeId) -> String {
    let n = graph.node(id);
    if n.is_depot {
        format!("Depot ({},{})", n.pos.x, n.pos.y)
    } else {
        format!("Bin {} ({},{})", n.id, n.pos.x, n.pos.y)
    }
}

/// The route as `Depot (x,y) → Bin i (x,y) → … → Depot (x,y)`.
pub fn route_line(graph: &CityGraph, result: &RoutingResult) -> String {
    result
        .route
        .iter()
        .map(|&id| stop_label(graph, id))
        .collect::<Vec<_>>()
        .join(" \u{2192} ")
}

/// One timed grid search.
#[derive(Debug, Clone, Serialize)]
pub struct MazeReport {
    pub algorithm: GridAlgorithm,
    pub elapsed_ms: f64,
    pub result: SearchResult,
}

impl MazeReport {
    pub fn run(maze: &mut Maze, algorithm: GridAlgorithm) -> Self {
        let start = Instant::now();
        let result = search(maze, algorithm);
        let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;
        Self {
            algorithm,
            elapsed_ms,
            result,
        }
    }

    /// `A*: 0.042 ms, path 19 cells, 57 visited` or `no path` when unsolved.
    pub fn summary(&self) -> String {
        let path = if self.result.is_found() {
            format!("path {} cells", self.result.path_length)
        } else {
            "no path".to_string()
        };
        format!(
            "{}: {:.3} ms, {path}, {} visited",
            self.algorithm, self.elapsed_ms, self.result.nodes_visited
        )
    }
}

/// One timed multi-stop route.
#[derive(Debug, Clone, Serialize)]
pub struct RouteReport {
    pub algorithm: RoutingAlgorithm,
    pub elapsed_ms: f64,
    pub result: RoutingResult,
}

impl RouteReport {
    pub fn run(graph: &mut CityGraph, algorithm: RoutingAlgorithm) -> Self {
        let start = Instant::now();
        let result = route(graph, algorithm);
        let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;
        Self {
            algorithm,
            elapsed_ms,
            result,
        }
    }

    pub fn summary(&self) -> String {
        format!(
            "{}: {:.3} ms, distance {:.1}, {} expanded",
            self.algorithm, self.elapsed_ms, self.result.total_distance, self.result.nodes_expanded
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use waypath_core::Point;

    #[test]
    fn glyphs_layer_path_over_visited() {
        let mut maze = Maze::parse(
            "
            S.#
            ...
            #.G
            ",
        )
        .unwrap();
        let r = search(&mut maze, GridAlgorithm::Bfs);
        let g = maze_glyphs(&maze, Some(&r));
        assert_eq!(g[0][0], Glyph::Start);
        assert_eq!(g[2][2], Glyph::Goal);
        assert_eq!(g[0][2], Glyph::Wall);
        assert_eq!(g[2][0], Glyph::Wall);
        let path_cells = g.iter().flatten().filter(|&&c| c == Glyph::Path).count();
        assert_eq!(path_cells, r.path_length - 2);
    }

    #[test]
    fn plain_drawing() {
        let maze = Maze::parse("S..\n.#.\n..G").unwrap();
        let mut buf = Vec::new();
        draw_maze(&mut buf, &maze, None, false).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "S..\n.#.\n..G\n");
    }

    #[test]
    fn route_text() {
        let mut graph = CityGraph::complete(Point::new(5, 5), &[Point::new(5, 8)]);
        let report = RouteReport::run(&mut graph, RoutingAlgorithm::Ucs);
        assert_eq!(
            route_line(&graph, &report.result),
            "Depot (5,5) \u{2192} Bin 1 (5,8) \u{2192} Depot (5,5)"
        );
        assert!(report.summary().starts_with("UCS: "));
        assert!(report.summary().contains("distance 6.0"));
    }

    #[test]
    fn maze_summary_reports_missing_path() {
        let mut maze = Maze::parse("S#\n#G").unwrap();
        let report = MazeReport::run(&mut maze, GridAlgorithm::Dfs);
        assert!(report.summary().contains("no path"));
        assert!(report.summary().ends_with("1 visited"));
    }

    #[test]
    fn report_serialises() {
        let mut maze = Maze::new(3, 3);
        let report = MazeReport::run(&mut maze, GridAlgorithm::Astar);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["algorithm"], "astar");
        assert_eq!(json["result"]["path_length"], 5);
    }
}
