//! The grid model: a rectangular [`Maze`] of [`Cell`]s.
//!
//! Every cell carries its structural flags (wall, start, goal) together with
//! the mutable fields a search writes into it. Back-pointers are flat cell
//! indices, so [`Maze::reset`] is a single linear pass.
//!
//! The start cell is always the top-left corner and the goal is always the
//! bottom-right corner.

use std::fmt;

use crate::geom::{Point, Range};

/// Sentinel stored in [`Cell::distance`] while no path cost is known.
pub const UNREACHABLE: i32 = i32::MAX;

/// One maze cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub pos: Point,
    pub is_wall: bool,
    pub is_start: bool,
    pub is_goal: bool,
    pub visited: bool,
    /// Path cost from the start; [`UNREACHABLE`] until discovered.
    pub distance: i32,
    pub heuristic: i32,
    /// Flat index of the cell this one was reached from.
    pub parent: Option<usize>,
}

impl Cell {
    fn new(pos: Point) -> Self {
        Self {
            pos,
            is_wall: false,
            is_start: false,
            is_goal: false,
            visited: false,
            distance: UNREACHABLE,
            heuristic: 0,
            parent: None,
        }
    }

    /// Clear the search fields, keeping the structural flags.
    #[inline]
    pub fn reset(&mut self) {
        self.visited = false;
        self.distance = UNREACHABLE;
        self.heuristic = 0;
        self.parent = None;
    }
}

/// A rectangular maze with a fixed start (top-left) and goal (bottom-right).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Maze {
    bounds: Range,
    cells: Vec<Cell>,
    start: usize,
    goal: usize,
}

impl Maze {
    /// Create an open maze (no walls) of `rows` × `cols` cells.
    ///
    /// Dimensions below 1 are raised to 1.
    pub fn new(rows: i32, cols: i32) -> Self {
        let bounds = Range::new(0, 0, cols.max(1), rows.max(1));
        let mut cells: Vec<Cell> = bounds.iter().map(Cell::new).collect();
        let start = 0;
        let goal = cells.len() - 1;
        cells[start].is_start = true;
        cells[goal].is_goal = true;
        Self {
            bounds,
            cells,
            start,
            goal,
        }
    }

    /// Parse a maze from text: one line per row, `#` for walls and `.` for
    /// open cells. `S` and `G` may mark the start and goal corners.
    ///
    /// Leading and trailing whitespace on each line is ignored, as are blank
    /// lines.
    pub fn parse(text: &str) -> Result<Self, MazeError> {
        let lines: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect();
        let Some(first) = lines.first() else {
            return Err(MazeError::Empty);
        };
        let cols = first.chars().count();
        let rows = lines.len();
        let mut maze = Maze::new(rows as i32, cols as i32);

        for (row, line) in lines.iter().enumerate() {
            let found = line.chars().count();
            if found != cols {
                return Err(MazeError::Ragged {
                    row,
                    expected: cols,
                    found,
                });
            }
            for (col, ch) in line.chars().enumerate() {
                let p = Point::from_row_col(row as i32, col as i32);
                match ch {
                    '.' => {}
                    '#' => {
                        if !maze.set_wall(p, true) {
                            return Err(MazeError::BlockedEndpoint(p));
                        }
                    }
                    'S' if p == maze.start() => {}
                    'G' if p == maze.goal() => {}
                    'S' | 'G' => return Err(MazeError::MisplacedEndpoint { ch, pos: p }),
                    _ => return Err(MazeError::InvalidChar { ch, pos: p }),
                }
            }
        }
        Ok(maze)
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> i32 {
        self.bounds.height()
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> i32 {
        self.bounds.width()
    }

    /// The rectangle covered by the maze.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false: a maze has at least one cell.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Position of the start cell.
    #[inline]
    pub fn start(&self) -> Point {
        self.cells[self.start].pos
    }

    /// Position of the goal cell.
    #[inline]
    pub fn goal(&self) -> Point {
        self.cells[self.goal].pos
    }

    #[inline]
    pub fn start_index(&self) -> usize {
        self.start
    }

    #[inline]
    pub fn goal_index(&self) -> usize {
        self.goal
    }

    /// Flat index of `p`, or `None` if `p` is outside the maze.
    #[inline]
    pub fn index(&self, p: Point) -> Option<usize> {
        self.bounds.index_of(p)
    }

    /// Position of the cell at flat index `idx`.
    #[inline]
    pub fn point(&self, idx: usize) -> Point {
        self.cells[idx].pos
    }

    /// The cell at `p`, if inside the maze.
    pub fn cell(&self, p: Point) -> Option<&Cell> {
        self.index(p).map(|i| &self.cells[i])
    }

    /// The cell at flat index `idx`.
    #[inline]
    pub fn cell_at(&self, idx: usize) -> &Cell {
        &self.cells[idx]
    }

    /// Mutable access to the cell at flat index `idx`.
    #[inline]
    pub fn cell_at_mut(&mut self, idx: usize) -> &mut Cell {
        &mut self.cells[idx]
    }

    /// All cells in row-major order.
    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Whether `p` is inside the maze and not a wall.
    pub fn is_passable(&self, p: Point) -> bool {
        self.cell(p).is_some_and(|c| !c.is_wall)
    }

    /// Set or clear a wall at `p`.
    ///
    /// Returns `false` (and changes nothing) when `p` is outside the maze or
    /// is the start or goal cell.
    pub fn set_wall(&mut self, p: Point, wall: bool) -> bool {
        match self.index(p) {
            Some(i) if i != self.start && i != self.goal => {
                self.cells[i].is_wall = wall;
                true
            }
            _ => false,
        }
    }

    /// Number of wall cells.
    pub fn wall_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_wall).count()
    }

    /// Append the passable cardinal neighbours of cell `idx` to `buf`, in
    /// up, right, down, left order. The caller clears `buf`.
    pub fn neighbors(&self, idx: usize, buf: &mut Vec<usize>) {
        for np in self.cells[idx].pos.neighbors_4() {
            if let Some(ni) = self.index(np) {
                if !self.cells[ni].is_wall {
                    buf.push(ni);
                }
            }
        }
    }

    /// Clear every cell's search fields, keeping walls, start and goal.
    pub fn reset(&mut self) {
        for c in self.cells.iter_mut() {
            c.reset();
        }
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.cols() as usize) {
            for c in row {
                let ch = if c.is_start {
                    'S'
                } else if c.is_goal {
                    'G'
                } else if c.is_wall {
                    '#'
                } else {
                    '.'
                };
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Errors that can occur when parsing a maze from text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MazeError {
    /// The text contained no rows.
    Empty,
    /// A row's width differs from the first row.
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A character other than `#`, `.`, `S` or `G`.
    InvalidChar { ch: char, pos: Point },
    /// `S` or `G` away from its fixed corner.
    MisplacedEndpoint { ch: char, pos: Point },
    /// A wall on the start or goal cell.
    BlockedEndpoint(Point),
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "maze: no rows"),
            Self::Ragged {
                row,
                expected,
                found,
            } => write!(
                f,
                "maze: row {row} has {found} cells, expected {expected}"
            ),
            Self::InvalidChar { ch, pos } => write!(
                f,
                "maze: invalid character '{ch}' at row {}, col {}",
                pos.row(),
                pos.col()
            ),
            Self::MisplacedEndpoint { ch, pos } => write!(
                f,
                "maze: '{ch}' at row {}, col {} is not its fixed corner",
                pos.row(),
                pos.col()
            ),
            Self::BlockedEndpoint(pos) => write!(
                f,
                "maze: wall on start or goal at row {}, col {}",
                pos.row(),
                pos.col()
            ),
        }
    }
}

impl std::error::Error for MazeError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_maze_has_corner_endpoints() {
        let m = Maze::new(3, 4);
        assert_eq!(m.rows(), 3);
        assert_eq!(m.cols(), 4);
        assert_eq!(m.len(), 12);
        assert_eq!(m.start(), Point::from_row_col(0, 0));
        assert_eq!(m.goal(), Point::from_row_col(2, 3));
        assert!(m.cell_at(m.start_index()).is_start);
        assert!(m.cell_at(m.goal_index()).is_goal);
        assert_eq!(m.cells().iter().filter(|c| c.is_start).count(), 1);
        assert_eq!(m.cells().iter().filter(|c| c.is_goal).count(), 1);
        assert!(m.cells().iter().all(|c| c.distance == UNREACHABLE));
    }

    #[test]
    fn walls_refused_on_endpoints() {
        let mut m = Maze::new(3, 3);
        assert!(!m.set_wall(m.start(), true));
        assert!(!m.set_wall(m.goal(), true));
        assert!(!m.set_wall(Point::new(7, 7), true));
        assert!(m.set_wall(Point::new(1, 1), true));
        assert_eq!(m.wall_count(), 1);
        assert!(!m.is_passable(Point::new(1, 1)));
        assert!(!m.is_passable(Point::new(-1, 0)));
    }

    #[test]
    fn neighbors_follow_fixed_order() {
        let m = Maze::new(3, 3);
        let centre = m.index(Point::new(1, 1)).unwrap();
        let mut buf = Vec::new();
        m.neighbors(centre, &mut buf);
        let pts: Vec<Point> = buf.iter().map(|&i| m.point(i)).collect();
        assert_eq!(
            pts,
            vec![
                Point::new(1, 0),
                Point::new(2, 1),
                Point::new(1, 2),
                Point::new(0, 1),
            ]
        );
    }

    #[test]
    fn neighbors_skip_walls_and_edges() {
        let m = Maze::parse(
            "
            S#.
            ...
            ..G
            ",
        )
        .unwrap();
        let mut buf = Vec::new();
        m.neighbors(m.start_index(), &mut buf);
        assert_eq!(buf, vec![m.index(Point::new(0, 1)).unwrap()]);
    }

    #[test]
    fn reset_keeps_structure() {
        let mut m = Maze::parse("S.#\n...\n#.G").unwrap();
        let walls = m.wall_count();
        let i = m.index(Point::new(1, 1)).unwrap();
        {
            let c = m.cell_at_mut(i);
            c.visited = true;
            c.distance = 2;
            c.heuristic = 2;
            c.parent = Some(0);
        }
        m.reset();
        let c = m.cell_at(i);
        assert!(!c.visited);
        assert_eq!(c.distance, UNREACHABLE);
        assert_eq!(c.heuristic, 0);
        assert_eq!(c.parent, None);
        assert_eq!(m.wall_count(), walls);
        assert!(m.cell_at(m.start_index()).is_start);
    }

    #[test]
    fn parse_and_display_round_trip() {
        let text = "S.#.\n.#..\n...G\n";
        let m = Maze::parse(text).unwrap();
        assert_eq!(m.rows(), 3);
        assert_eq!(m.cols(), 4);
        assert_eq!(m.to_string(), text);
    }

    #[test]
    fn parse_errors() {
        assert_eq!(Maze::parse("  \n"), Err(MazeError::Empty));
        assert_eq!(
            Maze::parse("...\n..\n"),
            Err(MazeError::Ragged {
                row: 1,
                expected: 3,
                found: 2
            })
        );
        assert_eq!(
            Maze::parse("..x\n...\n"),
            Err(MazeError::InvalidChar {
                ch: 'x',
                pos: Point::new(2, 0)
            })
        );
        assert_eq!(
            Maze::parse("#..\n...\n"),
            Err(MazeError::BlockedEndpoint(Point::new(0, 0)))
        );
        assert_eq!(
            Maze::parse(".S.\n...\n"),
            Err(MazeError::MisplacedEndpoint {
                ch: 'S',
                pos: Point::new(1, 0)
            })
        );
        let msg = MazeError::BlockedEndpoint(Point::new(2, 1)).to_string();
        assert!(msg.contains("row 1, col 2"));
        assert_eq!(
            MazeError::InvalidChar {
                ch: 'x',
                pos: Point::new(3, 0)
            }
            .to_string(),
            "maze: invalid character 'x' at row 0, col 3"
        );
    }

    #[test]
    fn single_cell_maze_is_start_and_goal() {
        let m = Maze::new(1, 1);
        assert_eq!(m.start_index(), m.goal_index());
        let c = m.cell_at(0);
        assert!(c.is_start && c.is_goal);
    }
}
