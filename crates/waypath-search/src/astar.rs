use waypath_core::{Cell, CityGraph, Maze, NodeId, manhattan};

use crate::dijkstra::weighted_leg;
use crate::frontier::Frontier;
use crate::result::SearchResult;
use crate::routing::LegTrace;

/// A* search from the maze start to its goal.
///
/// The frontier is ordered by `distance + heuristic` with the Manhattan
/// distance to the goal as heuristic. Ties go to the cell that has been
/// waiting longest; a cell whose distance improves keeps its place in line.
/// Cells are finalised when extracted, not when queued. The maze's search
/// fields must be freshly reset.
pub fn astar(maze: &mut Maze) -> SearchResult {
    best_first(maze, |c| c.distance + c.heuristic)
}

/// Greedy best-first search: same expansion as [`astar`], but ordered by
/// the heuristic alone. Fast to reach the goal, not guaranteed shortest.
pub fn greedy(maze: &mut Maze) -> SearchResult {
    best_first(maze, |c| c.heuristic)
}

fn best_first(maze: &mut Maze, priority: impl Fn(&Cell) -> i32) -> SearchResult {
    let start = maze.start_index();
    let goal = maze.goal_index();
    let goal_pos = maze.goal();
    {
        let c = maze.cell_at_mut(start);
        c.distance = 0;
        c.heuristic = manhattan(c.pos, goal_pos);
    }

    let mut open: Frontier<i32> = Frontier::new();
    open.push(start, priority(maze.cell_at(start)));
    let mut trace = Vec::new();
    let mut nbuf = Vec::with_capacity(4);

    while let Some(ci) = open.pop() {
        maze.cell_at_mut(ci).visited = true;
        trace.push(ci);
        if ci == goal {
            return SearchResult::from_trace(maze, &trace, Some(ci));
        }

        let current_dist = maze.cell_at(ci).distance;
        nbuf.clear();
        maze.neighbors(ci, &mut nbuf);

        for &ni in nbuf.iter() {
            let n = maze.cell_at_mut(ni);
            if n.visited {
                continue;
            }
            let tentative = current_dist + 1;
            if tentative >= n.distance {
                continue;
            }
            n.distance = tentative;
            n.heuristic = manhattan(n.pos, goal_pos);
            n.parent = Some(ci);
            open.push(ni, priority(n));
        }
    }

    SearchResult::from_trace(maze, &trace, None)
}

/// One A* routing leg: uniform-cost expansion guided by the straight-line
/// distance to `to`.
pub(crate) fn astar_leg(graph: &mut CityGraph, from: NodeId, to: NodeId) -> LegTrace {
    weighted_leg(graph, from, to, true)
}
