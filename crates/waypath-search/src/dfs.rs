use waypath_core::{CityGraph, Maze, NodeId};

use crate::result::SearchResult;
use crate::routing::LegTrace;

/// Depth-first search from the maze start to its goal.
///
/// Uses an explicit stack with the same mark-on-push discipline as
/// [`bfs`](crate::bfs). Neighbours are pushed up, right, down, left, so the
/// last one pushed (left) is explored first. The path is not necessarily
/// shortest.
pub fn dfs(maze: &mut Maze) -> SearchResult {
    let start = maze.start_index();
    let goal = maze.goal_index();
    {
        let c = maze.cell_at_mut(start);
        c.visited = true;
        c.distance = 0;
    }

    let mut stack = vec![start];
    let mut trace = Vec::new();
    let mut nbuf = Vec::with_capacity(4);

    while let Some(ci) = stack.pop() {
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
            n.visited = true;
            n.parent = Some(ci);
            n.distance = current_dist + 1;
            stack.push(ni);
        }
    }

    SearchResult::from_trace(maze, &trace, None)
}

/// One depth-first routing leg from `from` to `to`.
pub(crate) fn dfs_leg(graph: &mut CityGraph, from: NodeId, to: NodeId) -> LegTrace {
    graph.reset();
    {
        let n = graph.node_mut(from);
        n.visited = true;
        n.cost = Some(0.0);
    }

    let mut stack = vec![from];
    let mut trace = Vec::new();

    while let Some(id) = stack.pop() {
        trace.push(id);
        if id == to {
            return LegTrace::finish(graph, trace, Some(id));
        }

        let cost = graph.node(id).cost.unwrap_or_default();
        for i in 0..graph.neighbors(id).len() {
            let nb = graph.neighbors(id)[i];
            let n = graph.node_mut(nb.id);
            if n.visited {
                continue;
            }
            n.visited = true;
            n.parent = Some(id);
            n.cost = Some(cost + nb.weight);
            stack.push(nb.id);
        }
    }

    LegTrace::finish(graph, trace, None)
}
