use std::collections::VecDeque;

use waypath_core::{CityGraph, Maze, NodeId};

use crate::result::SearchResult;
use crate::routing::LegTrace;

/// Breadth-first search from the maze start to its goal.
///
/// Cells are marked visited when enqueued, so each cell is queued at most
/// once. Every step costs 1, which makes the returned path a shortest one.
/// The maze's search fields must be freshly reset.
pub fn bfs(maze: &mut Maze) -> SearchResult {
    let start = maze.start_index();
    let goal = maze.goal_index();
    {
        let c = maze.cell_at_mut(start);
        c.visited = true;
        c.distance = 0;
    }

    let mut queue: VecDeque<usize> = VecDeque::from([start]);
    let mut trace = Vec::new();
    let mut nbuf = Vec::with_capacity(4);

    while let Some(ci) = queue.pop_front() {
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
            queue.push_back(ni);
        }
    }

    SearchResult::from_trace(maze, &trace, None)
}

/// One breadth-first routing leg from `from` to `to` over the adjacency
/// index. Edge weights only feed the cost bookkeeping; expansion order is
/// pure FIFO.
pub(crate) fn bfs_leg(graph: &mut CityGraph, from: NodeId, to: NodeId) -> LegTrace {
    graph.reset();
    {
        let n = graph.node_mut(from);
        n.visited = true;
        n.cost = Some(0.0);
    }

    let mut queue: VecDeque<NodeId> = VecDeque::from([from]);
    let mut trace = Vec::new();

    while let Some(id) = queue.pop_front() {
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
            queue.push_back(nb.id);
        }
    }

    LegTrace::finish(graph, trace, None)
}
