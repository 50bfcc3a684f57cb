use waypath_core::{CityGraph, NodeId, euclidean};

use crate::frontier::{Cost, Frontier};
use crate::routing::LegTrace;

/// One uniform-cost (Dijkstra) routing leg from `from` to `to`, expanding
/// nodes in order of accumulated edge weight.
pub(crate) fn ucs_leg(graph: &mut CityGraph, from: NodeId, to: NodeId) -> LegTrace {
    weighted_leg(graph, from, to, false)
}

/// Best-first leg over edge weights. With `guided`, each node's priority
/// adds its straight-line distance to `to` (A*); otherwise it is the plain
/// accumulated cost (UCS).
pub(crate) fn weighted_leg(
    graph: &mut CityGraph,
    from: NodeId,
    to: NodeId,
    guided: bool,
) -> LegTrace {
    graph.reset();
    let dest = graph.node(to).pos;
    let start_h = {
        let n = graph.node_mut(from);
        n.cost = Some(0.0);
        if guided {
            n.heuristic = euclidean(n.pos, dest);
        }
        n.heuristic
    };

    let mut open: Frontier<Cost> = Frontier::new();
    open.push(from, Cost(start_h));
    let mut trace = Vec::new();

    while let Some(id) = open.pop() {
        let Some(cost) = graph.node(id).cost else {
            continue;
        };
        graph.node_mut(id).visited = true;
        trace.push(id);
        if id == to {
            return LegTrace::finish(graph, trace, Some(id));
        }

        for i in 0..graph.neighbors(id).len() {
            let nb = graph.neighbors(id)[i];
            let n = graph.node_mut(nb.id);
            if n.visited {
                continue;
            }
            let tentative = cost + nb.weight;
            if n.cost.is_some_and(|c| tentative >= c) {
                continue;
            }
            n.cost = Some(tentative);
            if guided {
                n.heuristic = euclidean(n.pos, dest);
            }
            n.parent = Some(id);
            open.push(nb.id, Cost(tentative + n.heuristic));
        }
    }

    LegTrace::finish(graph, trace, None)
}
