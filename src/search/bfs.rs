use std::collections::VecDeque;

use tracing::debug;

use super::collections::visited_set::VisitedSet;
use crate::{
    error::Result,
    graphs::{Graph, VertexId},
};

/// Visitation order of a breadth first search together with the hop count of
/// every vertex from the start.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BfsTree {
    pub order: Vec<VertexId>,
    pub hops: Vec<Option<u32>>,
}

/// Vertices reachable from `start` in the order they are first discovered.
pub fn bfs(graph: &dyn Graph, start: VertexId) -> Result<Vec<VertexId>> {
    Ok(bfs_levels(graph, start)?.order)
}

pub fn bfs_levels(graph: &dyn Graph, start: VertexId) -> Result<BfsTree> {
    graph.check_vertex(start)?;

    let mut visited = VisitedSet::new(graph.number_of_vertices());
    let mut hops = vec![None; graph.number_of_vertices() as usize];
    let mut frontier = VecDeque::new();
    let mut order = Vec::new();

    // Vertices are marked on enqueue so that none is enqueued twice.
    visited.visit(start);
    hops[start as usize] = Some(0);
    frontier.push_back(start);

    while let Some(tail) = frontier.pop_front() {
        order.push(tail);
        let tail_hops = hops[tail as usize].unwrap_or(0);

        for edge in graph.edges(tail) {
            // A foreign `Graph` may hold heads that `add_edge` would reject.
            graph.check_vertex(edge.head)?;
            if !visited.visit(edge.head) {
                hops[edge.head as usize] = Some(tail_hops + 1);
                frontier.push_back(edge.head);
            }
        }
    }

    debug!(start, visited = order.len(), "bfs finished");
    Ok(BfsTree { order, hops })
}
