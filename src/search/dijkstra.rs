use tracing::{debug, trace};

use super::{
    collections::{dijkstra_data::DijkstraData, visited_set::VisitedSet},
    path::{Path, ShortestPathRequest},
};
use crate::{
    error::Result,
    graphs::{graph_functions::validate_graph, Distance, Graph, VertexId},
    queue::{binary_min_heap::BinaryMinHeap, DijkstraQueue, DijkstraQueueElement},
};

/// Distance from `source` to every vertex, `INFINITY` for unreachable ones.
pub fn shortest_paths(graph: &dyn Graph, source: VertexId) -> Result<Vec<Distance>> {
    let mut queue =
        BinaryMinHeap::<DijkstraQueueElement>::with_capacity(graph.number_of_vertices() as usize);
    Ok(single_source(graph, source, &mut queue)?.into_distances())
}

/// Runs the search from `source` until `queue` is exhausted.
pub fn single_source(
    graph: &dyn Graph,
    source: VertexId,
    queue: &mut dyn DijkstraQueue,
) -> Result<DijkstraData> {
    search(graph, source, None, queue)
}

/// Shortest path for a single pair. The search stops once the target is
/// settled.
pub fn shortest_path(graph: &dyn Graph, request: &ShortestPathRequest) -> Result<Option<Path>> {
    let mut queue = BinaryMinHeap::<DijkstraQueueElement>::new();
    let data = search(graph, request.source(), Some(request.target()), &mut queue)?;
    Ok(data.get_path(request.target()))
}

fn search(
    graph: &dyn Graph,
    source: VertexId,
    target: Option<VertexId>,
    queue: &mut dyn DijkstraQueue,
) -> Result<DijkstraData> {
    graph.check_vertex(source)?;
    if let Some(target) = target {
        graph.check_vertex(target)?;
    }
    validate_graph(graph)?;

    let mut data = DijkstraData::new(graph.number_of_vertices(), source);
    let mut settled = VisitedSet::new(graph.number_of_vertices());

    queue.clear();
    queue.push(DijkstraQueueElement::new(0, source));

    while let Some(DijkstraQueueElement { vertex: tail, .. }) = queue.pop() {
        // Stale entries of already settled vertices are dropped here instead
        // of being removed when a shorter distance is found.
        if settled.visit(tail) {
            continue;
        }
        data.settle(tail);
        trace!(vertex = tail, distance = data.get_distance(tail), "settled");

        if target == Some(tail) {
            break;
        }

        for edge in graph.edges(tail) {
            if let Some(distance) = data.update(tail, edge.head, edge.weight) {
                queue.push(DijkstraQueueElement::new(distance, edge.head));
            }
        }
    }

    debug!(source, settled = settled.count(), "dijkstra finished");
    Ok(data)
}
