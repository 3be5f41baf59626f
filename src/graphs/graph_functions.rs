use super::{Distance, Graph, VertexId};
use crate::{
    error::{Error, Result},
    search::path::{Path, ShortestPathTestCase},
};

/// Fails with the first edge whose head is out of range or whose weight is
/// negative. Searches call this on entry so that a graph not built through
/// `add_edge` can neither panic them nor yield wrong distances.
pub fn validate_graph(graph: &dyn Graph) -> Result<()> {
    for vertex in 0..graph.number_of_vertices() {
        for edge in graph.edges(vertex) {
            graph.check_vertex(edge.head)?;
            if edge.weight < 0 {
                return Err(Error::NegativeWeight {
                    tail: edge.tail,
                    head: edge.head,
                    weight: edge.weight,
                });
            }
        }
    }
    Ok(())
}

/// Sum of the cheapest edges between consecutive vertices, or `None` if two
/// consecutive vertices are not adjacent.
pub fn path_distance(graph: &dyn Graph, vertices: &[VertexId]) -> Option<Distance> {
    let mut distance: Distance = 0;
    for window in vertices.windows(2) {
        let (tail, head) = (window[0], window[1]);
        if tail >= graph.number_of_vertices() {
            return None;
        }
        let weight = graph
            .edges(tail)
            .filter(|edge| edge.head == head)
            .map(|edge| edge.weight)
            .min()?;
        distance = distance.saturating_add(weight);
    }
    Some(distance)
}

/// Check if a path is correct for a given test case.
pub fn validate_path(
    graph: &dyn Graph,
    validation: &ShortestPathTestCase,
    path: &Option<Path>,
) -> std::result::Result<(), String> {
    let Some(path) = path else {
        if validation.distance.is_some() {
            return Err("no path is found but there should be one".to_string());
        }
        return Ok(());
    };

    let Some(distance) = validation.distance else {
        return Err("a path was found where there should be none".to_string());
    };

    if path.distance != distance {
        return Err("wrong path distance".to_string());
    }

    if path.vertices.first() != Some(&validation.request.source()) {
        return Err("first vertex of path is not source of request".to_string());
    }
    if path.vertices.last() != Some(&validation.request.target()) {
        return Err("last vertex of path is not target of request".to_string());
    }

    match path_distance(graph, &path.vertices) {
        Some(true_distance) if true_distance == distance => Ok(()),
        Some(_) => Err("edges of path do not sum to its distance".to_string()),
        None => Err("path uses an edge that does not exist".to_string()),
    }
}
