use crate::error::{Error, Result};

pub mod adjacency_graph;
pub mod edge;
pub mod graph_factory;
pub mod graph_functions;

use edge::WeightedEdge;

pub type VertexId = u32;
pub type Weight = i64;
pub type Distance = i64;

/// Distance of a vertex that is not reachable from the source. Larger than any
/// achievable path sum, relaxation saturates below it.
pub const INFINITY: Distance = Distance::MAX;

pub trait Graph: Send + Sync {
    fn number_of_vertices(&self) -> u32;

    fn number_of_edges(&self) -> u32 {
        (0..self.number_of_vertices())
            .map(|vertex| self.edges(vertex).len() as u32)
            .sum::<u32>()
    }

    /// Outgoing edges of `tail` in insertion order. `tail` must be a valid
    /// vertex.
    fn edges(&self, tail: VertexId) -> Box<dyn ExactSizeIterator<Item = WeightedEdge> + Send + '_>;

    fn check_vertex(&self, vertex: VertexId) -> Result<()> {
        if vertex >= self.number_of_vertices() {
            return Err(Error::OutOfRange {
                vertex,
                number_of_vertices: self.number_of_vertices(),
            });
        }
        Ok(())
    }
}
