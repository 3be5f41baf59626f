use thiserror::Error;

use crate::graphs::{VertexId, Weight};

pub type Result<T> = std::result::Result<T, Error>;

/// Errors reported by graph construction, the loaders and the searches.
#[derive(Error, Debug)]
pub enum Error {
    #[error("vertex {vertex} is out of range for a graph with {number_of_vertices} vertices")]
    OutOfRange {
        vertex: VertexId,
        number_of_vertices: u32,
    },

    #[error("edge ({tail}, {head}) has negative weight {weight}")]
    NegativeWeight {
        tail: VertexId,
        head: VertexId,
        weight: Weight,
    },

    #[error("dequeue on an empty queue")]
    EmptyQueue,

    #[error("line {line}: {reason}")]
    Parse { line: usize, reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
