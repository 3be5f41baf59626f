use std::path::Path;

use clap::ValueEnum;
use graphs::{adjacency_graph::AdjacencyGraph, graph_factory::GraphFactory};

pub mod error;
pub mod graphs;
pub mod queue;
pub mod search;
pub mod utility;

pub use error::{Error, Result};

#[derive(Debug, ValueEnum, Clone, Copy, PartialEq, Eq)]
pub enum GraphFormat {
    /// `vertex: target,target/weight,...` per line, one directed arc per entry
    Adjacency,
    /// `tail head weight` per line, undirected
    Edges,
}

pub fn read_graph(path: &Path, format: GraphFormat) -> Result<AdjacencyGraph> {
    match format {
        GraphFormat::Adjacency => GraphFactory::from_adjacency_file(path),
        GraphFormat::Edges => GraphFactory::from_edge_list_file(path),
    }
}
