use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use indicatif::ProgressIterator;
use tracing::debug;

use super::{adjacency_graph::AdjacencyGraph, edge::WeightedEdge, VertexId, Weight};
use crate::{
    error::{Error, Result},
    utility::get_progressspinner,
};

/// Weight of adjacency-list entries that do not name one.
pub const DEFAULT_WEIGHT: Weight = 1;

#[derive(Clone)]
pub struct GraphFactory {}

impl GraphFactory {
    pub fn from_adjacency_file(path: &Path) -> Result<AdjacencyGraph> {
        let reader = BufReader::new(File::open(path)?);
        Self::from_adjacency_reader(reader)
    }

    /// Reads lines of the form `vertex: target,target/weight,...`. Every entry
    /// becomes a directed arc, so undirected graphs list both directions.
    pub fn from_adjacency_reader<R: BufRead>(reader: R) -> Result<AdjacencyGraph> {
        let spinner = get_progressspinner("Reading adjacency list");

        let mut edges = Vec::new();
        let mut max_vertex: Option<VertexId> = None;
        for (index, line) in reader.lines().enumerate().progress_with(spinner.clone()) {
            let line_number = index + 1;
            let line = line?;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let (tail, targets) = line
                .split_once(':')
                .ok_or_else(|| parse_error(line_number, "missing ':' after vertex id"))?;
            let tail = parse_vertex(tail, line_number)?;
            max_vertex = max_vertex.max(Some(tail));

            for entry in targets.split(',').map(str::trim) {
                if entry.is_empty() {
                    continue;
                }
                let (head, weight) = match entry.split_once('/') {
                    Some((head, weight)) => (
                        parse_vertex(head, line_number)?,
                        parse_weight(weight, line_number)?,
                    ),
                    None => (parse_vertex(entry, line_number)?, DEFAULT_WEIGHT),
                };
                max_vertex = max_vertex.max(Some(head));
                edges.push(WeightedEdge::new(tail, head, weight));
            }
        }
        spinner.finish_and_clear();

        let number_of_vertices = max_vertex.map_or(0, |vertex| vertex + 1);
        let mut graph = AdjacencyGraph::new(number_of_vertices);
        for edge in edges.iter() {
            graph.add_arc(edge.tail, edge.head, edge.weight)?;
        }

        debug!(
            vertices = number_of_vertices,
            arcs = edges.len(),
            "read adjacency list"
        );
        Ok(graph)
    }

    pub fn from_edge_list_file(path: &Path) -> Result<AdjacencyGraph> {
        let reader = BufReader::new(File::open(path)?);
        Self::from_edge_list_reader(reader)
    }

    /// Reads lines of the form `tail head weight` and inserts each edge in both
    /// directions.
    pub fn from_edge_list_reader<R: BufRead>(reader: R) -> Result<AdjacencyGraph> {
        let spinner = get_progressspinner("Reading edge list");

        let mut edges = Vec::new();
        let mut max_vertex: Option<VertexId> = None;
        for (index, line) in reader.lines().enumerate().progress_with(spinner.clone()) {
            let line_number = index + 1;
            let line = line?;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let mut values = line.split_whitespace();
            let tail = parse_vertex(
                values
                    .next()
                    .ok_or_else(|| parse_error(line_number, "no tail found"))?,
                line_number,
            )?;
            let head = parse_vertex(
                values
                    .next()
                    .ok_or_else(|| parse_error(line_number, "no head found"))?,
                line_number,
            )?;
            let weight = parse_weight(
                values
                    .next()
                    .ok_or_else(|| parse_error(line_number, "no weight found"))?,
                line_number,
            )?;
            if values.next().is_some() {
                return Err(parse_error(line_number, "trailing values after weight"));
            }

            max_vertex = max_vertex.max(Some(tail.max(head)));
            edges.push(WeightedEdge::new(tail, head, weight));
        }
        spinner.finish_and_clear();

        let number_of_vertices = max_vertex.map_or(0, |vertex| vertex + 1);
        let graph = AdjacencyGraph::from_edges(number_of_vertices, &edges)?;

        debug!(
            vertices = number_of_vertices,
            edges = edges.len(),
            "read edge list"
        );
        Ok(graph)
    }
}

fn parse_error(line: usize, reason: impl Into<String>) -> Error {
    Error::Parse {
        line,
        reason: reason.into(),
    }
}

/// The vertex count is the largest id + 1, so `VertexId::MAX` itself is
/// rejected.
fn parse_vertex(value: &str, line: usize) -> Result<VertexId> {
    let value = value.trim();
    let vertex: VertexId = value
        .parse()
        .map_err(|_| parse_error(line, format!("invalid vertex id `{}`", value)))?;
    if vertex == VertexId::MAX {
        return Err(parse_error(
            line,
            format!("vertex id `{}` is too large", value),
        ));
    }
    Ok(vertex)
}

fn parse_weight(value: &str, line: usize) -> Result<Weight> {
    let value = value.trim();
    value
        .parse()
        .map_err(|_| parse_error(line, format!("invalid weight `{}`", value)))
}
