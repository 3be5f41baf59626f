use std::fmt;

use super::{
    edge::{TaillessEdge, WeightedEdge},
    Graph, VertexId, Weight,
};
use crate::error::{Error, Result};

/// Graph with a fixed number of vertices and one contiguous adjacency vector
/// per vertex.
#[derive(Clone, Debug, Default)]
pub struct AdjacencyGraph {
    edges: Vec<Vec<TaillessEdge>>,
}

impl AdjacencyGraph {
    pub fn new(number_of_vertices: u32) -> AdjacencyGraph {
        AdjacencyGraph {
            edges: vec![Vec::new(); number_of_vertices as usize],
        }
    }

    /// Builds an undirected graph, inserting every edge in both directions.
    pub fn from_edges(number_of_vertices: u32, edges: &[WeightedEdge]) -> Result<AdjacencyGraph> {
        let mut graph = AdjacencyGraph::new(number_of_vertices);
        for edge in edges {
            graph.add_edge(edge.tail, edge.head, edge.weight)?;
        }
        Ok(graph)
    }

    /// Inserts the undirected edge `{tail, head}`. Nothing is inserted if
    /// either endpoint is out of range or the weight is negative.
    pub fn add_edge(&mut self, tail: VertexId, head: VertexId, weight: Weight) -> Result<()> {
        self.check_edge(tail, head, weight)?;

        self.edges[tail as usize].push(TaillessEdge { head, weight });
        self.edges[head as usize].push(TaillessEdge { head: tail, weight });

        Ok(())
    }

    /// Inserts the single directed adjacency entry `tail -> head`.
    pub fn add_arc(&mut self, tail: VertexId, head: VertexId, weight: Weight) -> Result<()> {
        self.check_edge(tail, head, weight)?;

        self.edges[tail as usize].push(TaillessEdge { head, weight });

        Ok(())
    }

    fn check_edge(&self, tail: VertexId, head: VertexId, weight: Weight) -> Result<()> {
        self.check_vertex(tail)?;
        self.check_vertex(head)?;
        if weight < 0 {
            return Err(Error::NegativeWeight { tail, head, weight });
        }
        Ok(())
    }
}

impl Graph for AdjacencyGraph {
    fn number_of_vertices(&self) -> u32 {
        self.edges.len() as u32
    }

    fn edges(&self, tail: VertexId) -> Box<dyn ExactSizeIterator<Item = WeightedEdge> + Send + '_> {
        // Struct is needed as tail would otherwise not live long enough.
        struct EdgeIterator<'a> {
            edge_iter: std::slice::Iter<'a, TaillessEdge>,
            tail: VertexId,
        }

        impl<'a> Iterator for EdgeIterator<'a> {
            type Item = WeightedEdge;

            fn next(&mut self) -> Option<Self::Item> {
                self.edge_iter
                    .next()
                    .map(|tailless_edge| tailless_edge.set_tail(self.tail))
            }

            fn size_hint(&self) -> (usize, Option<usize>) {
                self.edge_iter.size_hint()
            }
        }

        impl<'a> ExactSizeIterator for EdgeIterator<'a> {
            fn len(&self) -> usize {
                self.edge_iter.len()
            }
        }

        Box::new(EdgeIterator {
            edge_iter: self.edges[tail as usize].iter(),
            tail,
        })
    }
}

impl fmt::Display for AdjacencyGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (vertex, edges) in self.edges.iter().enumerate() {
            write!(f, "{}:", vertex)?;
            for edge in edges {
                write!(f, " ({}, {})", edge.head, edge.weight)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::AdjacencyGraph;
    use crate::{
        error::Error,
        graphs::{edge::WeightedEdge, Graph},
    };

    #[test]
    fn add_edge_inserts_both_directions() {
        let mut graph = AdjacencyGraph::new(3);
        graph.add_edge(0, 2, 5).unwrap();

        assert_eq!(
            graph.edges(0).collect::<Vec<_>>(),
            vec![WeightedEdge::new(0, 2, 5)]
        );
        assert_eq!(
            graph.edges(2).collect::<Vec<_>>(),
            vec![WeightedEdge::new(2, 0, 5)]
        );
        assert_eq!(graph.edges(1).len(), 0);
        assert_eq!(graph.number_of_edges(), 2);
    }

    #[test]
    fn add_arc_inserts_one_direction() {
        let mut graph = AdjacencyGraph::new(2);
        graph.add_arc(1, 0, 4).unwrap();

        assert_eq!(graph.edges(1).len(), 1);
        assert_eq!(graph.edges(0).len(), 0);
    }

    #[test]
    fn rejected_edges_leave_graph_untouched() {
        let mut graph = AdjacencyGraph::new(3);
        graph.add_edge(0, 1, 1).unwrap();

        assert!(matches!(
            graph.add_edge(0, 3, 1),
            Err(Error::OutOfRange {
                vertex: 3,
                number_of_vertices: 3
            })
        ));
        assert!(matches!(
            graph.add_edge(1, 2, -4),
            Err(Error::NegativeWeight {
                tail: 1,
                head: 2,
                weight: -4
            })
        ));
        assert!(matches!(
            graph.add_arc(7, 0, 1),
            Err(Error::OutOfRange { vertex: 7, .. })
        ));

        assert_eq!(graph.number_of_vertices(), 3);
        assert_eq!(graph.number_of_edges(), 2);
        assert_eq!(graph.edges(2).len(), 0);
    }

    #[test]
    fn display_lists_every_vertex() {
        let graph = AdjacencyGraph::from_edges(
            3,
            &[WeightedEdge::new(0, 1, 3), WeightedEdge::new(1, 2, 7)],
        )
        .unwrap();

        assert_eq!(graph.to_string(), "0: (1, 3)\n1: (0, 3) (2, 7)\n2: (1, 7)\n");
    }
}
