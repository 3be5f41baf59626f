use crate::{
    graphs::{Distance, VertexId, INFINITY},
    search::path::Path,
};

/// Result of a shortest path search: tentative distances and predecessors
/// per vertex, plus the order in which vertices were settled.
#[derive(Clone, Debug)]
pub struct DijkstraData {
    pub source: VertexId,
    pub distances: Vec<Distance>,
    pub predecessors: Vec<Option<VertexId>>,
    pub settle_order: Vec<VertexId>,
}

impl DijkstraData {
    pub fn new(number_of_vertices: u32, source: VertexId) -> DijkstraData {
        let mut distances = vec![INFINITY; number_of_vertices as usize];
        distances[source as usize] = 0;

        DijkstraData {
            source,
            distances,
            predecessors: vec![None; number_of_vertices as usize],
            settle_order: Vec::new(),
        }
    }

    pub fn get_distance(&self, vertex: VertexId) -> Distance {
        self.distances[vertex as usize]
    }

    pub fn get_predecessor(&self, vertex: VertexId) -> Option<VertexId> {
        self.predecessors[vertex as usize]
    }

    pub fn is_reachable(&self, vertex: VertexId) -> bool {
        self.get_distance(vertex) != INFINITY
    }

    /// Relaxes the edge `tail -> head`. Returns the new distance of `head` if
    /// it improved.
    pub fn update(&mut self, tail: VertexId, head: VertexId, weight: Distance) -> Option<Distance> {
        let alternative_distance = self.distances[tail as usize].saturating_add(weight);
        if alternative_distance < self.distances[head as usize] {
            self.distances[head as usize] = alternative_distance;
            self.predecessors[head as usize] = Some(tail);
            return Some(alternative_distance);
        }
        None
    }

    pub fn settle(&mut self, vertex: VertexId) {
        self.settle_order.push(vertex);
    }

    /// Traces predecessors back from `target`. Returns `None` if the target is
    /// unreachable.
    pub fn get_path(&self, target: VertexId) -> Option<Path> {
        let distance = *self.distances.get(target as usize)?;
        if distance == INFINITY {
            return None;
        }

        let mut vertices = vec![target];
        let mut current = target;
        while let Some(predecessor) = self.get_predecessor(current) {
            current = predecessor;
            vertices.push(current);
        }
        vertices.reverse();

        Some(Path { vertices, distance })
    }

    pub fn into_distances(self) -> Vec<Distance> {
        self.distances
    }
}
