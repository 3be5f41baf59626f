use fixedbitset::FixedBitSet;

use crate::graphs::VertexId;

/// One bit per vertex, owned by a single search run.
pub struct VisitedSet {
    visited: FixedBitSet,
}

impl VisitedSet {
    pub fn new(number_of_vertices: u32) -> Self {
        VisitedSet {
            visited: FixedBitSet::with_capacity(number_of_vertices as usize),
        }
    }

    /// Marks `vertex` and returns whether it was already marked.
    pub fn visit(&mut self, vertex: VertexId) -> bool {
        self.visited.put(vertex as usize)
    }

    pub fn count(&self) -> usize {
        self.visited.count_ones(..)
    }
}
