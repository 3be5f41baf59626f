use std::cmp::Ordering;

use clap::ValueEnum;

use crate::graphs::{Distance, VertexId};

pub mod binary_min_heap;
pub mod radix_queue;

use binary_min_heap::BinaryMinHeap;
use radix_queue::RadixQueue;

/// Vertex keyed by its tentative distance.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct DijkstraQueueElement {
    pub distance: Distance,
    pub vertex: VertexId,
}

// Ordered by distance. Ties are broken by vertex so that `Ord` stays
// consistent with `PartialEq`.
impl Ord for DijkstraQueueElement {
    fn cmp(&self, other: &Self) -> Ordering {
        self.distance
            .cmp(&other.distance)
            .then_with(|| self.vertex.cmp(&other.vertex))
    }
}

impl PartialOrd for DijkstraQueueElement {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl DijkstraQueueElement {
    pub fn new(distance: Distance, vertex: VertexId) -> DijkstraQueueElement {
        DijkstraQueueElement { distance, vertex }
    }
}

/// Min-priority queue driven by the shortest path search. Implementations
/// are free to keep stale entries, the search discards them on pop.
pub trait DijkstraQueue {
    fn push(&mut self, element: DijkstraQueueElement);

    /// Removes the element with the smallest distance.
    fn pop(&mut self) -> Option<DijkstraQueueElement>;

    fn is_empty(&self) -> bool;

    fn clear(&mut self);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum QueueKind {
    Binary,
    Radix,
}

impl QueueKind {
    pub fn build(&self) -> Box<dyn DijkstraQueue> {
        match self {
            QueueKind::Binary => Box::new(BinaryMinHeap::<DijkstraQueueElement>::new()),
            QueueKind::Radix => Box::new(RadixQueue::new()),
        }
    }
}
