use radix_heap::RadixHeapMap;

use super::{DijkstraQueue, DijkstraQueueElement};
use crate::graphs::VertexId;

/// Monotone priority queue. Pushed distances must not be smaller than the
/// last popped one, which holds for label setting with non-negative weights.
#[derive(Clone)]
pub struct RadixQueue {
    // RadixHeapMap is a max-heap, distances are stored negated.
    heap: RadixHeapMap<i64, VertexId>,
}

impl Default for RadixQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl RadixQueue {
    pub fn new() -> RadixQueue {
        RadixQueue {
            heap: RadixHeapMap::new(),
        }
    }
}

impl DijkstraQueue for RadixQueue {
    fn push(&mut self, element: DijkstraQueueElement) {
        self.heap.push(-element.distance, element.vertex);
    }

    fn pop(&mut self) -> Option<DijkstraQueueElement> {
        let (negative_distance, vertex) = self.heap.pop()?;
        Some(DijkstraQueueElement {
            distance: -negative_distance,
            vertex,
        })
    }

    fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    fn clear(&mut self) {
        // A fresh heap also resets the monotonicity bound.
        self.heap = RadixHeapMap::new();
    }
}
