use super::{DijkstraQueue, DijkstraQueueElement};
use crate::error::{Error, Result};

/// How the heap restores its invariant after an update. Both strategies leave
/// the array in the same state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SiftStrategy {
    #[default]
    Iterative,
    Recursive,
}

/// Min-heap stored as an implicit complete binary tree. The children of
/// position `i` live at `2i + 1` and `2i + 2`.
#[derive(Clone, Debug)]
pub struct BinaryMinHeap<T> {
    heap: Vec<T>,
    strategy: SiftStrategy,
}

fn parent(index: usize) -> usize {
    (index - 1) / 2
}

fn left(index: usize) -> usize {
    2 * index + 1
}

fn right(index: usize) -> usize {
    2 * index + 2
}

impl<T: Ord> Default for BinaryMinHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> BinaryMinHeap<T> {
    pub fn new() -> BinaryMinHeap<T> {
        BinaryMinHeap {
            heap: Vec::new(),
            strategy: SiftStrategy::default(),
        }
    }

    pub fn with_capacity(capacity: usize) -> BinaryMinHeap<T> {
        BinaryMinHeap {
            heap: Vec::with_capacity(capacity),
            strategy: SiftStrategy::default(),
        }
    }

    pub fn with_strategy(strategy: SiftStrategy) -> BinaryMinHeap<T> {
        BinaryMinHeap {
            heap: Vec::new(),
            strategy,
        }
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn peek(&self) -> Option<&T> {
        self.heap.first()
    }

    pub fn clear(&mut self) {
        self.heap.clear();
    }

    /// The underlying array in tree order.
    pub fn as_slice(&self) -> &[T] {
        &self.heap
    }

    /// Returns `true` if no element is smaller than its parent.
    pub fn is_heap(&self) -> bool {
        (1..self.heap.len()).all(|index| self.heap[index] >= self.heap[parent(index)])
    }

    pub fn enqueue(&mut self, element: T) {
        self.heap.push(element);
        let last = self.heap.len() - 1;
        match self.strategy {
            SiftStrategy::Iterative => self.sift_up(last),
            SiftStrategy::Recursive => self.sift_up_recursive(last),
        }
    }

    /// Removes and returns the smallest element.
    pub fn dequeue(&mut self) -> Result<T> {
        if self.heap.is_empty() {
            return Err(Error::EmptyQueue);
        }

        // Moves the last element into the root.
        let minimum = self.heap.swap_remove(0);
        if !self.heap.is_empty() {
            match self.strategy {
                SiftStrategy::Iterative => self.sift_down(0),
                SiftStrategy::Recursive => self.sift_down_recursive(0),
            }
        }

        Ok(minimum)
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = parent(index);
            if self.heap[index] >= self.heap[parent] {
                break;
            }
            self.heap.swap(index, parent);
            index = parent;
        }
    }

    fn sift_up_recursive(&mut self, index: usize) {
        if index == 0 {
            return;
        }
        let parent = parent(index);
        if self.heap[index] < self.heap[parent] {
            self.heap.swap(index, parent);
            self.sift_up_recursive(parent);
        }
    }

    /// Position of the smallest among `index` and its children. Prefers
    /// `index` and then the left child on ties.
    fn smallest_of_family(&self, index: usize) -> usize {
        let len = self.heap.len();
        let mut smallest = index;
        for child in [left(index), right(index)] {
            if child < len && self.heap[child] < self.heap[smallest] {
                smallest = child;
            }
        }
        smallest
    }

    fn sift_down(&mut self, mut index: usize) {
        loop {
            let smallest = self.smallest_of_family(index);
            if smallest == index {
                break;
            }
            self.heap.swap(index, smallest);
            index = smallest;
        }
    }

    fn sift_down_recursive(&mut self, index: usize) {
        let smallest = self.smallest_of_family(index);
        if smallest != index {
            self.heap.swap(index, smallest);
            self.sift_down_recursive(smallest);
        }
    }
}

impl<T: Ord> Extend<T> for BinaryMinHeap<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.enqueue(element);
        }
    }
}

impl<T: Ord> FromIterator<T> for BinaryMinHeap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut heap = BinaryMinHeap::new();
        heap.extend(iter);
        heap
    }
}

impl DijkstraQueue for BinaryMinHeap<DijkstraQueueElement> {
    fn push(&mut self, element: DijkstraQueueElement) {
        self.enqueue(element);
    }

    fn pop(&mut self) -> Option<DijkstraQueueElement> {
        self.dequeue().ok()
    }

    fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    fn clear(&mut self) {
        self.heap.clear();
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};

    use super::{BinaryMinHeap, SiftStrategy};
    use crate::{
        error::Error,
        queue::{DijkstraQueue, DijkstraQueueElement},
    };

    fn drain<T: Ord>(heap: &mut BinaryMinHeap<T>) -> Vec<T> {
        let mut elements = Vec::new();
        while !heap.is_empty() {
            elements.push(heap.dequeue().unwrap());
        }
        elements
    }

    #[test]
    fn dequeues_in_ascending_order() {
        let mut heap: BinaryMinHeap<i32> = [5, 3, 8, 1].into_iter().collect();

        assert_eq!(heap.peek(), Some(&1));
        assert_eq!(drain(&mut heap), vec![1, 3, 5, 8]);
    }

    #[test]
    fn empty_dequeue_fails() {
        let mut heap = BinaryMinHeap::<i32>::new();
        assert!(matches!(heap.dequeue(), Err(Error::EmptyQueue)));

        heap.enqueue(7);
        assert_eq!(heap.dequeue().unwrap(), 7);
        assert!(matches!(heap.dequeue(), Err(Error::EmptyQueue)));
    }

    #[test]
    fn invariant_holds_after_every_operation() {
        let mut rng = StdRng::seed_from_u64(7);
        for strategy in [SiftStrategy::Iterative, SiftStrategy::Recursive] {
            let mut heap = BinaryMinHeap::<i32>::with_strategy(strategy);
            for _ in 0..2_000 {
                if heap.is_empty() || rng.gen_bool(0.6) {
                    heap.enqueue(rng.gen_range(0..100));
                } else {
                    heap.dequeue().unwrap();
                }
                assert!(heap.is_heap());
            }
        }
    }

    #[test]
    fn push_then_pop_sorts() {
        let mut rng = StdRng::seed_from_u64(42);
        for len in [0, 1, 2, 3, 10, 257] {
            let mut values: Vec<u32> = (0..len).map(|_| rng.gen_range(0..50)).collect();
            values.shuffle(&mut rng);

            let mut heap: BinaryMinHeap<u32> = values.iter().copied().collect();
            assert_eq!(heap.len(), values.len());

            values.sort();
            assert_eq!(drain(&mut heap), values);
        }
    }

    #[test]
    fn recursive_and_iterative_leave_identical_arrays() {
        let mut rng = StdRng::seed_from_u64(1234);
        let mut iterative = BinaryMinHeap::<i64>::with_strategy(SiftStrategy::Iterative);
        let mut recursive = BinaryMinHeap::<i64>::with_strategy(SiftStrategy::Recursive);

        for _ in 0..1_000 {
            if iterative.is_empty() || rng.gen_bool(0.55) {
                let value: i64 = rng.gen_range(-20..20);
                iterative.enqueue(value);
                recursive.enqueue(value);
            } else {
                assert_eq!(iterative.dequeue().unwrap(), recursive.dequeue().unwrap());
            }
            assert_eq!(iterative.as_slice(), recursive.as_slice());
        }
    }

    #[test]
    fn orders_queue_elements_by_distance() {
        let mut heap = BinaryMinHeap::<DijkstraQueueElement>::new();
        DijkstraQueue::push(&mut heap, DijkstraQueueElement::new(12, 5));
        DijkstraQueue::push(&mut heap, DijkstraQueueElement::new(3, 2));
        DijkstraQueue::push(&mut heap, DijkstraQueueElement::new(7, 4));
        DijkstraQueue::push(&mut heap, DijkstraQueueElement::new(3, 1));

        let vertices: Vec<_> = std::iter::from_fn(|| DijkstraQueue::pop(&mut heap))
            .map(|element| element.vertex)
            .collect();
        assert_eq!(vertices, vec![1, 2, 4, 5]);
        assert!(DijkstraQueue::is_empty(&heap));
    }
}
