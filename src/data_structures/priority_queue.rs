use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt::Debug;

/// A min-priority queue that pops equal priorities in insertion order
///
/// Duplicate entries for the same vertex are allowed; callers skip stale ones.
#[derive(Debug)]
pub struct StablePriorityQueue<V, P>
where
    V: Copy + Eq + Debug + Ord,
    P: Copy + Debug + Ord,
{
    /// The underlying binary heap, keyed on (priority, insertion sequence)
    heap: BinaryHeap<Reverse<(P, u64, V)>>,

    /// Next insertion sequence number
    sequence: u64,
}

impl<V, P> StablePriorityQueue<V, P>
where
    V: Copy + Eq + Debug + Ord,
    P: Copy + Debug + Ord,
{
    /// Creates a new empty priority queue
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        StablePriorityQueue {
            heap: BinaryHeap::with_capacity(capacity),
            sequence: 0,
        }
    }

    /// Returns true if the priority queue is empty
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the number of elements in the priority queue
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Pushes an element with the given priority into the priority queue
    pub fn push(&mut self, vertex: V, priority: P) {
        self.heap.push(Reverse((priority, self.sequence, vertex)));
        self.sequence += 1;
    }

    /// Removes the element with the lowest priority, oldest first on ties
    pub fn pop(&mut self) -> Option<(V, P)> {
        self.heap
            .pop()
            .map(|Reverse((priority, _, vertex))| (vertex, priority))
    }

    /// Returns the next element to be popped without removing it
    pub fn peek(&self) -> Option<(V, P)> {
        self.heap
            .peek()
            .map(|Reverse((priority, _, vertex))| (*vertex, *priority))
    }

    /// Clears the priority queue
    pub fn clear(&mut self) {
        self.heap.clear();
        self.sequence = 0;
    }
}

impl<V, P> Default for StablePriorityQueue<V, P>
where
    V: Copy + Eq + Debug + Ord,
    P: Copy + Debug + Ord,
{
    fn default() -> Self {
        Self::new()
    }
}
