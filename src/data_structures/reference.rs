use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::data_structures::PriorityQueue;

/// A wrapper around the standard library's BinaryHeap exposing the same
/// max-priority contract as [`BinaryHeapPriorityQueue`](crate::BinaryHeapPriorityQueue)
///
/// Values never take part in comparisons, so `T` needs no ordering of its own.
#[derive(Debug, Clone)]
pub struct BinaryHeapWrapper<T, P>
where
    P: Ord,
{
    /// The underlying binary heap
    heap: BinaryHeap<Prioritized<T, P>>,
}

/// Heap slot ordered by priority alone
#[derive(Debug, Clone)]
struct Prioritized<T, P> {
    priority: P,
    value: T,
}

impl<T, P: Ord> PartialEq for Prioritized<T, P> {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority
    }
}

impl<T, P: Ord> Eq for Prioritized<T, P> {}

impl<T, P: Ord> PartialOrd for Prioritized<T, P> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T, P: Ord> Ord for Prioritized<T, P> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority.cmp(&other.priority)
    }
}

impl<T, P> BinaryHeapWrapper<T, P>
where
    P: Ord,
{
    /// Creates a new empty priority queue
    pub fn new() -> Self {
        BinaryHeapWrapper {
            heap: BinaryHeap::new(),
        }
    }

    /// Creates an empty priority queue with room for `capacity` entries
    pub fn with_capacity(capacity: usize) -> Self {
        BinaryHeapWrapper {
            heap: BinaryHeap::with_capacity(capacity),
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
    pub fn push(&mut self, value: T, priority: P) {
        self.heap.push(Prioritized { priority, value });
    }

    /// Removes the element with the highest priority
    pub fn pop(&mut self) -> Option<(T, P)> {
        self.heap
            .pop()
            .map(|Prioritized { priority, value }| (value, priority))
    }

    /// Returns the element with the highest priority without removing it
    pub fn peek(&self) -> Option<(&T, &P)> {
        self.heap.peek().map(|slot| (&slot.value, &slot.priority))
    }

    /// Clears the priority queue
    pub fn clear(&mut self) {
        self.heap.clear();
    }
}

impl<T, P: Ord> Default for BinaryHeapWrapper<T, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, P: Ord> PriorityQueue<T, P> for BinaryHeapWrapper<T, P> {
    fn push(&mut self, value: T, priority: P) {
        BinaryHeapWrapper::push(self, value, priority)
    }

    fn pop(&mut self) -> Option<(T, P)> {
        BinaryHeapWrapper::pop(self)
    }

    fn peek(&self) -> Option<(&T, &P)> {
        BinaryHeapWrapper::peek(self)
    }

    fn len(&self) -> usize {
        BinaryHeapWrapper::len(self)
    }

    fn name(&self) -> &'static str {
        "std BinaryHeap"
    }
}
