use log::{debug, warn};

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::data_structures::{Entry, PriorityQueue};
use crate::{Error, Result};

/// Array-backed binary max-heap of values ordered by priority
///
/// The entry with the highest priority always sits at index 0. For every other
/// index `i`, the entry at the parent index `(i - 1) / 2` has a priority greater
/// than or equal to the entry at `i`.
///
/// Supported operations:
/// - `push`: append then sift up, amortized O(log n)
/// - `pop`: move the last entry to the root then sift down, O(log n)
/// - `peek`, `len`, `is_empty`: O(1)
///
/// Entries with equal priorities come out in an unspecified order, but each
/// pushed entry is popped exactly once.
#[derive(Debug, Clone)]
pub struct BinaryHeapPriorityQueue<T, P> {
    /// Heap-ordered storage
    entries: Vec<Entry<T, P>>,
}

impl<T, P> BinaryHeapPriorityQueue<T, P> {
    /// Creates a new empty priority queue
    pub fn new() -> Self {
        BinaryHeapPriorityQueue {
            entries: Vec::new(),
        }
    }

    /// Creates an empty priority queue with room for `capacity` entries
    pub fn with_capacity(capacity: usize) -> Self {
        BinaryHeapPriorityQueue {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Returns the number of entries in the queue
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the queue holds no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of entries the queue can hold without reallocating
    pub fn capacity(&self) -> usize {
        self.entries.capacity()
    }

    /// Reserves room for at least `additional` more entries
    pub fn reserve(&mut self, additional: usize) {
        self.entries.reserve(additional);
    }

    /// Fallible counterpart of [`reserve`](Self::reserve)
    pub fn try_reserve(&mut self, additional: usize) -> Result<()> {
        let len = self.entries.len();
        self.entries.try_reserve(additional).map_err(|source| {
            warn!(
                "Could not reserve {} additional entries on a queue of {}: {}",
                additional, len, source
            );
            Error::CapacityOverflow {
                requested: additional,
                source,
            }
        })
    }

    /// Drops spare capacity
    pub fn shrink_to_fit(&mut self) {
        self.entries.shrink_to_fit();
    }

    /// Returns the entry with the highest priority without removing it
    pub fn peek(&self) -> Option<(&T, &P)> {
        self.entries.first().map(Entry::as_pair)
    }

    /// Iterates over all entries in storage order, which is not priority order
    pub fn iter(&self) -> impl Iterator<Item = (&T, &P)> + '_ {
        self.entries.iter().map(Entry::as_pair)
    }

    /// Removes all entries
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Removes all entries, yielding them in storage order
    pub fn drain(&mut self) -> impl Iterator<Item = (T, P)> + '_ {
        self.entries.drain(..).map(Entry::into_pair)
    }

    /// Consumes the queue, returning its entries in storage order
    pub fn into_vec(self) -> Vec<(T, P)> {
        self.entries.into_iter().map(Entry::into_pair).collect()
    }
}

impl<T, P> BinaryHeapPriorityQueue<T, P>
where
    P: Ord,
{
    /// Builds a queue from unordered pairs in O(n)
    pub fn from_vec(pairs: Vec<(T, P)>) -> Self {
        Self::from_entries(pairs.into_iter().map(Entry::from).collect())
    }

    fn from_entries(entries: Vec<Entry<T, P>>) -> Self {
        let mut queue = BinaryHeapPriorityQueue { entries };
        queue.heapify();
        queue
    }

    /// Pushes a value with the given priority
    pub fn push(&mut self, value: T, priority: P) {
        self.entries.push(Entry::new(value, priority));
        self.sift_up(self.entries.len() - 1);
    }

    /// Like [`push`](Self::push), but reports allocation failure instead of aborting
    pub fn try_push(&mut self, value: T, priority: P) -> Result<()> {
        self.try_reserve(1)?;
        self.push(value, priority);
        Ok(())
    }

    /// Removes the entry with the highest priority
    pub fn pop(&mut self) -> Option<(T, P)> {
        if self.entries.is_empty() {
            return None;
        }

        // swap_remove moves the last entry into the root slot
        let root = self.entries.swap_remove(0);
        if !self.entries.is_empty() {
            self.sift_down(0);
        }

        Some(root.into_pair())
    }

    /// Pops the highest-priority entry as `(value, priority, found)`
    ///
    /// An empty queue yields default values with `found == false`.
    pub fn pop_or_default(&mut self) -> (T, P, bool)
    where
        T: Default,
        P: Default,
    {
        match self.pop() {
            Some((value, priority)) => (value, priority, true),
            None => (T::default(), P::default(), false),
        }
    }

    /// Copies out the highest-priority entry as `(value, priority, found)`
    ///
    /// An empty queue yields default values with `found == false`.
    pub fn peek_or_default(&self) -> (T, P, bool)
    where
        T: Clone + Default,
        P: Clone + Default,
    {
        match self.peek() {
            Some((value, priority)) => (value.clone(), priority.clone(), true),
            None => (T::default(), P::default(), false),
        }
    }

    /// Consumes the queue, returning its entries highest priority first
    pub fn into_sorted_vec(mut self) -> Vec<(T, P)> {
        debug!("Draining {} entries in priority order", self.entries.len());
        let mut sorted = Vec::with_capacity(self.entries.len());
        while let Some(pair) = self.pop() {
            sorted.push(pair);
        }
        sorted
    }

    /// Checks the max-heap invariant, reporting the first offending pair
    pub fn validate(&self) -> Result<()> {
        for child in 1..self.entries.len() {
            let parent = (child - 1) / 2;
            if self.entries[child].priority > self.entries[parent].priority {
                return Err(Error::HeapViolation { parent, child });
            }
        }
        Ok(())
    }

    /// Returns true if every parent's priority is at least its children's
    pub fn is_heap_ordered(&self) -> bool {
        self.validate().is_ok()
    }

    /// Moves the entry at `index` toward the root while it outranks its parent
    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.entries[index].priority <= self.entries[parent].priority {
                break;
            }
            self.entries.swap(index, parent);
            index = parent;
        }
    }

    /// Moves the entry at `index` toward the leaves while a child outranks it
    fn sift_down(&mut self, mut index: usize) {
        let len = self.entries.len();
        loop {
            let left = 2 * index + 1;
            if left >= len {
                break;
            }

            let right = left + 1;
            let mut largest = left;
            if right < len && self.entries[right].priority > self.entries[left].priority {
                largest = right;
            }

            if self.entries[largest].priority <= self.entries[index].priority {
                break;
            }
            self.entries.swap(index, largest);
            index = largest;
        }
    }

    /// Restores the invariant over arbitrary storage, bottom-up
    fn heapify(&mut self) {
        let len = self.entries.len();
        debug!("Heapifying {} entries", len);
        for index in (0..len / 2).rev() {
            self.sift_down(index);
        }
    }
}

impl<T, P> Default for BinaryHeapPriorityQueue<T, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, P: Ord> From<Vec<(T, P)>> for BinaryHeapPriorityQueue<T, P> {
    fn from(pairs: Vec<(T, P)>) -> Self {
        Self::from_vec(pairs)
    }
}

impl<T, P: Ord> FromIterator<(T, P)> for BinaryHeapPriorityQueue<T, P> {
    fn from_iter<I: IntoIterator<Item = (T, P)>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl<T, P: Ord> Extend<(T, P)> for BinaryHeapPriorityQueue<T, P> {
    fn extend<I: IntoIterator<Item = (T, P)>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.reserve(iter.size_hint().0);
        for (value, priority) in iter {
            self.push(value, priority);
        }
    }
}

impl<T, P: Ord> PriorityQueue<T, P> for BinaryHeapPriorityQueue<T, P> {
    fn push(&mut self, value: T, priority: P) {
        BinaryHeapPriorityQueue::push(self, value, priority)
    }

    fn pop(&mut self) -> Option<(T, P)> {
        BinaryHeapPriorityQueue::pop(self)
    }

    fn peek(&self) -> Option<(&T, &P)> {
        BinaryHeapPriorityQueue::peek(self)
    }

    fn len(&self) -> usize {
        BinaryHeapPriorityQueue::len(self)
    }

    fn name(&self) -> &'static str {
        "BinaryHeapPriorityQueue"
    }
}

#[cfg(feature = "serde")]
impl<T, P> Serialize for BinaryHeapPriorityQueue<T, P>
where
    T: Serialize,
    P: Serialize,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.entries.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, T, P> Deserialize<'de> for BinaryHeapPriorityQueue<T, P>
where
    T: Deserialize<'de>,
    P: Deserialize<'de> + Ord,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let entries = Vec::<Entry<T, P>>::deserialize(deserializer)?;
        Ok(Self::from_entries(entries))
    }
}
