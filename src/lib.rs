//! pqueue - a generic max-priority queue
//!
//! This library provides [`BinaryHeapPriorityQueue`], an array-backed binary max-heap
//! that stores arbitrary values alongside a totally ordered priority. The entry with
//! the highest priority is always at the root, so inspection is O(1) while insertion
//! and extraction are O(log n).
//!
//! ```rust
//! use pqueue::BinaryHeapPriorityQueue;
//!
//! let mut queue = BinaryHeapPriorityQueue::new();
//! queue.push("task1", 3);
//! queue.push("task2", 1);
//! queue.push("task3", 4);
//!
//! assert_eq!(queue.pop(), Some(("task3", 4)));
//! assert_eq!(queue.pop(), Some(("task1", 3)));
//! assert_eq!(queue.pop(), Some(("task2", 1)));
//! assert_eq!(queue.pop(), None);
//! ```
//!
//! Floating point priorities do not implement [`Ord`]; wrap them in
//! [`FloatPriority`] (an [`OrderedFloat`]) to get a total order.

use std::collections::TryReserveError;

pub mod data_structures;

/// Re-export main types for convenient use
pub use data_structures::{BinaryHeapPriorityQueue, BinaryHeapWrapper, Entry, PriorityQueue};
pub use ordered_float::OrderedFloat;

/// Totally ordered `f64` priority
pub type FloatPriority = OrderedFloat<f64>;

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Failed to reserve capacity for {requested} additional entries: {source}")]
    CapacityOverflow {
        requested: usize,
        #[source]
        source: TryReserveError,
    },

    /// Reported by `BinaryHeapPriorityQueue::validate`. The public operations always
    /// restore heap order, so this only surfaces as a consistency diagnostic.
    #[error("Heap order violated: entry {child} outranks its parent {parent}")]
    HeapViolation { parent: usize, child: usize },
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
