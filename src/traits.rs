//! Common traits and error types
//!
//! - [`PriorityQueue`]: the min-priority queue interface used by the graph
//!   searches. [`BinaryHeap`](crate::binary_heap::BinaryHeap) is the provided
//!   implementation.
//! - [`Cost`]: the bound on edge weights and path lengths.
//! - [`GraphError`]: returned by the fail-fast shortest-path entry points.
//!
//! There is no `decrease_key`. Callers that need to lower a priority push a
//! fresh entry and skip the stale one when it surfaces, which is how
//! [`dijkstra`](crate::pathfinding::dijkstra) works.

use std::ops::Add;
use thiserror::Error;

/// Error type for shortest-path searches that validate their input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GraphError {
    /// An edge carries a weight below zero, which Dijkstra cannot handle
    #[error("edge between vertex #{from} and vertex #{to} has a negative weight")]
    NegativeWeight {
        /// Insertion index of one endpoint
        from: usize,
        /// Insertion index of the other endpoint
        to: usize,
    },
}

/// Trait for types that can be used as edge weights and path costs.
///
/// This requires the type to be orderable, copyable, and support addition.
/// `Default` must produce the additive identity (zero). For floating point
/// weights, wrap them in a totally ordered newtype.
pub trait Cost: Ord + Copy + Add<Output = Self> + Default {}

impl<T> Cost for T where T: Ord + Copy + Add<Output = Self> + Default {}

/// Min-priority queue over (priority, item) pairs
///
/// Unlike `std::collections::BinaryHeap`, which stores values directly and
/// pops the maximum, implementors keep the ordering key separate from the
/// payload and always extract the minimum.
///
/// # Example
///
/// ```rust
/// use classic_structures::PriorityQueue;
/// use classic_structures::binary_heap::BinaryHeap;
///
/// let mut queue = BinaryHeap::new();
/// queue.insert(10, "a");
/// queue.insert(5, "b");
///
/// assert_eq!(queue.peek(), Some((&5, &"b")));
/// assert_eq!(queue.extract_min(), Some((5, "b")));
/// ```
pub trait PriorityQueue<T, P: Ord> {
    /// Creates a new empty queue
    fn new() -> Self;

    /// Returns true if the queue holds no entries
    ///
    /// # Time Complexity
    /// O(1)
    fn is_empty(&self) -> bool;

    /// Returns the number of entries in the queue
    fn len(&self) -> usize;

    /// Adds an entry with the given priority
    ///
    /// # Time Complexity
    /// O(log n)
    fn insert(&mut self, priority: P, item: T);

    /// Returns the entry with the lowest priority without removing it
    fn peek(&self) -> Option<(&P, &T)>;

    /// Removes and returns the entry with the lowest priority
    ///
    /// Entries with equal priorities come out in no particular order.
    ///
    /// # Time Complexity
    /// O(log n)
    fn extract_min(&mut self) -> Option<(P, T)>;
}
