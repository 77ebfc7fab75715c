//! Binary min-heap
//!
//! An array-backed binary heap implementing [`PriorityQueue`]. Children of
//! index `i` live at `2i + 1` and `2i + 2`.
//!
//! # Time Complexity
//!
//! | Operation     | Complexity |
//! |---------------|------------|
//! | `insert`      | O(log n)   |
//! | `extract_min` | O(log n)   |
//! | `peek`        | O(1)       |
//! | `is_empty`    | O(1)       |
//!
//! # Example
//!
//! ```rust
//! use classic_structures::PriorityQueue;
//! use classic_structures::binary_heap::BinaryHeap;
//!
//! let mut heap = BinaryHeap::new();
//! heap.insert(10, "a");
//! heap.insert(5, "b");
//! heap.insert(30, "c");
//!
//! assert_eq!(heap.extract_min(), Some((5, "b")));
//! assert_eq!(heap.extract_min(), Some((10, "a")));
//! assert_eq!(heap.extract_min(), Some((30, "c")));
//! assert_eq!(heap.extract_min(), None);
//! ```

use crate::traits::PriorityQueue;

/// A binary min-heap of (priority, item) pairs
///
/// Not stable: entries with equal priorities are extracted in whatever order
/// the sift operations leave them.
#[derive(Debug, Clone)]
pub struct BinaryHeap<T, P: Ord> {
    /// Heap-ordered (priority, item) pairs
    data: Vec<(P, T)>,
    /// Number of live entries
    size: usize,
}

impl<T, P: Ord> PriorityQueue<T, P> for BinaryHeap<T, P> {
    fn new() -> Self {
        Self {
            data: Vec::new(),
            size: 0,
        }
    }

    fn is_empty(&self) -> bool {
        self.size == 0
    }

    fn len(&self) -> usize {
        self.size
    }

    fn insert(&mut self, priority: P, item: T) {
        self.data.push((priority, item));
        self.size += 1;
        self.sift_up(self.data.len() - 1);
    }

    fn peek(&self) -> Option<(&P, &T)> {
        self.data.first().map(|(p, t)| (p, t))
    }

    fn extract_min(&mut self) -> Option<(P, T)> {
        if self.size == 0 {
            return None;
        }

        let last_idx = self.data.len() - 1;
        self.data.swap(0, last_idx);
        let result = self.data.pop();
        self.size -= 1;

        if !self.data.is_empty() {
            self.sift_down(0);
        }

        result
    }
}

impl<T, P: Ord> BinaryHeap<T, P> {
    /// Creates an empty heap with room for `capacity` entries
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            size: 0,
        }
    }

    /// Removes every entry
    pub fn clear(&mut self) {
        self.data.clear();
        self.size = 0;
    }

    /// Checks that every parent's priority is <= its children's.
    pub fn verify_heap_property(&self) -> bool {
        if self.size != self.data.len() {
            return false;
        }
        (1..self.data.len()).all(|i| self.data[(i - 1) / 2].0 <= self.data[i].0)
    }

    /// Swaps the entry at `pos` with its parent until the parent is no larger.
    fn sift_up(&mut self, mut pos: usize) {
        while pos > 0 {
            let parent = (pos - 1) / 2;
            if self.data[parent].0 <= self.data[pos].0 {
                return;
            }
            self.data.swap(pos, parent);
            pos = parent;
        }
    }

    /// Swaps the entry at `pos` with its smaller child until neither child is
    /// smaller.
    fn sift_down(&mut self, mut pos: usize) {
        let end = self.data.len();
        while 2 * pos + 1 < end {
            let first = 2 * pos + 1;
            let child = match first + 1 {
                second if second < end && self.data[second].0 < self.data[first].0 => second,
                _ => first,
            };
            if self.data[pos].0 <= self.data[child].0 {
                return;
            }
            self.data.swap(pos, child);
            pos = child;
        }
    }
}

impl<T, P: Ord> Default for BinaryHeap<T, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, P: Ord> Extend<(P, T)> for BinaryHeap<T, P> {
    fn extend<I: IntoIterator<Item = (P, T)>>(&mut self, iter: I) {
        for (priority, item) in iter {
            self.insert(priority, item);
        }
    }
}

impl<T, P: Ord> FromIterator<(P, T)> for BinaryHeap<T, P> {
    fn from_iter<I: IntoIterator<Item = (P, T)>>(iter: I) -> Self {
        let mut heap = Self::new();
        heap.extend(iter);
        heap
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_operations() {
        let mut heap = BinaryHeap::new();

        assert!(heap.is_empty());
        assert_eq!(heap.len(), 0);

        heap.insert(10, "a");
        heap.insert(5, "b");
        heap.insert(30, "c");

        assert!(!heap.is_empty());
        assert_eq!(heap.len(), 3);
        assert_eq!(heap.peek(), Some((&5, &"b")));

        assert_eq!(heap.extract_min(), Some((5, "b")));
        assert_eq!(heap.extract_min(), Some((10, "a")));
        assert_eq!(heap.extract_min(), Some((30, "c")));
        assert_eq!(heap.extract_min(), None);
        assert!(heap.is_empty());
    }

    #[test]
    fn test_extract_from_empty_keeps_count() {
        let mut heap: BinaryHeap<&str, i32> = BinaryHeap::new();
        assert_eq!(heap.extract_min(), None);
        assert_eq!(heap.len(), 0);

        heap.insert(1, "x");
        assert_eq!(heap.len(), 1);
    }

    #[test]
    fn test_duplicate_priorities() {
        let mut heap = BinaryHeap::new();

        heap.insert(1, "a");
        heap.insert(1, "b");
        heap.insert(1, "c");

        assert_eq!(heap.len(), 3);

        let mut items: Vec<_> = std::iter::from_fn(|| heap.extract_min())
            .map(|(p, item)| {
                assert_eq!(p, 1);
                item
            })
            .collect();
        items.sort_unstable();
        assert_eq!(items, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_ascending_insertion() {
        let mut heap = BinaryHeap::new();

        for i in 0..100 {
            heap.insert(i, i);
        }

        for i in 0..100 {
            assert_eq!(heap.extract_min(), Some((i, i)));
        }
    }

    #[test]
    fn test_descending_insertion() {
        let mut heap = BinaryHeap::new();

        for i in (0..100).rev() {
            heap.insert(i, i);
            assert!(heap.verify_heap_property());
        }

        for i in 0..100 {
            assert_eq!(heap.extract_min(), Some((i, i)));
            assert!(heap.verify_heap_property());
        }
    }

    #[test]
    fn test_clear_and_collect() {
        let mut heap: BinaryHeap<char, u32> = [(3, 'c'), (1, 'a'), (2, 'b')].into_iter().collect();
        assert_eq!(heap.len(), 3);
        assert_eq!(heap.peek(), Some((&1, &'a')));

        heap.clear();
        assert!(heap.is_empty());
        assert_eq!(heap.peek(), None);
    }

    #[test]
    fn test_sift_down_picks_smaller_right_child() {
        // root 1 with children 5 (left) and 2 (right)
        let mut heap: BinaryHeap<char, u32> = [(1, 'r'), (5, 'l'), (2, 'm')].into_iter().collect();
        heap.insert(7, 'x');
        heap.insert(3, 'y');
        assert!(heap.verify_heap_property());

        assert_eq!(heap.extract_min(), Some((1, 'r')));
        assert!(heap.verify_heap_property());
        assert_eq!(heap.peek(), Some((&2, &'m')));

        let rest: Vec<u32> = std::iter::from_fn(|| heap.extract_min())
            .map(|(p, _)| p)
            .collect();
        assert_eq!(rest, vec![2, 3, 5, 7]);
    }
}
