//! Sorting and searching routines
//!
//! Plain in-place quicksort (Lomuto partition, last element as pivot),
//! top-down mergesort, and iterative binary search over a sorted slice.

use std::cmp::Ordering;

/// Sorts `items` in place with quicksort.
///
/// Not stable. O(n log n) on average, O(n²) on already sorted input.
pub fn quick_sort<T: Ord>(items: &mut [T]) {
    if items.len() <= 1 {
        return;
    }
    let pivot = partition(items);
    let (left, right) = items.split_at_mut(pivot);
    quick_sort(left);
    quick_sort(&mut right[1..]);
}

/// Lomuto partition around the last element; returns the pivot's final index.
fn partition<T: Ord>(items: &mut [T]) -> usize {
    let high = items.len() - 1;
    let mut store = 0;
    for j in 0..high {
        if items[j] <= items[high] {
            items.swap(store, j);
            store += 1;
        }
    }
    items.swap(store, high);
    store
}

/// Sorts `items` in place with mergesort.
///
/// Stable. O(n log n), with O(n) scratch space per merge level.
pub fn merge_sort<T: Ord + Clone>(items: &mut [T]) {
    if items.len() <= 1 {
        return;
    }
    let mid = items.len() / 2;
    merge_sort(&mut items[..mid]);
    merge_sort(&mut items[mid..]);

    let left = items[..mid].to_vec();
    let right = items[mid..].to_vec();
    let (mut i, mut j) = (0, 0);

    for slot in items.iter_mut() {
        // take from the left on ties to stay stable
        let take_left = j >= right.len() || (i < left.len() && left[i] <= right[j]);
        if take_left {
            *slot = left[i].clone();
            i += 1;
        } else {
            *slot = right[j].clone();
            j += 1;
        }
    }
}

/// Index of `target` in the ascending slice `items`, if present.
///
/// With duplicates, any matching index may be returned.
pub fn binary_search<T: Ord>(items: &[T], target: &T) -> Option<usize> {
    let mut low = 0;
    let mut high = items.len();

    while low < high {
        let mid = low + (high - low) / 2;
        match items[mid].cmp(target) {
            Ordering::Equal => return Some(mid),
            Ordering::Less => low = mid + 1,
            Ordering::Greater => high = mid,
        }
    }

    None
}
