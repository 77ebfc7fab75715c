//! AVL tree
//!
//! An ordered key→value map kept height-balanced: for every node the heights
//! of its two subtrees differ by at most one, which bounds the tree height by
//! roughly 1.44 log₂ n.
//!
//! Each child is uniquely owned by its parent (`Option<Box<Node>>`), so the
//! tree never needs reference counting or interior mutability. Insertion is
//! the classic recursive descent followed by bottom-up repair with at most one
//! single or double rotation per level.
//!
//! There is no removal operation.
//!
//! # Time Complexity
//!
//! | Operation            | Complexity |
//! |----------------------|------------|
//! | `insert`             | O(log n)   |
//! | `search`             | O(log n)   |
//! | `in_order_traversal` | O(n)       |
//!
//! # Example
//!
//! ```rust
//! use classic_structures::avl::AvlTree;
//!
//! let mut tree = AvlTree::new();
//! for key in [50, 30, 70, 20, 40] {
//!     tree.insert(key, key * 10);
//! }
//!
//! assert_eq!(tree.search(&40), Some(&400));
//! assert_eq!(tree.search(&45), None);
//!
//! let keys: Vec<_> = tree.keys().copied().collect();
//! assert_eq!(keys, vec![20, 30, 40, 50, 70]);
//! ```

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;
use tracing::trace;

type Link<K, V> = Option<Box<Node<K, V>>>;

#[derive(Clone)]
struct Node<K, V> {
    key: K,
    value: V,
    left: Link<K, V>,
    right: Link<K, V>,
    /// 1 for a leaf
    height: usize,
}

/// Which way an insert went at a given node, reported back to the parent.
///
/// When the parent turns out to be unbalanced, the step taken at the heavy
/// child is exactly the comparison between the inserted key and that child's
/// key, which selects between the single and double rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Created,
    Overwrote,
    Left,
    Right,
}

impl<K, V> Node<K, V> {
    fn leaf(key: K, value: V) -> Self {
        Node {
            key,
            value,
            left: None,
            right: None,
            height: 1,
        }
    }

    fn update_height(&mut self) {
        self.height = 1 + height(&self.left).max(height(&self.right));
    }

    /// height(left) - height(right)
    fn balance(&self) -> isize {
        height(&self.left) as isize - height(&self.right) as isize
    }
}

fn height<K, V>(link: &Link<K, V>) -> usize {
    link.as_ref().map_or(0, |node| node.height)
}

fn rotate_right<K, V>(mut y: Box<Node<K, V>>) -> Box<Node<K, V>> {
    let Some(mut x) = y.left.take() else {
        return y;
    };
    y.left = x.right.take();
    y.update_height();
    x.right = Some(y);
    x.update_height();
    trace!(height = x.height, "avl rotate right");
    x
}

fn rotate_left<K, V>(mut x: Box<Node<K, V>>) -> Box<Node<K, V>> {
    let Some(mut y) = x.right.take() else {
        return x;
    };
    x.right = y.left.take();
    x.update_height();
    y.left = Some(x);
    y.update_height();
    trace!(height = y.height, "avl rotate left");
    y
}

/// Inserts below `link` and returns the (possibly new) subtree root.
fn insert_at<K: Ord, V>(
    link: Link<K, V>,
    key: K,
    value: V,
    previous: &mut Option<V>,
) -> (Box<Node<K, V>>, Step) {
    let Some(mut node) = link else {
        return (Box::new(Node::leaf(key, value)), Step::Created);
    };

    let (here, below) = match key.cmp(&node.key) {
        Ordering::Less => {
            let (child, below) = insert_at(node.left.take(), key, value, previous);
            node.left = Some(child);
            (Step::Left, below)
        }
        Ordering::Greater => {
            let (child, below) = insert_at(node.right.take(), key, value, previous);
            node.right = Some(child);
            (Step::Right, below)
        }
        Ordering::Equal => {
            *previous = Some(std::mem::replace(&mut node.value, value));
            return (node, Step::Overwrote);
        }
    };

    // Shape is untouched on overwrite, so nothing above needs repair.
    if below == Step::Overwrote {
        return (node, Step::Overwrote);
    }

    node.update_height();
    let balance = node.balance();

    if balance > 1 {
        if below == Step::Right {
            node.left = node.left.take().map(rotate_left);
        }
        return (rotate_right(node), here);
    }
    if balance < -1 {
        if below == Step::Left {
            node.right = node.right.take().map(rotate_right);
        }
        return (rotate_left(node), here);
    }

    (node, here)
}

/// A height-balanced binary search tree map
#[derive(Clone)]
pub struct AvlTree<K, V> {
    root: Link<K, V>,
    len: usize,
}

impl<K: Ord, V> AvlTree<K, V> {
    /// Creates an empty tree
    pub fn new() -> Self {
        AvlTree { root: None, len: 0 }
    }

    /// Returns the number of keys stored
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the tree holds no keys
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Height of the tree; 0 when empty, 1 for a single node
    pub fn height(&self) -> usize {
        height(&self.root)
    }

    /// Inserts a key/value pair, or overwrites the value of an existing key.
    ///
    /// Returns the value previously stored under `key`, if any. Overwriting
    /// never changes the shape of the tree.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let mut previous = None;
        let (root, _) = insert_at(self.root.take(), key, value, &mut previous);
        self.root = Some(root);
        if previous.is_none() {
            self.len += 1;
        }
        previous
    }

    /// Returns the value stored under `key`, or `None` if it is absent.
    pub fn search<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            match key.cmp(node.key.borrow()) {
                Ordering::Less => current = node.left.as_deref(),
                Ordering::Greater => current = node.right.as_deref(),
                Ordering::Equal => return Some(&node.value),
            }
        }
        None
    }

    /// Mutable access to the value under `key`.
    pub fn search_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut current = self.root.as_deref_mut();
        while let Some(node) = current {
            match key.cmp(node.key.borrow()) {
                Ordering::Less => current = node.left.as_deref_mut(),
                Ordering::Greater => current = node.right.as_deref_mut(),
                Ordering::Equal => return Some(&mut node.value),
            }
        }
        None
    }

    /// Returns true if `key` is present
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.search(key).is_some()
    }

    /// Iterates over (key, value) pairs in ascending key order.
    ///
    /// Each call starts a fresh traversal.
    pub fn in_order_traversal(&self) -> InOrder<'_, K, V> {
        let mut iter = InOrder {
            stack: Vec::with_capacity(self.height()),
            remaining: self.len,
        };
        iter.push_left_spine(self.root.as_deref());
        iter
    }

    /// Keys in ascending order
    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.in_order_traversal().map(|(k, _)| k)
    }

    /// Checks the AVL balance invariant, the cached heights, strict key
    /// ordering, and the stored length against the actual node count.
    pub fn verify_invariants(&self) -> bool {
        fn checked_height<K: Ord, V>(
            node: Option<&Node<K, V>>,
            lower: Option<&K>,
            upper: Option<&K>,
            count: &mut usize,
        ) -> Option<usize> {
            let Some(node) = node else {
                return Some(0);
            };
            if lower.is_some_and(|low| node.key <= *low) || upper.is_some_and(|up| node.key >= *up)
            {
                return None;
            }
            *count += 1;
            let left = checked_height(node.left.as_deref(), lower, Some(&node.key), count)?;
            let right = checked_height(node.right.as_deref(), Some(&node.key), upper, count)?;
            if left.abs_diff(right) > 1 || node.height != 1 + left.max(right) {
                return None;
            }
            Some(node.height)
        }

        let mut count = 0;
        checked_height(self.root.as_deref(), None, None, &mut count).is_some()
            && count == self.len
    }
}

impl<K: Ord, V> Default for AvlTree<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord + fmt::Debug, V: fmt::Debug> fmt::Debug for AvlTree<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.in_order_traversal()).finish()
    }
}

impl<K: Ord, V> Extend<(K, V)> for AvlTree<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for AvlTree<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<'a, K: Ord, V> IntoIterator for &'a AvlTree<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = InOrder<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.in_order_traversal()
    }
}

/// In-order iterator over an [`AvlTree`], driven by an explicit stack.
pub struct InOrder<'a, K, V> {
    stack: Vec<&'a Node<K, V>>,
    remaining: usize,
}

impl<'a, K, V> InOrder<'a, K, V> {
    fn push_left_spine(&mut self, mut node: Option<&'a Node<K, V>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left.as_deref();
        }
    }
}

impl<'a, K, V> Iterator for InOrder<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        self.remaining = self.remaining.saturating_sub(1);
        Some((&node.key, &node.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for InOrder<'_, K, V> {}
