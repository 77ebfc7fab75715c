//! Classic data structures and algorithms for Rust
//!
//! This crate provides small, self-contained implementations of the textbook
//! structures an inventory or logistics layer typically leans on.
//!
//! # Features
//!
//! - **AVL Tree** ([`avl::AvlTree`]): ordered key→value map with O(log n) insert and search,
//!   kept height-balanced with single and double rotations
//! - **Binary Heap** ([`binary_heap::BinaryHeap`]): min-priority queue with O(log n) insert and
//!   extract-min, behind the [`PriorityQueue`] trait
//! - **Weighted Graph** ([`graph::Graph`]): undirected adjacency-list graph with breadth-first and
//!   depth-first traversal
//! - **Shortest Paths** ([`pathfinding`]): Dijkstra with lazy deletion of stale queue entries,
//!   path reconstruction, and cost or size limits
//! - **Sorting** ([`sorting`]): quicksort, mergesort and binary search
//!
//! None of the structures are synchronized; share them behind a lock if you
//! need to.
//!
//! # Example
//!
//! ```rust
//! use classic_structures::avl::AvlTree;
//! use classic_structures::binary_heap::BinaryHeap;
//! use classic_structures::graph::Graph;
//! use classic_structures::PriorityQueue;
//!
//! let mut stock = AvlTree::new();
//! stock.insert("bolts", 120);
//! stock.insert("nuts", 80);
//! assert_eq!(stock.search("nuts"), Some(&80));
//!
//! let mut urgent = BinaryHeap::new();
//! urgent.insert(3, "restock nuts");
//! urgent.insert(1, "restock bolts");
//! assert_eq!(urgent.extract_min(), Some((1, "restock bolts")));
//!
//! let mut sites = Graph::new();
//! sites.add_edge("depot", "north", 12u32);
//! sites.add_edge("depot", "south", 7);
//! sites.add_edge("south", "north", 3);
//! assert_eq!(sites.dijkstra(&"depot")[&"north"], 10);
//! ```

pub mod avl;
pub mod binary_heap;
pub mod graph;
pub mod pathfinding;
pub mod sorting;
pub mod traits;

// Re-export the main traits and errors for convenience
pub use traits::{Cost, GraphError, PriorityQueue};
