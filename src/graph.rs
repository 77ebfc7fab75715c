//! Weighted undirected graph
//!
//! Vertices are arbitrary hashable tokens. Internally each vertex is interned
//! to a dense index in insertion order, and adjacency lists are stored by index,
//! so the traversals and the shortest-path search work on plain `usize`s and
//! only clone vertex tokens when building their results.
//!
//! Edges are undirected: `add_edge(u, v, w)` records `(v, w)` in u's list and
//! `(u, w)` in v's list. Parallel edges and self-loops are kept as separate
//! entries. There is no removal.
//!
//! # Example
//!
//! ```rust
//! use classic_structures::graph::Graph;
//!
//! let mut graph = Graph::new();
//! graph.add_edge("A", "B", 10);
//! graph.add_edge("A", "C", 15);
//! graph.add_edge("B", "C", 5);
//!
//! assert_eq!(graph.bfs(&"A"), vec!["A", "B", "C"]);
//! assert_eq!(graph.dfs(&"A"), vec!["A", "B", "C"]);
//!
//! let distances = graph.dijkstra(&"A");
//! assert_eq!(distances[&"A"], 0);
//! assert_eq!(distances[&"B"], 10);
//! assert_eq!(distances[&"C"], 15);
//! ```

use crate::pathfinding::{self, DijkstraBuilder};
use crate::traits::{Cost, GraphError};
use rustc_hash::{FxHashMap, FxHashSet};
use smallvec::SmallVec;
use std::collections::VecDeque;
use std::hash::Hash;

/// Dense index assigned to a vertex when it is first seen.
pub type VertexIndex = usize;

type Adjacency<W> = SmallVec<[(VertexIndex, W); 4]>;

/// An undirected graph with weighted edges
#[derive(Debug, Clone)]
pub struct Graph<V, W> {
    /// Vertex tokens by index
    vertices: Vec<V>,
    /// Maps vertex token to its index
    index: FxHashMap<V, VertexIndex>,
    /// (neighbor, weight) pairs by vertex index, in insertion order
    adjacency: Vec<Adjacency<W>>,
    /// Number of `add_edge` calls
    edge_count: usize,
}

impl<V, W> Graph<V, W>
where
    V: Clone + Eq + Hash,
    W: Copy,
{
    /// Creates an empty graph
    pub fn new() -> Self {
        Graph {
            vertices: Vec::new(),
            index: FxHashMap::default(),
            adjacency: Vec::new(),
            edge_count: 0,
        }
    }

    /// Adds `vertex` if it is not already present.
    pub fn add_vertex(&mut self, vertex: V) {
        self.intern(vertex);
    }

    /// Adds an undirected edge, registering both endpoints.
    ///
    /// Repeated calls add parallel entries rather than updating the weight.
    pub fn add_edge(&mut self, u: V, v: V, weight: W) {
        let u = self.intern(u);
        let v = self.intern(v);
        self.adjacency[u].push((v, weight));
        self.adjacency[v].push((u, weight));
        self.edge_count += 1;
    }

    fn intern(&mut self, vertex: V) -> VertexIndex {
        if let Some(&index) = self.index.get(&vertex) {
            return index;
        }
        let index = self.vertices.len();
        self.index.insert(vertex.clone(), index);
        self.vertices.push(vertex);
        self.adjacency.push(SmallVec::new());
        index
    }

    /// Number of vertices
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of edges added, counting parallel edges and self-loops once each
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Returns true if the graph has no vertices
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns true if `vertex` has been added, directly or through an edge
    pub fn contains_vertex(&self, vertex: &V) -> bool {
        self.index.contains_key(vertex)
    }

    /// Vertices in the order they were first added
    pub fn vertices(&self) -> impl Iterator<Item = &V> + '_ {
        self.vertices.iter()
    }

    /// Insertion index of `vertex`, as used in [`GraphError`] values
    pub fn index_of(&self, vertex: &V) -> Option<VertexIndex> {
        self.index.get(vertex).copied()
    }

    /// The vertex with the given insertion index
    pub fn vertex(&self, index: VertexIndex) -> Option<&V> {
        self.vertices.get(index)
    }

    /// (neighbor, weight) pairs of `vertex` in insertion order.
    ///
    /// Empty for an unknown vertex.
    pub fn neighbors<'a>(&'a self, vertex: &V) -> impl Iterator<Item = (&'a V, W)> + 'a {
        self.index_of(vertex).into_iter().flat_map(move |u| {
            self.adjacency[u]
                .iter()
                .map(move |&(v, weight)| (&self.vertices[v], weight))
        })
    }

    pub(crate) fn vertex_at(&self, index: VertexIndex) -> &V {
        &self.vertices[index]
    }

    pub(crate) fn edges_of(&self, index: VertexIndex) -> &[(VertexIndex, W)] {
        &self.adjacency[index]
    }

    /// Vertices in breadth-first order from `start`.
    ///
    /// A vertex is marked visited when it is enqueued, so none is queued
    /// twice. An unknown `start` yields just `[start]`.
    pub fn bfs(&self, start: &V) -> Vec<V> {
        let Some(source) = self.index_of(start) else {
            return vec![start.clone()];
        };

        let mut visited = vec![false; self.vertices.len()];
        let mut queue = VecDeque::new();
        let mut order = Vec::new();

        visited[source] = true;
        queue.push_back(source);

        while let Some(u) = queue.pop_front() {
            order.push(self.vertices[u].clone());
            for &(v, _) in &self.adjacency[u] {
                if !visited[v] {
                    visited[v] = true;
                    queue.push_back(v);
                }
            }
        }

        order
    }

    /// Vertices in depth-first order from `start`.
    ///
    /// Descends into each unvisited neighbor, in adjacency insertion order,
    /// before moving on to the next one.
    pub fn dfs(&self, start: &V) -> Vec<V> {
        let mut visited = FxHashSet::default();
        self.dfs_with_visited(start, &mut visited)
    }

    /// Depth-first traversal sharing a caller-owned visited set.
    ///
    /// Every vertex emitted is added to `visited`, and vertices already in it
    /// are not descended into, so repeated calls over different start vertices
    /// never emit a vertex twice. `start` itself is always emitted.
    pub fn dfs_with_visited(&self, start: &V, visited: &mut FxHashSet<V>) -> Vec<V> {
        visited.insert(start.clone());
        let mut order = vec![start.clone()];

        let Some(source) = self.index_of(start) else {
            return order;
        };

        // (vertex, position of the next neighbor to look at)
        let mut stack: Vec<(VertexIndex, usize)> = vec![(source, 0)];

        while let Some(frame) = stack.last_mut() {
            let (u, next) = *frame;
            frame.1 += 1;

            match self.adjacency[u].get(next) {
                Some(&(v, _)) => {
                    let vertex = &self.vertices[v];
                    if !visited.contains(vertex) {
                        visited.insert(vertex.clone());
                        order.push(vertex.clone());
                        stack.push((v, 0));
                    }
                }
                None => {
                    stack.pop();
                }
            }
        }

        order
    }

    /// Connected components, each in depth-first order.
    ///
    /// Components are listed in the insertion order of their first vertex.
    pub fn connected_components(&self) -> Vec<Vec<V>> {
        let mut visited = FxHashSet::default();
        let mut components = Vec::new();
        for vertex in &self.vertices {
            if !visited.contains(vertex) {
                components.push(self.dfs_with_visited(vertex, &mut visited));
            }
        }
        components
    }
}

impl<V, W> Graph<V, W>
where
    V: Clone + Eq + Hash,
    W: Cost,
{
    /// Shortest distances from `start` to every reachable vertex.
    ///
    /// Unreachable vertices are absent from the map. Weights must be
    /// non-negative; this is not checked (see [`try_dijkstra`](Self::try_dijkstra)).
    pub fn dijkstra(&self, start: &V) -> FxHashMap<V, W> {
        pathfinding::dijkstra(self, start)
    }

    /// Like [`dijkstra`](Self::dijkstra), but fails if any edge weight is negative.
    pub fn try_dijkstra(&self, start: &V) -> Result<FxHashMap<V, W>, GraphError> {
        pathfinding::try_dijkstra(self, start)
    }

    /// Cheapest path from `start` to `goal` and its total weight.
    pub fn shortest_path(&self, start: &V, goal: &V) -> Option<(Vec<V>, W)> {
        pathfinding::shortest_path(self, start, goal)
    }

    /// Vertices whose distance from `start` is at most `max_cost`, nearest first.
    pub fn reachable_within(&self, start: &V, max_cost: W) -> Vec<(V, W)> {
        pathfinding::reachable_within(self, start, max_cost)
    }

    /// Configurable shortest-path search from `start`.
    pub fn dijkstra_from(&self, start: V) -> DijkstraBuilder<'_, V, W> {
        DijkstraBuilder::new(self, start)
    }

    /// First edge (by vertex then insertion order) with a weight below zero.
    pub(crate) fn find_negative_edge(&self) -> Option<(VertexIndex, VertexIndex)> {
        let zero = W::default();
        self.adjacency.iter().enumerate().find_map(|(u, edges)| {
            edges
                .iter()
                .find(|&&(_, weight)| weight < zero)
                .map(|&(v, _)| (u, v))
        })
    }
}

impl<V, W> Default for Graph<V, W>
where
    V: Clone + Eq + Hash,
    W: Copy,
{
    fn default() -> Self {
        Self::new()
    }
}
