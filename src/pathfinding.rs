//! Dijkstra's single-source shortest paths over a [`Graph`]
//!
//! # Design
//!
//! Only vertex indices go into the priority queue, keyed by tentative
//! distance. The queue has no `decrease_key`, so an improved distance is
//! pushed as a new entry and the old one is left behind; when a stale entry
//! (one whose distance is worse than the best recorded) is popped, it is
//! skipped.
//!
//! The search is generic over any [`PriorityQueue`] and uses
//! [`BinaryHeap`] unless told otherwise.
//!
//! Weights must be non-negative. The plain entry points do not check; the
//! `try_` variants and [`DijkstraBuilder::validate_weights`] scan the graph
//! first and return [`GraphError::NegativeWeight`].
//!
//! # Example
//!
//! ```rust
//! use classic_structures::graph::Graph;
//! use classic_structures::pathfinding::shortest_path;
//!
//! let mut graph = Graph::new();
//! graph.add_edge('a', 'b', 4u32);
//! graph.add_edge('b', 'c', 1);
//! graph.add_edge('a', 'c', 7);
//!
//! let (path, cost) = shortest_path(&graph, &'a', &'c').unwrap();
//! assert_eq!(path, vec!['a', 'b', 'c']);
//! assert_eq!(cost, 5);
//! ```

use crate::binary_heap::BinaryHeap;
use crate::graph::{Graph, VertexIndex};
use crate::traits::{Cost, GraphError, PriorityQueue};
use rustc_hash::FxHashMap;
use std::hash::Hash;
use tracing::{debug, warn};

/// Distances from `start` to every reachable vertex.
///
/// Unreachable vertices are omitted. An unknown `start` yields `{start: 0}`.
///
/// # Panics
///
/// Path costs are summed with `W`'s own `+`, so a path whose total does not
/// fit in `W` overflows (a panic in debug builds).
pub fn dijkstra<V, W>(graph: &Graph<V, W>, start: &V) -> FxHashMap<V, W>
where
    V: Clone + Eq + Hash,
    W: Cost,
{
    DijkstraBuilder::new(graph, start.clone())
        .search::<BinaryHeap<VertexIndex, W>>()
        .into_distances()
}

/// [`dijkstra`] with a caller-chosen priority queue implementation.
pub fn dijkstra_with<V, W, H>(graph: &Graph<V, W>, start: &V) -> FxHashMap<V, W>
where
    V: Clone + Eq + Hash,
    W: Cost,
    H: PriorityQueue<VertexIndex, W>,
{
    DijkstraBuilder::new(graph, start.clone())
        .search::<H>()
        .into_distances()
}

/// [`dijkstra`] that first rejects graphs containing a negative weight.
pub fn try_dijkstra<V, W>(graph: &Graph<V, W>, start: &V) -> Result<FxHashMap<V, W>, GraphError>
where
    V: Clone + Eq + Hash,
    W: Cost,
{
    DijkstraBuilder::new(graph, start.clone())
        .validate_weights(true)
        .run()
        .map(ShortestPaths::into_distances)
}

/// Cheapest path from `start` to `goal` (both inclusive) with its cost.
///
/// Returns `None` if `goal` cannot be reached. The search stops as soon as
/// `goal` is settled.
pub fn shortest_path<V, W>(graph: &Graph<V, W>, start: &V, goal: &V) -> Option<(Vec<V>, W)>
where
    V: Clone + Eq + Hash,
    W: Cost,
{
    let paths = DijkstraBuilder::new(graph, start.clone())
        .goal(goal.clone())
        .search::<BinaryHeap<VertexIndex, W>>();
    let cost = paths.distance(goal)?;
    let path = paths.path_to(goal)?;
    Some((path, cost))
}

/// All vertices within `max_cost` of `start`, in order of distance.
///
/// This is useful for "what's nearby" queries.
pub fn reachable_within<V, W>(graph: &Graph<V, W>, start: &V, max_cost: W) -> Vec<(V, W)>
where
    V: Clone + Eq + Hash,
    W: Cost,
{
    DijkstraBuilder::new(graph, start.clone())
        .max_cost(max_cost)
        .search::<BinaryHeap<VertexIndex, W>>()
        .iter()
        .map(|(vertex, cost)| (vertex.clone(), cost))
        .collect()
}

/// Builder for shortest-path queries with more configuration options.
///
/// ```rust
/// use classic_structures::graph::Graph;
///
/// let mut graph = Graph::new();
/// graph.add_edge(1, 2, 3u64);
/// graph.add_edge(2, 3, 3);
/// graph.add_edge(3, 4, 3);
///
/// let paths = graph.dijkstra_from(1).max_cost(6).run().unwrap();
/// assert_eq!(paths.distance(&3), Some(6));
/// assert_eq!(paths.distance(&4), None);
/// ```
pub struct DijkstraBuilder<'g, V, W> {
    graph: &'g Graph<V, W>,
    start: V,
    goal: Option<V>,
    max_cost: Option<W>,
    max_vertices: Option<usize>,
    validate_weights: bool,
}

impl<'g, V, W> DijkstraBuilder<'g, V, W>
where
    V: Clone + Eq + Hash,
    W: Cost,
{
    /// Creates a builder searching `graph` from `start`.
    pub fn new(graph: &'g Graph<V, W>, start: V) -> Self {
        DijkstraBuilder {
            graph,
            start,
            goal: None,
            max_cost: None,
            max_vertices: None,
            validate_weights: false,
        }
    }

    /// Stops once `goal` has been settled.
    pub fn goal(mut self, goal: V) -> Self {
        self.goal = Some(goal);
        self
    }

    /// Ignores vertices farther than `cost` from the start.
    ///
    /// A negative `cost` excludes the start vertex too, leaving the result
    /// empty. An unknown start is still reported at distance zero.
    pub fn max_cost(mut self, cost: W) -> Self {
        self.max_cost = Some(cost);
        self
    }

    /// Stops after settling `count` vertices. With a count of zero nothing is
    /// settled, not even the start.
    pub fn max_vertices(mut self, count: usize) -> Self {
        self.max_vertices = Some(count);
        self
    }

    /// Rejects graphs with negative weights before searching.
    pub fn validate_weights(mut self, validate: bool) -> Self {
        self.validate_weights = validate;
        self
    }

    /// Runs the search with [`BinaryHeap`].
    ///
    /// # Panics
    ///
    /// Overflows if a path cost exceeds what `W` can hold, as [`dijkstra`]
    /// does.
    pub fn run(self) -> Result<ShortestPaths<'g, V, W>, GraphError> {
        self.run_with::<BinaryHeap<VertexIndex, W>>()
    }

    /// Runs the search with the given priority queue implementation.
    pub fn run_with<H>(self) -> Result<ShortestPaths<'g, V, W>, GraphError>
    where
        H: PriorityQueue<VertexIndex, W>,
    {
        if self.validate_weights {
            if let Some((from, to)) = self.graph.find_negative_edge() {
                warn!(from, to, "negative edge weight rejected");
                return Err(GraphError::NegativeWeight { from, to });
            }
        }
        Ok(self.search::<H>())
    }

    /// The search proper, without weight validation.
    pub(crate) fn search<H>(self) -> ShortestPaths<'g, V, W>
    where
        H: PriorityQueue<VertexIndex, W>,
    {
        let graph = self.graph;
        let n = graph.vertex_count();
        let mut dist: Vec<Option<W>> = vec![None; n];
        let mut came_from: Vec<Option<VertexIndex>> = vec![None; n];
        let mut settled = Vec::new();

        let Some(source) = graph.index_of(&self.start) else {
            debug!("dijkstra start vertex is not in the graph");
            return ShortestPaths {
                graph,
                start: self.start,
                source: None,
                dist,
                came_from,
                settled,
            };
        };
        let goal = self.goal.as_ref().and_then(|g| graph.index_of(g));

        let mut heap = H::new();
        let mut stale = 0usize;
        if self.max_cost.map_or(true, |max| W::default() <= max) {
            dist[source] = Some(W::default());
            heap.insert(W::default(), source);
        }

        while let Some((current_dist, u)) = heap.extract_min() {
            if dist[u].is_some_and(|best| current_dist > best) {
                stale += 1;
                continue;
            }

            if let Some(max) = self.max_vertices {
                if settled.len() >= max {
                    break;
                }
            }
            settled.push((u, current_dist));

            if goal == Some(u) {
                break;
            }

            for &(v, weight) in graph.edges_of(u) {
                let candidate = current_dist + weight;

                if let Some(max) = self.max_cost {
                    if candidate > max {
                        continue;
                    }
                }

                if dist[v].map_or(true, |best| candidate < best) {
                    dist[v] = Some(candidate);
                    came_from[v] = Some(u);
                    heap.insert(candidate, v);
                }
            }
        }

        debug!(
            settled = settled.len(),
            stale,
            remaining = heap.len(),
            "dijkstra finished"
        );

        // Only settled distances are final.
        let mut final_dist = vec![None; n];
        for &(u, d) in &settled {
            final_dist[u] = Some(d);
        }

        ShortestPaths {
            graph,
            start: self.start,
            source: Some(source),
            dist: final_dist,
            came_from,
            settled,
        }
    }
}

/// Result of a shortest-path search.
#[derive(Debug, Clone)]
pub struct ShortestPaths<'g, V, W> {
    graph: &'g Graph<V, W>,
    start: V,
    /// Index of `start`, or `None` if it is not in the graph
    source: Option<VertexIndex>,
    /// Final distance per vertex index, `None` if not settled
    dist: Vec<Option<W>>,
    /// Predecessor on the best known path
    came_from: Vec<Option<VertexIndex>>,
    /// Settled vertices in order of distance
    settled: Vec<(VertexIndex, W)>,
}

impl<'g, V, W> ShortestPaths<'g, V, W>
where
    V: Clone + Eq + Hash,
    W: Cost,
{
    /// The start vertex of the search
    pub fn start(&self) -> &V {
        &self.start
    }

    /// Number of vertices with a final distance
    pub fn len(&self) -> usize {
        if self.source.is_none() {
            1
        } else {
            self.settled.len()
        }
    }

    /// True when no vertex was settled, which only happens when a limit
    /// excluded the start itself.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Shortest distance to `vertex`, or `None` if it was not reached.
    pub fn distance(&self, vertex: &V) -> Option<W> {
        if self.source.is_none() {
            return (*vertex == self.start).then(W::default);
        }
        self.dist[self.graph.index_of(vertex)?]
    }

    /// Vertices along the shortest path from the start to `vertex`, inclusive.
    pub fn path_to(&self, vertex: &V) -> Option<Vec<V>> {
        if self.source.is_none() {
            return (*vertex == self.start).then(|| vec![self.start.clone()]);
        }

        let mut current = self.graph.index_of(vertex)?;
        self.dist[current]?;

        let mut path = Vec::new();
        // bounded so a predecessor cycle left by negative weights cannot spin
        while path.len() <= self.dist.len() {
            path.push(self.graph.vertex_at(current).clone());
            match self.came_from[current] {
                Some(prev) if Some(current) != self.source => current = prev,
                _ => break,
            }
        }

        path.reverse();
        Some(path)
    }

    /// (vertex, distance) pairs in the order they were settled.
    pub fn iter(&self) -> impl Iterator<Item = (&V, W)> + '_ {
        let lone = self
            .source
            .is_none()
            .then(|| (&self.start, W::default()));
        lone.into_iter().chain(
            self.settled
                .iter()
                .map(move |&(u, d)| (self.graph.vertex_at(u), d)),
        )
    }

    /// Distance map keyed by vertex.
    pub fn into_distances(self) -> FxHashMap<V, W> {
        self.iter()
            .map(|(vertex, cost)| (vertex.clone(), cost))
            .collect()
    }
}
