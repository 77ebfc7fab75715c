//! Criterion benchmarks for the tree, the heap and the graph searches
//!
//! ## Running
//!
//! ```bash
//! cargo bench --bench structures
//!
//! # only the shortest-path group
//! cargo bench --bench structures -- dijkstra
//! ```

use classic_structures::avl::AvlTree;
use classic_structures::binary_heap::BinaryHeap;
use classic_structures::graph::Graph;
use classic_structures::PriorityQueue;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

/// Linear congruential generator for reproducible random numbers
struct Lcg {
    state: u64,
}

impl Lcg {
    fn new(seed: u64) -> Self {
        Lcg { state: seed }
    }

    fn next(&mut self) -> u64 {
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        self.state >> 16
    }

    fn next_range(&mut self, min: u32, max: u32) -> u32 {
        let range = (max - min) as u64;
        if range == 0 {
            return min;
        }
        min + (self.next() % range) as u32
    }
}

/// Sparse random graph: a spanning path plus `extra` random edges per vertex
fn synthetic_graph(num_vertices: u32, extra: u32, seed: u64) -> Graph<u32, u64> {
    let mut rng = Lcg::new(seed);
    let mut graph = Graph::new();
    for v in 1..num_vertices {
        graph.add_edge(v - 1, v, rng.next_range(1, 100) as u64);
    }
    for v in 0..num_vertices {
        for _ in 0..extra {
            let u = rng.next_range(0, num_vertices);
            graph.add_edge(v, u, rng.next_range(1, 1000) as u64);
        }
    }
    graph
}

fn benchmark_avl_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("avl_insert");

    for &n in &[1_000u32, 10_000, 100_000] {
        let mut rng = Lcg::new(42);
        let random: Vec<u32> = (0..n).map(|_| rng.next() as u32).collect();

        group.bench_with_input(BenchmarkId::new("ascending", n), &n, |b, &n| {
            b.iter(|| {
                let mut tree = AvlTree::new();
                for k in 0..n {
                    tree.insert(k, k);
                }
                black_box(tree.height())
            });
        });

        group.bench_with_input(BenchmarkId::new("random", n), &random, |b, keys| {
            b.iter(|| {
                let mut tree = AvlTree::new();
                for &k in keys {
                    tree.insert(k, ());
                }
                black_box(tree.len())
            });
        });
    }

    group.finish();
}

fn benchmark_avl_search(c: &mut Criterion) {
    let tree: AvlTree<u32, u32> = (0..100_000).map(|k| (k * 2, k)).collect();
    let mut rng = Lcg::new(7);
    let probes: Vec<u32> = (0..1_000).map(|_| rng.next_range(0, 200_000)).collect();

    c.bench_function("avl_search_100k", |b| {
        b.iter(|| {
            probes
                .iter()
                .filter(|&&p| tree.search(&p).is_some())
                .count()
        });
    });
}

fn benchmark_heap(c: &mut Criterion) {
    let mut group = c.benchmark_group("binary_heap");

    for &n in &[1_000u32, 100_000] {
        let mut rng = Lcg::new(99);
        let priorities: Vec<u32> = (0..n).map(|_| rng.next() as u32).collect();

        group.bench_with_input(
            BenchmarkId::new("insert_then_drain", n),
            &priorities,
            |b, ps| {
                b.iter(|| {
                    let mut heap = BinaryHeap::with_capacity(ps.len());
                    for (i, &p) in ps.iter().enumerate() {
                        heap.insert(p, i);
                    }
                    let mut last = 0;
                    while let Some((p, _)) = heap.extract_min() {
                        last = p;
                    }
                    black_box(last)
                });
            },
        );
    }

    group.finish();
}

fn benchmark_graph(c: &mut Criterion) {
    let mut group = c.benchmark_group("dijkstra");
    group.sample_size(20);

    for &n in &[1_000u32, 10_000] {
        let graph = synthetic_graph(n, 3, 12345);

        group.bench_with_input(BenchmarkId::new("all_distances", n), &graph, |b, g| {
            b.iter(|| black_box(g.dijkstra(&0).len()));
        });

        group.bench_with_input(BenchmarkId::new("bfs", n), &graph, |b, g| {
            b.iter(|| black_box(g.bfs(&0).len()));
        });

        group.bench_with_input(BenchmarkId::new("dfs", n), &graph, |b, g| {
            b.iter(|| black_box(g.dfs(&0).len()));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_avl_insert,
    benchmark_avl_search,
    benchmark_heap,
    benchmark_graph,
);

criterion_main!(benches);
