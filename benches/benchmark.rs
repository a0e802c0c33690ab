// Performance benchmarks for graph construction and BFS queries
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use friendpath::{batch, Edge, SocialGraph};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn generate_edges(rng: &mut StdRng, vertices: usize, edges: usize) -> Vec<Edge> {
    (0..edges)
        .map(|_| Edge::new(rng.random_range(0..vertices), rng.random_range(0..vertices)))
        .collect()
}

fn benchmark_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");

    for size in [1_000, 10_000, 100_000].iter() {
        let mut rng = StdRng::seed_from_u64(1);
        let edges = generate_edges(&mut rng, *size, size * 4);
        group.bench_with_input(BenchmarkId::new("from_edges", size), size, |b, &size| {
            b.iter(|| {
                let graph = SocialGraph::from_edges(size, edges.iter().copied()).unwrap();
                black_box(graph);
            });
        });
    }

    group.finish();
}

fn benchmark_shortest_path(c: &mut Criterion) {
    let mut group = c.benchmark_group("shortest_path");

    let mut rng = StdRng::seed_from_u64(2);
    let size = 100_000;
    let graph = SocialGraph::from_edges(size, generate_edges(&mut rng, size, size * 4)).unwrap();

    group.bench_function("single_query", |b| {
        b.iter(|| {
            let outcome = graph.shortest_path(black_box(0), black_box(size - 1)).unwrap();
            black_box(outcome);
        });
    });

    group.bench_function("bfs_tree", |b| {
        b.iter(|| {
            let tree = graph.bfs_tree(black_box(0)).unwrap();
            black_box(tree);
        });
    });

    let queries: Vec<_> = (0..256)
        .map(|_| (rng.random_range(0..size), rng.random_range(0..size)))
        .collect();
    group.bench_function("batch_256", |b| {
        b.iter(|| {
            let results = batch::shortest_paths(&graph, black_box(&queries));
            black_box(results);
        });
    });

    group.finish();
}

criterion_group!(benches, benchmark_build, benchmark_shortest_path);
criterion_main!(benches);
