use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use multigraph_sssp::data_structures::IndexedPriorityQueue;
use multigraph_sssp::graph::generators::generate_random_multigraph;
use multigraph_sssp::{shortest_paths, Strategy};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn bench_strategies(c: &mut Criterion) {
    let mut group = c.benchmark_group("dijkstra");
    let mut rng = StdRng::seed_from_u64(7);

    for size in [100usize, 400, 1_000] {
        let graph = generate_random_multigraph(&mut rng, size, size * 4);
        for strategy in [Strategy::Heap, Strategy::Linear] {
            group.bench_with_input(BenchmarkId::new(strategy.to_string(), size), &graph, |b, g| {
                b.iter(|| shortest_paths::<f64, _>(black_box(g), "v0", strategy))
            });
        }
    }

    group.finish();
}

fn bench_arbitrary_removal(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(11);
    let values: Vec<u64> = (0..10_000).map(|_| rng.gen()).collect();

    c.bench_function("remove every other handle", |b| {
        b.iter(|| {
            let (mut queue, handles) = IndexedPriorityQueue::from_collection(values.iter().copied());
            for handle in handles.into_iter().step_by(2) {
                let _ = queue.remove(handle);
            }
            while let Some(v) = queue.poll() {
                black_box(v);
            }
        })
    });
}

criterion_group!(benches, bench_strategies, bench_arbitrary_removal);
criterion_main!(benches);
