use std::time::{Duration, Instant};
use rand::rngs::StdRng;
use rand::SeedableRng;
use multigraph_sssp::algorithm::{ShortestPathAlgorithm, Strategy};
use multigraph_sssp::graph::generators::generate_random_multigraph;
use multigraph_sssp::graph::{Graph, Multigraph};
use multigraph_sssp::Dijkstra;

// Function to benchmark an algorithm on a graph
fn benchmark_strategy(strategy: Strategy, graph: &Multigraph<f64>) -> Duration {
    let dijkstra = Dijkstra::with_strategy(strategy);
    let algorithm: &dyn ShortestPathAlgorithm<f64, Multigraph<f64>> = &dijkstra;
    println!("Running {} on graph with {} vertices...", algorithm.name(), graph.vertex_count());

    let source = graph.vertices()[0];
    let start = Instant::now();
    let outcome = algorithm.compute_shortest_paths(graph, source);
    let duration = start.elapsed();

    match outcome {
        Ok(result) => println!("  - Settled {} vertices in {:?}", result.distances.len(), duration),
        Err(e) => println!("  - Failed after {:?}: {}", duration, e),
    }

    duration
}

fn main() {
    env_logger::init();

    // Linear rescan is quadratic, keep the sizes modest
    let graph_sizes = vec![100, 500, 1_000, 2_000, 5_000];

    // Edge factor: average number of edges per vertex
    let edge_factor = 4;

    println!("=====================================================");
    println!("Benchmark: heap frontier vs linear rescan");
    println!("Edge factor: {} edges per vertex (on average)", edge_factor);
    println!("=====================================================");

    let mut rng = StdRng::seed_from_u64(42);
    let mut results = Vec::new();

    for &size in &graph_sizes {
        let graph = generate_random_multigraph(&mut rng, size, size * edge_factor);
        println!("\nGraph has {} vertices and {} edges", graph.vertex_count(), graph.edge_count());

        let heap_time = benchmark_strategy(Strategy::Heap, &graph);
        let linear_time = benchmark_strategy(Strategy::Linear, &graph);
        results.push((size, heap_time, linear_time));

        let speedup = linear_time.as_secs_f64() / heap_time.as_secs_f64();
        println!("Speedup - heap vs linear: {:.2}x", speedup);
    }

    // Print summary table
    println!("\n=====================================================");
    println!("Summary of Results");
    println!("=====================================================");
    println!("{:<10} | {:<15} | {:<15} | {:<10}", "Vertices", "Heap (ms)", "Linear (ms)", "SpeedUp");
    println!("-----------------------------------------------------");

    for (size, heap_time, linear_time) in &results {
        let speedup = linear_time.as_secs_f64() / heap_time.as_secs_f64();
        println!(
            "{:<10} | {:<15} | {:<15} | {:<10.2}",
            size,
            heap_time.as_millis(),
            linear_time.as_millis(),
            speedup
        );
    }
}
