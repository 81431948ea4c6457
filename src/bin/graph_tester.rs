use multigraph_sssp::graph::loader::load_graph;
use multigraph_sssp::graph::Graph;
use multigraph_sssp::{
    depth_first_order, topological_order, Dijkstra, Multigraph, ShortestPathAlgorithm, Strategy,
};
use serde::Serialize;
use std::env;
use std::process;

/// One row of the shortest path report
#[derive(Debug, Serialize)]
struct PathReport {
    vertex: String,
    distance: f64,
    path: Vec<String>,
}

fn usage() -> ! {
    eprintln!("usage: graph_tester <file> [source-label] [heap|linear] [--json]");
    process::exit(2);
}

fn print_graph(graph: &Multigraph<f64>) {
    let labels: Vec<&str> = graph.vertices().into_iter().map(|v| graph.label(v)).collect();
    println!("Vertices: [{}]", labels.join(", "));
    for v in graph.vertices() {
        let adjacent: Vec<&str> = graph.adjacent_to(v).into_iter().map(|w| graph.label(w)).collect();
        println!("{}: {}", graph.label(v), adjacent.join(" "));
    }
}

fn print_orders(graph: &Multigraph<f64>) {
    let dfs: Vec<&str> = depth_first_order(graph).into_iter().map(|v| graph.label(v)).collect();
    let topo: Vec<&str> = topological_order(graph).into_iter().map(|v| graph.label(v)).collect();
    println!("Depth-first finishing order: {}", dfs.join(" "));
    println!("Topological order: {}", topo.join(" "));
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::init();

    // Parse command line arguments
    let mut json = false;
    let mut positional = Vec::new();
    for arg in env::args().skip(1) {
        if arg == "--json" {
            json = true;
        } else {
            positional.push(arg);
        }
    }

    let Some(path) = positional.first() else {
        usage();
    };
    let strategy: Strategy = match positional.get(2) {
        Some(s) => s.parse()?,
        None => Strategy::Heap,
    };

    println!("Reading from file...");
    let graph = load_graph(path)?;

    let source_label = match positional.get(1) {
        Some(label) => label.clone(),
        None => match graph.vertices().first() {
            Some(&v) => graph.label(v).to_string(),
            None => {
                println!("Graph is empty.");
                return Ok(());
            }
        },
    };
    let source = graph.vertex_id(&source_label)?;

    if !json {
        print_graph(&graph);
        print_orders(&graph);
    }

    let dijkstra = Dijkstra::with_strategy(strategy);
    let algorithm: &dyn ShortestPathAlgorithm<f64, Multigraph<f64>> = &dijkstra;
    let result = algorithm.compute_shortest_paths(&graph, source)?;

    let mut report = Vec::with_capacity(graph.vertex_count());
    for w in graph.vertices() {
        let path = algorithm
            .get_path(&result, w)
            .unwrap_or_default()
            .into_iter()
            .map(|v| graph.label(v).to_string())
            .collect();
        report.push(PathReport {
            vertex: graph.label(w).to_string(),
            distance: result.distance(w).unwrap_or(f64::INFINITY),
            path,
        });
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!(
            "{} results from {}:",
            algorithm.name(),
            source_label
        );
        for row in &report {
            println!(
                "Shortest path to {}: {}: cost = {}",
                row.vertex,
                row.path.join(" "),
                row.distance
            );
        }
    }

    Ok(())
}
