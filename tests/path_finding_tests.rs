use multigraph_sssp::algorithm::traits::ShortestPathAlgorithm;
use multigraph_sssp::graph::generators::{generate_grid, generate_random_multigraph};
use multigraph_sssp::graph::{Graph, Multigraph};
use multigraph_sssp::{shortest_paths, Dijkstra, Error, ShortestPathResult, Strategy};
use rand::rngs::StdRng;
use rand::SeedableRng;

const STRATEGIES: [Strategy; 2] = [Strategy::Heap, Strategy::Linear];

// Test helper function to create the three vertex triangle
fn create_triangle() -> Multigraph<f64> {
    Multigraph::from_triples(vec![("1", "2", 1.0), ("2", "3", 2.0), ("1", "3", 5.0)])
}

fn distance_of(graph: &Multigraph<f64>, result: &ShortestPathResult<f64>, label: &str) -> f64 {
    result.distance(graph.vertex_id(label).unwrap()).unwrap()
}

fn predecessor_of(graph: &Multigraph<f64>, result: &ShortestPathResult<f64>, label: &str) -> Option<String> {
    result
        .predecessor(graph.vertex_id(label).unwrap())
        .map(|v| graph.label(v).to_string())
}

#[test]
fn test_triangle_under_both_strategies() {
    let graph = create_triangle();

    for strategy in STRATEGIES {
        let result: ShortestPathResult<f64> = shortest_paths(&graph, "1", strategy).unwrap();
        assert_eq!(distance_of(&graph, &result, "1"), 0.0);
        assert_eq!(distance_of(&graph, &result, "2"), 1.0);
        assert_eq!(distance_of(&graph, &result, "3"), 3.0);
        assert_eq!(predecessor_of(&graph, &result, "3").as_deref(), Some("2"));
        assert_eq!(predecessor_of(&graph, &result, "1"), None);
    }
}

#[test]
fn test_unreachable_vertex_fails_whole_query() {
    let mut graph: Multigraph<f64> = Multigraph::new();
    graph.add_vertex("1");
    graph.add_vertex("2");

    for strategy in STRATEGIES {
        let outcome: multigraph_sssp::Result<ShortestPathResult<f64>> = shortest_paths(&graph, "1", strategy);
        assert!(matches!(outcome, Err(Error::Unreachable { vertex }) if vertex == "2"));
    }
}

#[test]
fn test_unreachable_tail_discards_reachable_prefix() {
    let graph = Multigraph::from_triples(vec![("a", "b", 1.0), ("c", "a", 1.0)]);
    let outcome: multigraph_sssp::Result<ShortestPathResult<f64>> = shortest_paths(&graph, "a", Strategy::Heap);
    assert!(matches!(outcome, Err(Error::Unreachable { .. })));
}

#[test]
fn test_parallel_edges_use_lightest() {
    let graph = Multigraph::from_triples(vec![
        ("s", "t", 9.0),
        ("s", "t", 2.0),
        ("s", "t", 4.0),
        ("t", "u", 1.0),
    ]);

    for strategy in STRATEGIES {
        let result: ShortestPathResult<f64> = shortest_paths(&graph, "s", strategy).unwrap();
        assert_eq!(distance_of(&graph, &result, "t"), 2.0);
        assert_eq!(distance_of(&graph, &result, "u"), 3.0);
    }
}

#[test]
fn test_unknown_source_is_reported() {
    let graph = create_triangle();
    let outcome: multigraph_sssp::Result<ShortestPathResult<f64>> = shortest_paths(&graph, "9", Strategy::Heap);
    assert!(matches!(outcome, Err(Error::VertexNotFound(label)) if label == "9"));
}

#[test]
fn test_negative_weight_is_rejected() {
    let graph = Multigraph::from_triples(vec![("a", "b", 1.0), ("b", "c", -2.0)]);
    let outcome: multigraph_sssp::Result<ShortestPathResult<f64>> = shortest_paths(&graph, "a", Strategy::Linear);
    assert!(matches!(outcome, Err(Error::NegativeWeight { edge: 2, .. })));
}

#[test]
fn test_self_loop_and_zero_weights() {
    let graph = Multigraph::from_triples(vec![("a", "a", 0.0), ("a", "b", 0.0), ("b", "c", 0.0)]);
    for strategy in STRATEGIES {
        let result: ShortestPathResult<f64> = shortest_paths(&graph, "a", strategy).unwrap();
        assert_eq!(distance_of(&graph, &result, "c"), 0.0);
        assert_eq!(predecessor_of(&graph, &result, "a"), None);
    }
}

// Test that paths can be found in a simple grid
#[test]
fn test_path_finding_simple_grid() {
    let graph = generate_grid(10, 10);
    let source = graph.vertex_id("v0").unwrap();
    let target = graph.vertex_id("v99").unwrap();

    for strategy in STRATEGIES {
        let dijkstra = Dijkstra::with_strategy(strategy);
        let result = <Dijkstra as ShortestPathAlgorithm<f64, Multigraph<f64>>>::compute_shortest_paths(
            &dijkstra, &graph, source,
        )
        .unwrap();

        // Manhattan distance with unit steps
        assert_eq!(result.distance(target), Some(18.0));

        let path = <Dijkstra as ShortestPathAlgorithm<f64, Multigraph<f64>>>::get_path(&dijkstra, &result, target)
            .expect("grid path should exist");
        assert_eq!(path[0], source, "Path should start at source");
        assert_eq!(path[path.len() - 1], target, "Path should end at target");
        assert_eq!(path.len(), 19);

        // Verify path continuity
        for i in 1..path.len() {
            assert!(graph.has_edge(path[i - 1], path[i]), "Path should only use existing edges");
        }
    }
}

#[test]
fn test_strategies_agree_on_random_multigraphs() {
    let mut rng = StdRng::seed_from_u64(99);

    for round in 0..25 {
        let n = 2 + round * 3;
        let graph = generate_random_multigraph(&mut rng, n, n * 3);

        let heap: ShortestPathResult<f64> = shortest_paths(&graph, "v0", Strategy::Heap).unwrap();
        let linear: ShortestPathResult<f64> = shortest_paths(&graph, "v0", Strategy::Linear).unwrap();

        assert_eq!(heap.distances, linear.distances, "round {}", round);
        assert_eq!(heap.predecessors, linear.predecessors, "round {}", round);

        // Every tree edge is tight
        for v in graph.vertices() {
            if let Some(p) = heap.predecessor(v) {
                let weight = multigraph_sssp::graph::smallest_edge_weight(graph.get_edges(p, v));
                assert_eq!(heap.distances[p.index()] + weight, heap.distances[v.index()]);
            }
        }
    }
}
