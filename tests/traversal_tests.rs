use multigraph_sssp::graph::generators::generate_layered_dag;
use multigraph_sssp::graph::{Graph, Multigraph};
use multigraph_sssp::{depth_first_order, topological_order, VertexId};
use std::collections::HashSet;

fn labels(graph: &Multigraph<f64>, ids: Vec<VertexId>) -> Vec<String> {
    ids.into_iter().map(|v| graph.label(v).to_string()).collect()
}

#[test]
fn test_topological_order_skips_isolated_cycle() {
    let graph = Multigraph::from_triples(vec![
        ("1", "2", 1.0),
        ("2", "3", 1.0),
        ("4", "5", 1.0),
        ("5", "4", 1.0),
    ]);

    assert_eq!(labels(&graph, graph.zero_in_degree()), vec!["1"]);
    assert_eq!(labels(&graph, topological_order(&graph)), vec!["1", "2", "3"]);
}

#[test]
fn test_depth_first_visits_every_vertex_once() {
    let mut graph: Multigraph<f64> = Multigraph::new();
    graph.add_vertex("z");
    graph.add_edge("b", "a", 1.0);

    let order = labels(&graph, depth_first_order(&graph));
    assert_eq!(order.len(), 3);
    let unique: HashSet<&String> = order.iter().collect();
    assert_eq!(unique.len(), 3);
    // a finishes before b, the lone vertex forms its own tree
    assert_eq!(order, vec!["a", "b", "z"]);
}

#[test]
fn test_depth_first_is_post_order() {
    let graph = Multigraph::from_triples(vec![
        ("a", "b", 1.0),
        ("a", "c", 1.0),
        ("b", "d", 1.0),
        ("c", "d", 1.0),
        ("d", "a", 1.0),
    ]);
    assert_eq!(labels(&graph, depth_first_order(&graph)), vec!["d", "b", "c", "a"]);
}

#[test]
fn test_runs_do_not_share_state() {
    let graph = Multigraph::from_triples(vec![("x", "y", 1.0), ("y", "z", 1.0)]);
    let first = depth_first_order(&graph);
    let second = depth_first_order(&graph);
    assert_eq!(first, second);
    assert_eq!(topological_order(&graph), topological_order(&graph));
}

#[test]
fn test_topological_order_respects_edges() {
    let graph = generate_layered_dag(5, 4);
    let order = topological_order(&graph);
    assert_eq!(order.len(), graph.vertex_count());

    let mut position = vec![0; graph.vertex_count()];
    for (i, v) in order.iter().enumerate() {
        position[v.index()] = i;
    }
    for v in graph.vertices() {
        for edge in graph.outgoing_edges(v) {
            assert!(position[edge.source().index()] < position[edge.destination().index()]);
        }
    }
}

#[test]
fn test_parallel_edges_do_not_revisit() {
    let graph = Multigraph::from_triples(vec![("p", "q", 1.0), ("p", "q", 2.0), ("p", "q", 3.0)]);
    assert_eq!(labels(&graph, topological_order(&graph)), vec!["p", "q"]);
    assert_eq!(labels(&graph, depth_first_order(&graph)), vec!["q", "p"]);
}
