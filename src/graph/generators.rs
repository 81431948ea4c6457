use crate::graph::Multigraph;
use rand::prelude::*;

fn label(i: usize) -> String {
    format!("v{}", i)
}

/// Generates a random multigraph with `n` vertices and `m` edges.
///
/// Endpoints are drawn uniformly, so parallel edges and self-loops occur
/// naturally. Every vertex is chained to its successor first so the whole
/// graph is reachable from `v0`.
pub fn generate_random_multigraph<R: Rng>(rng: &mut R, n: usize, m: usize) -> Multigraph<f64> {
    assert!(n > 0, "n must be positive");

    let mut graph = Multigraph::with_capacity(n);
    graph.add_vertex(&label(0));

    for i in 1..n {
        let weight = rng.gen_range(1.0..100.0);
        graph.add_edge(&label(i - 1), &label(i), weight);
    }

    for _ in 0..m {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        let weight = rng.gen_range(0.0..100.0);
        graph.add_edge(&label(u), &label(v), weight);
    }

    graph
}

/// Generates a 2D grid graph with dimensions x*y
///
/// Each cell is connected to its right and lower neighbour in both
/// directions, twice: once with weight 1 and once with a heavier detour edge.
pub fn generate_grid(x: usize, y: usize) -> Multigraph<f64> {
    let mut graph = Multigraph::with_capacity(x * y);
    let get_index = |i: usize, j: usize| -> usize { i * y + j };

    for i in 0..x {
        for j in 0..y {
            let here = label(get_index(i, j));
            graph.add_vertex(&here);

            let mut neighbours = Vec::with_capacity(2);
            if i + 1 < x {
                neighbours.push(label(get_index(i + 1, j)));
            }
            if j + 1 < y {
                neighbours.push(label(get_index(i, j + 1)));
            }

            for there in neighbours {
                for weight in [1.0, 3.0] {
                    graph.add_edge(&here, &there, weight);
                    graph.add_edge(&there, &here, weight);
                }
            }
        }
    }

    graph
}

/// Generates a layered DAG: every vertex of layer `k` points at every
/// vertex of layer `k + 1`
pub fn generate_layered_dag(layers: usize, width: usize) -> Multigraph<f64> {
    let mut graph = Multigraph::with_capacity(layers * width);

    for layer in 0..layers {
        for a in 0..width {
            let from = label(layer * width + a);
            graph.add_vertex(&from);
            if layer + 1 == layers {
                continue;
            }
            for b in 0..width {
                graph.add_edge(&from, &label((layer + 1) * width + b), 1.0);
            }
        }
    }

    graph
}
