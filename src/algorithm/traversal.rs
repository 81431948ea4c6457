//! Depth-first traversal and topological ordering.
//!
//! Visit state lives in a vector owned by each call, so the graph is only
//! borrowed immutably and separate runs never observe each other's marks.

use std::fmt::Debug;
use log::debug;
use num_traits::Float;

use crate::graph::{Graph, VertexId};

/// Per-run traversal mark of a vertex
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VisitState {
    #[default]
    Undiscovered,
    Discovered,
    Finished,
}

/// Vertices in depth-first finishing order (post-order).
///
/// Every vertex appears exactly once: roots are tried in registry order and
/// each still-undiscovered one starts a new tree.
pub fn depth_first_order<W, G>(graph: &G) -> Vec<VertexId>
where
    W: Float + Debug + Copy,
    G: Graph<W>,
{
    let mut state = vec![VisitState::Undiscovered; graph.vertex_count()];
    let mut finished = Vec::with_capacity(graph.vertex_count());

    for root in graph.vertices() {
        if state[root.index()] == VisitState::Undiscovered {
            visit(graph, root, &mut state, &mut finished);
        }
    }

    debug!("depth-first order over {} vertices", finished.len());
    finished
}

/// Reverse finishing order of a depth-first search seeded only from the
/// vertices with in-degree zero.
///
/// Vertices that cannot be reached from such a seed (every vertex on a cycle
/// with no entry from a source, for instance) are left out of the result
/// rather than reported as an error.
pub fn topological_order<W, G>(graph: &G) -> Vec<VertexId>
where
    W: Float + Debug + Copy,
    G: Graph<W>,
{
    let mut state = vec![VisitState::Undiscovered; graph.vertex_count()];
    let mut finished = Vec::with_capacity(graph.vertex_count());

    for seed in graph.zero_in_degree() {
        if state[seed.index()] == VisitState::Undiscovered {
            visit(graph, seed, &mut state, &mut finished);
        }
    }

    if finished.len() < graph.vertex_count() {
        debug!(
            "topological order omits {} of {} vertices",
            graph.vertex_count() - finished.len(),
            graph.vertex_count()
        );
    }

    finished.reverse();
    finished
}

/// Iterative post-order visit; the explicit stack mirrors the recursion
/// (vertex, its neighbours, next neighbour to try).
fn visit<W, G>(graph: &G, start: VertexId, state: &mut [VisitState], finished: &mut Vec<VertexId>)
where
    W: Float + Debug + Copy,
    G: Graph<W>,
{
    state[start.index()] = VisitState::Discovered;
    let mut stack = vec![(start, graph.adjacent_to(start), 0usize)];

    while let Some((vertex, neighbours, next)) = stack.last_mut() {
        if let Some(&w) = neighbours.get(*next) {
            *next += 1;
            if state[w.index()] == VisitState::Undiscovered {
                state[w.index()] = VisitState::Discovered;
                stack.push((w, graph.adjacent_to(w), 0));
            }
        } else {
            let vertex = *vertex;
            state[vertex.index()] = VisitState::Finished;
            finished.push(vertex);
            stack.pop();
        }
    }
}
