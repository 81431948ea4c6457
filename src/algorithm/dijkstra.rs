use std::fmt::Debug;
use log::{debug, trace, warn};
use num_traits::Float;

use crate::algorithm::frontier::{FrontierStrategy, HeapFrontier, LinearFrontier, Strategy};
use crate::algorithm::traversal::VisitState;
use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::graph::{smallest_edge_weight, Graph, VertexId};
use crate::{Error, Result};

/// Classic Dijkstra's algorithm with a selectable frontier strategy
#[derive(Debug, Default, Clone, Copy)]
pub struct Dijkstra {
    strategy: Strategy,
}

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance backed by the indexed heap
    pub fn new() -> Self {
        Dijkstra {
            strategy: Strategy::Heap,
        }
    }

    /// Creates a Dijkstra instance using the given frontier strategy
    pub fn with_strategy(strategy: Strategy) -> Self {
        Dijkstra { strategy }
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for Dijkstra
where
    W: Float + Debug + Copy,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        match self.strategy {
            Strategy::Heap => "Dijkstra (heap)",
            Strategy::Linear => "Dijkstra (linear rescan)",
        }
    }

    fn compute_shortest_paths(&self, graph: &G, source: VertexId) -> Result<ShortestPathResult<W>> {
        let n = graph.vertex_count();
        match self.strategy {
            Strategy::Heap => run(graph, source, HeapFrontier::new(n)),
            Strategy::Linear => run(graph, source, LinearFrontier::new(n)),
        }
    }
}

/// Computes shortest paths from the vertex labelled `source`
pub fn shortest_paths<W, G>(graph: &G, source: &str, strategy: Strategy) -> Result<ShortestPathResult<W>>
where
    W: Float + Debug + Copy,
    G: Graph<W>,
{
    let source = graph.vertex_id(source)?;
    Dijkstra::with_strategy(strategy).compute_shortest_paths(graph, source)
}

fn check_non_negative<W, G>(graph: &G) -> Result<()>
where
    W: Float + Debug + Copy,
    G: Graph<W>,
{
    for vertex in graph.vertices() {
        if let Some(edge) = graph.outgoing_edges(vertex).find(|e| e.weight() < W::zero()) {
            return Err(Error::NegativeWeight {
                edge: edge.label(),
                weight: edge.weight().to_f64().unwrap_or(f64::NAN),
            });
        }
    }
    Ok(())
}

/// The Dijkstra loop, shared by every frontier strategy.
///
/// Popping a vertex whose distance is still infinite aborts the whole query
/// with [`Error::Unreachable`]; no partial result is returned.
fn run<W, G, F>(graph: &G, source: VertexId, mut frontier: F) -> Result<ShortestPathResult<W>>
where
    W: Float + Debug + Copy,
    G: Graph<W>,
    F: FrontierStrategy<W>,
{
    if graph.vertex(source).is_none() {
        return Err(Error::VertexNotFound(source.to_string()));
    }
    check_non_negative(graph)?;

    let n = graph.vertex_count();
    debug!(
        "Dijkstra from {} over {} vertices and {} edges",
        graph.label(source),
        n,
        graph.edge_count()
    );

    let mut distances = vec![W::infinity(); n];
    let mut predecessors: Vec<Option<VertexId>> = vec![None; n];
    let mut state = vec![VisitState::Undiscovered; n];
    distances[source.index()] = W::zero();

    frontier.seed(&graph.vertices(), &distances);

    while !frontier.is_empty() {
        let Some(u) = frontier.extract_min(&distances) else {
            break;
        };
        let dist_u = distances[u.index()];
        if dist_u.is_infinite() {
            warn!(
                "Vertex {} is unreachable from {}; aborting",
                graph.label(u),
                graph.label(source)
            );
            return Err(Error::Unreachable {
                vertex: graph.label(u).to_string(),
            });
        }
        state[u.index()] = VisitState::Discovered;

        for w in graph.adjacent_to(u) {
            if state[w.index()] != VisitState::Undiscovered {
                continue;
            }

            // Parallel edges collapse to the lightest one
            let weight = smallest_edge_weight(graph.get_edges(u, w));
            let candidate = dist_u + weight;
            if candidate < distances[w.index()] {
                trace!(
                    "relax {} -> {}: {:?} -> {:?}",
                    graph.label(u),
                    graph.label(w),
                    distances[w.index()],
                    candidate
                );
                distances[w.index()] = candidate;
                predecessors[w.index()] = Some(u);
                frontier.improve_key(w, candidate)?;
            }
        }

        state[u.index()] = VisitState::Finished;
    }

    debug!("Dijkstra from {} settled {} vertices", graph.label(source), n);

    Ok(ShortestPathResult {
        distances,
        predecessors,
        source,
    })
}
