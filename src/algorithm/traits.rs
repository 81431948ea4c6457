use std::fmt::Debug;
use log::warn;
use num_traits::Float;
use serde::Serialize;

use crate::graph::{Graph, VertexId};
use crate::Result;

/// Result of a shortest path algorithm execution.
///
/// Both vectors are indexed by [`VertexId`]. A successful run reaches every
/// vertex, so every distance is finite.
#[derive(Debug, Clone, Serialize)]
pub struct ShortestPathResult<W>
where
    W: Float + Debug + Copy,
{
    /// Distances from source to each vertex
    pub distances: Vec<W>,

    /// Predecessor vertices in the shortest path tree
    pub predecessors: Vec<Option<VertexId>>,

    /// Source vertex ID
    pub source: VertexId,
}

impl<W> ShortestPathResult<W>
where
    W: Float + Debug + Copy,
{
    pub fn distance(&self, vertex: VertexId) -> Option<W> {
        self.distances.get(vertex.index()).copied()
    }

    pub fn predecessor(&self, vertex: VertexId) -> Option<VertexId> {
        self.predecessors.get(vertex.index()).copied().flatten()
    }
}

/// Trait for shortest path algorithms
pub trait ShortestPathAlgorithm<W, G>
where
    W: Float + Debug + Copy,
    G: Graph<W>,
{
    /// Compute shortest paths from a source vertex to all other vertices
    fn compute_shortest_paths(&self, graph: &G, source: VertexId) -> Result<ShortestPathResult<W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Get the shortest path from source to target as a sequence of vertices
    fn get_path(&self, result: &ShortestPathResult<W>, target: VertexId) -> Option<Vec<VertexId>> {
        if target.index() >= result.predecessors.len() {
            return None;
        }

        let mut path = Vec::new();
        let mut current = target;

        // Build path in reverse order
        while current != result.source {
            path.push(current);
            match result.predecessor(current) {
                Some(pred) => current = pred,
                None => {
                    warn!("Vertex {} has no predecessor; path to {} is broken", current, target);
                    return None;
                }
            }

            if path.len() > result.predecessors.len() {
                warn!("Path length exceeds graph size, likely a cycle at {}", current);
                return None;
            }
        }

        path.push(result.source);
        path.reverse();

        Some(path)
    }
}
