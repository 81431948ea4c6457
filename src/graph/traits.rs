use std::fmt::Debug;
use num_traits::Float;

use crate::graph::types::{Edge, Vertex, VertexId};
use crate::Result;

/// Trait representing a weighted directed multigraph.
///
/// Vertices are addressed by [`VertexId`] inside the algorithms and by label
/// at the edges of the API. Label lookups fail with
/// [`Error::VertexNotFound`](crate::Error::VertexNotFound) instead of panicking.
pub trait Graph<W>: Debug
where
    W: Float + Debug + Copy,
{
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of edges in the graph, parallel edges included
    fn edge_count(&self) -> usize;

    /// Returns the vertex ids in registry order (ascending label)
    fn vertices(&self) -> Vec<VertexId>;

    /// Returns the vertex stored under `id`
    fn vertex(&self, id: VertexId) -> Option<&Vertex>;

    /// Resolves a label to its vertex id
    fn vertex_id(&self, label: &str) -> Result<VertexId>;

    /// Returns true if a vertex with this label exists
    fn has_vertex(&self, label: &str) -> bool {
        self.vertex_id(label).is_ok()
    }

    /// Looks up the vertex carrying `label`
    fn get_vertex(&self, label: &str) -> Result<&Vertex> {
        let id = self.vertex_id(label)?;
        self.vertex(id)
            .ok_or_else(|| crate::Error::VertexNotFound(label.to_string()))
    }

    /// Distinct destinations reachable over one edge, ordered by label
    fn adjacent_to(&self, vertex: VertexId) -> Vec<VertexId>;

    /// Number of outgoing edges, parallel edges counted separately
    fn degree(&self, vertex: VertexId) -> usize;

    /// Returns true if at least one edge runs from `from` to `to`
    fn has_edge(&self, from: VertexId, to: VertexId) -> bool {
        !self.get_edges(from, to).is_empty()
    }

    /// All parallel edges from `from` to `to` in insertion order
    fn get_edges(&self, from: VertexId, to: VertexId) -> &[Edge<W>];

    /// Every edge leaving `vertex`, grouped by destination label
    fn outgoing_edges(&self, vertex: VertexId) -> Box<dyn Iterator<Item = &Edge<W>> + '_>;

    /// Number of edges whose destination is `vertex`
    fn in_degree(&self, vertex: VertexId) -> usize;

    /// Vertices without incoming edges, in registry order
    fn zero_in_degree(&self) -> Vec<VertexId> {
        self.vertices()
            .into_iter()
            .filter(|&v| self.in_degree(v) == 0)
            .collect()
    }

    /// Returns the label of `vertex`, or an empty string for foreign ids
    fn label(&self, vertex: VertexId) -> &str {
        self.vertex(vertex).map_or("", Vertex::label)
    }
}
