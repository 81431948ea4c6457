use std::fmt;
use num_traits::Float;
use serde::Serialize;

/// Dense index of a vertex inside its graph's registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct VertexId(pub usize);

impl VertexId {
    /// Returns the registry index backing this id
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A labelled vertex. Label uniqueness is enforced by the owning graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vertex {
    id: VertexId,
    label: String,
}

impl Vertex {
    pub(crate) fn new(id: VertexId, label: impl Into<String>) -> Self {
        Vertex {
            id,
            label: label.into(),
        }
    }

    pub fn id(&self) -> VertexId {
        self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

/// An immutable directed edge.
///
/// Labels are handed out by the graph in insertion order starting at 1, so
/// two parallel edges between the same pair of vertices never share a label.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge<W> {
    label: u64,
    weight: W,
    source: VertexId,
    destination: VertexId,
}

impl<W> Edge<W>
where
    W: Float + fmt::Debug + Copy,
{
    pub(crate) fn new(label: u64, weight: W, source: VertexId, destination: VertexId) -> Self {
        Edge {
            label,
            weight,
            source,
            destination,
        }
    }

    pub fn label(&self) -> u64 {
        self.label
    }

    pub fn weight(&self) -> W {
        self.weight
    }

    pub fn source(&self) -> VertexId {
        self.source
    }

    pub fn destination(&self) -> VertexId {
        self.destination
    }
}

/// Returns the lightest edge of `edges`, or `None` if the slice is empty.
///
/// Ties keep the edge inserted first.
pub fn smallest_edge<W>(edges: &[Edge<W>]) -> Option<&Edge<W>>
where
    W: Float + fmt::Debug + Copy,
{
    edges.iter().fold(None, |best: Option<&Edge<W>>, edge| match best {
        Some(current) if current.weight <= edge.weight => Some(current),
        _ => Some(edge),
    })
}

/// Weight of the lightest edge of `edges`; positive infinity when there is none.
pub fn smallest_edge_weight<W>(edges: &[Edge<W>]) -> W
where
    W: Float + fmt::Debug + Copy,
{
    smallest_edge(edges).map_or_else(W::infinity, |edge| edge.weight)
}
