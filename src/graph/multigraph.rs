use std::collections::BTreeMap;
use std::fmt::Debug;
use log::trace;
use num_traits::Float;

use crate::graph::traits::Graph;
use crate::graph::types::{Edge, Vertex, VertexId};
use crate::{Error, Result};

/// A directed weighted multigraph using adjacency lists.
///
/// Inserting the same `(source, destination)` pair twice keeps both edges;
/// they become parallel edges 0 and 1 of that pair.
#[derive(Debug, Clone)]
pub struct Multigraph<W>
where
    W: Float + Debug + Copy,
{
    /// Vertex registry indexed by `VertexId`
    vertices: Vec<Vertex>,

    /// Label -> id, iterated in label order
    labels: BTreeMap<String, VertexId>,

    /// Outgoing edges for each vertex: destination label -> parallel edges
    outgoing_edges: Vec<BTreeMap<String, Vec<Edge<W>>>>,

    /// Label of the most recently created edge
    last_edge_label: u64,
}

impl<W> Multigraph<W>
where
    W: Float + Debug + Copy,
{
    /// Creates a new empty multigraph
    pub fn new() -> Self {
        Multigraph {
            vertices: Vec::new(),
            labels: BTreeMap::new(),
            outgoing_edges: Vec::new(),
            last_edge_label: 0,
        }
    }

    /// Creates a new multigraph with room for the specified number of vertices
    pub fn with_capacity(vertices: usize) -> Self {
        Multigraph {
            vertices: Vec::with_capacity(vertices),
            labels: BTreeMap::new(),
            outgoing_edges: Vec::with_capacity(vertices),
            last_edge_label: 0,
        }
    }

    /// Builds a graph from `(source, destination, weight)` triples
    pub fn from_triples<I, S>(triples: I) -> Self
    where
        I: IntoIterator<Item = (S, S, W)>,
        S: AsRef<str>,
    {
        let mut graph = Multigraph::new();
        graph.extend_triples(triples);
        graph
    }

    /// Inserts every triple as a new edge
    pub fn extend_triples<I, S>(&mut self, triples: I)
    where
        I: IntoIterator<Item = (S, S, W)>,
        S: AsRef<str>,
    {
        for (source, destination, weight) in triples {
            self.add_edge(source.as_ref(), destination.as_ref(), weight);
        }
    }

    /// Returns the id for `label`, registering a new vertex if needed
    pub fn add_vertex(&mut self, label: &str) -> VertexId {
        if let Some(&id) = self.labels.get(label) {
            return id;
        }

        let id = VertexId(self.vertices.len());
        self.vertices.push(Vertex::new(id, label));
        self.labels.insert(label.to_string(), id);
        self.outgoing_edges.push(BTreeMap::new());
        id
    }

    /// Adds a directed edge and returns its label.
    ///
    /// Both endpoints are created on first reference. Repeated insertions of
    /// the same pair accumulate as parallel edges; nothing is merged.
    pub fn add_edge(&mut self, from: &str, to: &str, weight: W) -> u64 {
        let source = self.add_vertex(from);
        let destination = self.add_vertex(to);

        self.last_edge_label += 1;
        let label = self.last_edge_label;
        let edge = Edge::new(label, weight, source, destination);

        let parallel = self.outgoing_edges[source.index()]
            .entry(to.to_string())
            .or_default();
        parallel.push(edge);
        trace!(
            "edge {} {} -> {} (parallel index {})",
            label,
            from,
            to,
            parallel.len() - 1
        );

        label
    }

    /// Adds an edge of weight one
    pub fn add_unweighted_edge(&mut self, from: &str, to: &str) -> u64 {
        self.add_edge(from, to, W::one())
    }

    /// Label-based variant of [`Graph::adjacent_to`]
    pub fn adjacent_to_label(&self, label: &str) -> Result<Vec<&Vertex>> {
        let id = self.vertex_id(label)?;
        Ok(self
            .adjacent_to(id)
            .into_iter()
            .map(|v| &self.vertices[v.index()])
            .collect())
    }

    /// Label-based variant of [`Graph::degree`]
    pub fn degree_of(&self, label: &str) -> Result<usize> {
        Ok(self.degree(self.vertex_id(label)?))
    }

    /// Label-based variant of [`Graph::get_edges`]
    pub fn edges_between(&self, from: &str, to: &str) -> Result<&[Edge<W>]> {
        let source = self.vertex_id(from)?;
        let destination = self.vertex_id(to)?;
        Ok(self.get_edges(source, destination))
    }

    /// Label-based variant of [`Graph::has_edge`]
    pub fn has_edge_between(&self, from: &str, to: &str) -> Result<bool> {
        Ok(!self.edges_between(from, to)?.is_empty())
    }

    /// Label-based variant of [`Graph::in_degree`]
    pub fn in_degree_of(&self, label: &str) -> Result<usize> {
        Ok(self.in_degree(self.vertex_id(label)?))
    }
}

impl<W> Default for Multigraph<W>
where
    W: Float + Debug + Copy,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<W> Graph<W> for Multigraph<W>
where
    W: Float + Debug + Copy,
{
    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn edge_count(&self) -> usize {
        self.last_edge_label as usize
    }

    fn vertices(&self) -> Vec<VertexId> {
        self.labels.values().copied().collect()
    }

    fn vertex(&self, id: VertexId) -> Option<&Vertex> {
        self.vertices.get(id.index())
    }

    fn vertex_id(&self, label: &str) -> Result<VertexId> {
        self.labels
            .get(label)
            .copied()
            .ok_or_else(|| Error::VertexNotFound(label.to_string()))
    }

    fn adjacent_to(&self, vertex: VertexId) -> Vec<VertexId> {
        match self.outgoing_edges.get(vertex.index()) {
            Some(by_destination) => by_destination
                .values()
                .filter_map(|edges| edges.first().map(Edge::destination))
                .collect(),
            None => Vec::new(),
        }
    }

    fn degree(&self, vertex: VertexId) -> usize {
        self.outgoing_edges
            .get(vertex.index())
            .map_or(0, |by_destination| by_destination.values().map(Vec::len).sum())
    }

    fn get_edges(&self, from: VertexId, to: VertexId) -> &[Edge<W>] {
        let (Some(by_destination), Some(destination)) =
            (self.outgoing_edges.get(from.index()), self.vertex(to))
        else {
            return &[];
        };

        by_destination
            .get(destination.label())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    fn outgoing_edges(&self, vertex: VertexId) -> Box<dyn Iterator<Item = &Edge<W>> + '_> {
        if let Some(by_destination) = self.outgoing_edges.get(vertex.index()) {
            Box::new(by_destination.values().flatten())
        } else {
            Box::new(std::iter::empty())
        }
    }

    fn in_degree(&self, vertex: VertexId) -> usize {
        self.outgoing_edges
            .iter()
            .flat_map(|by_destination| by_destination.values().flatten())
            .filter(|edge| edge.destination() == vertex)
            .count()
    }
}
