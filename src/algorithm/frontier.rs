use std::cmp::Reverse;
use std::fmt::{self, Debug};
use std::str::FromStr;
use num_traits::Float;
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::data_structures::{Handle, IndexedPriorityQueue};
use crate::graph::VertexId;
use crate::{Error, Result};

/// Which frontier structure drives Dijkstra's extraction step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Indexed binary heap, O((V + E) log V)
    #[default]
    Heap,
    /// Unordered list re-sorted before each extraction, O(V^2 log V)
    Linear,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Heap => f.write_str("heap"),
            Strategy::Linear => f.write_str("linear"),
        }
    }
}

impl FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "heap" => Ok(Strategy::Heap),
            "linear" => Ok(Strategy::Linear),
            other => Err(format!("unknown strategy {:?} (expected heap or linear)", other)),
        }
    }
}

/// The set of not-yet-finalized vertices during a Dijkstra run.
///
/// Both implementations extract by `(distance, vertex id)` so that equal
/// distances are broken the same way regardless of strategy.
pub trait FrontierStrategy<W>
where
    W: Float + Debug + Copy,
{
    /// Puts every vertex of `vertices` on the frontier
    fn seed(&mut self, vertices: &[VertexId], distances: &[W]);

    /// Removes and returns the vertex with the smallest tentative distance
    fn extract_min(&mut self, distances: &[W]) -> Option<VertexId>;

    /// Reflects that `vertex` now has the smaller tentative `distance`
    fn improve_key(&mut self, vertex: VertexId, distance: W) -> Result<()>;

    fn is_empty(&self) -> bool;
}

/// Frontier kept in an [`IndexedPriorityQueue`]; key improvements are a
/// remove followed by an offer
#[derive(Debug)]
pub struct HeapFrontier<W>
where
    W: Float + Debug + Copy,
{
    queue: IndexedPriorityQueue<(OrderedFloat<W>, VertexId)>,
    handles: Vec<Option<Handle>>,
}

impl<W> HeapFrontier<W>
where
    W: Float + Debug + Copy,
{
    pub fn new(vertex_count: usize) -> Self {
        HeapFrontier {
            queue: IndexedPriorityQueue::with_capacity(vertex_count),
            handles: vec![None; vertex_count],
        }
    }
}

impl<W> FrontierStrategy<W> for HeapFrontier<W>
where
    W: Float + Debug + Copy,
{
    fn seed(&mut self, vertices: &[VertexId], distances: &[W]) {
        let handles = self
            .queue
            .batch_insert(vertices.iter().map(|&v| (OrderedFloat(distances[v.index()]), v)));
        for (&vertex, handle) in vertices.iter().zip(handles) {
            self.handles[vertex.index()] = Some(handle);
        }
    }

    fn extract_min(&mut self, _distances: &[W]) -> Option<VertexId> {
        let (_, vertex) = self.queue.poll()?;
        self.handles[vertex.index()] = None;
        Some(vertex)
    }

    fn improve_key(&mut self, vertex: VertexId, distance: W) -> Result<()> {
        let handle = self.handles[vertex.index()].ok_or(Error::ElementNotFound)?;
        let handle = self.queue.rekey(handle, (OrderedFloat(distance), vertex))?;
        self.handles[vertex.index()] = Some(handle);
        Ok(())
    }

    fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

/// Frontier kept as a plain list that is sorted again before every
/// extraction, so key improvements need no bookkeeping
#[derive(Debug, Default)]
pub struct LinearFrontier {
    pending: Vec<VertexId>,
}

impl LinearFrontier {
    pub fn new(vertex_count: usize) -> Self {
        LinearFrontier {
            pending: Vec::with_capacity(vertex_count),
        }
    }
}

impl<W> FrontierStrategy<W> for LinearFrontier
where
    W: Float + Debug + Copy,
{
    fn seed(&mut self, vertices: &[VertexId], _distances: &[W]) {
        self.pending.extend_from_slice(vertices);
    }

    fn extract_min(&mut self, distances: &[W]) -> Option<VertexId> {
        // Descending, so the minimum sits at the end
        self.pending
            .sort_by_key(|&v| Reverse((OrderedFloat(distances[v.index()]), v)));
        self.pending.pop()
    }

    fn improve_key(&mut self, _vertex: VertexId, _distance: W) -> Result<()> {
        Ok(())
    }

    fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
