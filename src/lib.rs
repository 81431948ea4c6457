//! Multigraph SSSP - directed weighted multigraph toolkit
//!
//! This library provides a directed, weighted multigraph that keeps parallel
//! edges apart, an indexed binary min-heap with O(log n) removal of arbitrary
//! elements, Dijkstra's single-source shortest paths with two interchangeable
//! frontier strategies (heap-driven and linear rescan), and depth-first
//! traversal with a topological ordering seeded from zero in-degree vertices.

pub mod algorithm;
pub mod data_structures;
pub mod graph;

pub use algorithm::{
    dijkstra::{shortest_paths, Dijkstra},
    frontier::Strategy,
    traversal::{depth_first_order, topological_order},
    ShortestPathAlgorithm, ShortestPathResult,
};
pub use data_structures::{Handle, IndexedPriorityQueue};
/// Re-export main types for convenient use
pub use graph::multigraph::Multigraph;
pub use graph::{Edge, Graph, Vertex, VertexId};

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Vertex not found: {0}")]
    VertexNotFound(String),

    #[error("Element not found in priority queue")]
    ElementNotFound,

    #[error("Vertex {vertex} is unreachable from the source")]
    Unreachable { vertex: String },

    #[error("Negative weight {weight} on edge {edge}")]
    NegativeWeight { edge: u64, weight: f64 },

    #[error("Parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
