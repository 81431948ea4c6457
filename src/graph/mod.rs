pub mod traits;
pub mod types;
pub mod multigraph;
pub mod generators;
pub mod loader;

pub use traits::Graph;
pub use types::{smallest_edge, smallest_edge_weight, Edge, Vertex, VertexId};
pub use multigraph::Multigraph;
