pub mod traits;
pub mod frontier;
pub mod dijkstra;
pub mod traversal;

pub use frontier::{FrontierStrategy, HeapFrontier, LinearFrontier, Strategy};
pub use traits::{ShortestPathAlgorithm, ShortestPathResult};
pub use traversal::VisitState;
