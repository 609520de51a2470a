//! Graph module: adjacency-list storage, BFS traversal, and TGF interchange.
//!
//! The graph is generic over its vertex labels and knows nothing about
//! actors or movies; classification happens in the callers.

mod adjacency;
mod traversal;
pub mod tgf;

pub use adjacency::AdjListGraph;
pub use tgf::{load_tgf, load_tgf_lenient, read_tgf, save_tgf, write_tgf};
pub use traversal::BreadthFirst;
