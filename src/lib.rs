//! Graph connectivity — is a directed or undirected graph connected?
//!
//! A graph is connected when a depth-first traversal from any one vertex
//! reaches every vertex. Directed graphs are first symmetrized, so the
//! answer for them is weak connectivity.

pub mod cli;
pub mod engine;
pub mod graph;
pub mod input;
pub mod samples;
pub mod types;

// Re-export commonly used types at the crate root
pub use engine::{is_connected, ConnectivityChecker, ConnectivityResult};
pub use graph::{dfs_order, transitive_closure, AdjacencyGraph, GraphBuilder};
pub use input::{is_valid_input, validate_input, GraphDocument};
pub use samples::{sample_graph, Sample};
pub use types::{GraphError, GraphKind, GraphResult, Vertex, VertexLabel, EDGE_ARITY};
