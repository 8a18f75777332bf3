//! In-memory graph model and traversal.

pub mod adjacency_graph;
pub mod builder;
pub mod traversal;

pub use adjacency_graph::AdjacencyGraph;
pub use builder::GraphBuilder;
pub use traversal::{dfs_order, transitive_closure};
