//! Error types for the graph-connectivity library.

use thiserror::Error;

/// All errors that can occur while loading or validating graph input.
///
/// The graph model and the connectivity checker themselves never fail;
/// these errors belong to the layers around them.
#[derive(Error, Debug)]
pub enum GraphError {
    /// The vertex set is empty.
    #[error("Vertex set is empty")]
    EmptyVertexSet,

    /// An edge does not have exactly two endpoints.
    #[error("Edge {index} has {arity} endpoints, expected 2")]
    MalformedEdge { index: usize, arity: usize },

    /// An edge endpoint is missing from the declared vertex set.
    #[error("Edge {index} references unknown vertex {vertex}")]
    UnknownVertex { index: usize, vertex: String },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Document could not be parsed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience result type for graph-connectivity operations.
pub type GraphResult<T> = Result<T, GraphError>;
