//! All data types for the graph-connectivity library.

pub mod error;
pub mod kind;
pub mod vertex;

pub use error::{GraphError, GraphResult};
pub use kind::GraphKind;
pub use vertex::{Vertex, VertexLabel};

/// Number of endpoints in a well-formed edge.
pub const EDGE_ARITY: usize = 2;
