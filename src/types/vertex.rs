//! Vertex identifiers.

use std::fmt::Debug;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

/// Anything usable as a vertex: an opaque, hashable, comparable identifier.
///
/// `Hash` backs the adjacency map and the visited set. `Ord` is only used to
/// pick the start vertex (the minimum), so selection is reproducible.
pub trait Vertex: Clone + Eq + Hash + Ord + Debug {}

impl<T: Clone + Eq + Hash + Ord + Debug> Vertex for T {}

/// A vertex id as it appears in a graph document: an integer or a string.
///
/// Integers order before strings.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum VertexLabel {
    /// Numeric id, e.g. `1`.
    Int(i64),
    /// Textual id, e.g. `"x1"`.
    Text(String),
}

impl std::fmt::Display for VertexLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{}", n),
            Self::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<&str> for VertexLabel {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for VertexLabel {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<i64> for VertexLabel {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}
