//! Graph kind: directed or undirected.

use serde::{Deserialize, Serialize};

/// Whether edge addition is symmetric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GraphKind {
    /// Arcs are stored one-way (origin -> destination).
    #[serde(alias = "orientado")]
    Directed,
    /// Edges are stored in both directions.
    #[serde(alias = "nao_orientado", alias = "não_orientado")]
    Undirected,
}

impl GraphKind {
    /// Return a human-readable name for this kind.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Directed => "directed",
            Self::Undirected => "undirected",
        }
    }

    /// Parse a kind from a string name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "directed" | "orientado" => Some(Self::Directed),
            "undirected" | "nao_orientado" | "não_orientado" => Some(Self::Undirected),
            _ => None,
        }
    }

    /// True for [`GraphKind::Directed`].
    pub fn is_directed(&self) -> bool {
        matches!(self, Self::Directed)
    }
}

impl std::fmt::Display for GraphKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
