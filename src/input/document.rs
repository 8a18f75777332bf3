//! JSON graph documents.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::graph::AdjacencyGraph;
use crate::types::{GraphKind, GraphResult, VertexLabel};

use super::validate::validate_input;

/// A graph as read from disk.
///
/// ```json
/// { "name": "triangles", "type": "undirected",
///   "vertices": ["x1", "x2", "x3"], "edges": [["x1", "x2"], ["x2", "x3"]] }
/// ```
///
/// Edges are kept as raw lists so that malformed ones survive parsing and
/// can be reported by the validator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphDocument {
    /// Display name. Defaults to the file stem when loaded from a path.
    #[serde(default, alias = "nome")]
    pub name: String,
    /// Directed or undirected.
    #[serde(rename = "type", alias = "tipo", alias = "kind")]
    pub kind: GraphKind,
    /// The declared vertex set.
    pub vertices: Vec<VertexLabel>,
    /// Edges or arcs, each expected to be a pair.
    #[serde(default, alias = "arcs", alias = "ligacoes")]
    pub edges: Vec<Vec<VertexLabel>>,
}

impl GraphDocument {
    /// Create a document from already-paired edges.
    pub fn new(
        name: impl Into<String>,
        kind: GraphKind,
        vertices: Vec<VertexLabel>,
        edges: Vec<(VertexLabel, VertexLabel)>,
    ) -> Self {
        Self {
            name: name.into(),
            kind,
            vertices,
            edges: edges.into_iter().map(|(u, v)| vec![u, v]).collect(),
        }
    }

    /// Parse a document from a JSON string.
    pub fn from_json_str(json: &str) -> GraphResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a document from a file.
    pub fn load(path: &Path) -> GraphResult<Self> {
        let data = std::fs::read_to_string(path)?;
        let mut doc = Self::from_json_str(&data)?;
        if doc.name.is_empty() {
            doc.name = path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default();
        }
        log::info!(
            "loaded {} graph {:?}: {} vertices, {} edges",
            doc.kind,
            doc.name,
            doc.vertices.len(),
            doc.edges.len()
        );
        Ok(doc)
    }

    /// Run the input validator over this document.
    pub fn validate(&self) -> GraphResult<()> {
        validate_input(&self.vertices, &self.edges)
    }

    /// Edges as pairs. Entries that are not pairs are skipped.
    pub fn edge_pairs(&self) -> Vec<(VertexLabel, VertexLabel)> {
        self.edges
            .iter()
            .filter_map(|edge| match edge.as_slice() {
                [u, v] => Some((u.clone(), v.clone())),
                _ => None,
            })
            .collect()
    }

    /// Validate, then build the graph.
    pub fn to_graph(&self) -> GraphResult<AdjacencyGraph<VertexLabel>> {
        self.validate()?;
        Ok(AdjacencyGraph::from_lists(
            self.kind,
            self.vertices.iter().cloned(),
            self.edge_pairs(),
        ))
    }
}
