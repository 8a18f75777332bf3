//! Fluent API for building AdjacencyGraph instances.

use crate::types::{GraphKind, Vertex};

use super::AdjacencyGraph;

/// Fluent builder for constructing an [`AdjacencyGraph`].
///
/// Vertices and edges are recorded in call order and applied vertices
/// first, like [`AdjacencyGraph::build_from_lists`].
pub struct GraphBuilder<V: Vertex> {
    kind: GraphKind,
    vertices: Vec<V>,
    edges: Vec<(V, V)>,
}

impl<V: Vertex> GraphBuilder<V> {
    /// Create a new builder for the given kind.
    pub fn new(kind: GraphKind) -> Self {
        Self {
            kind,
            vertices: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Builder for a directed graph.
    pub fn directed() -> Self {
        Self::new(GraphKind::Directed)
    }

    /// Builder for an undirected graph.
    pub fn undirected() -> Self {
        Self::new(GraphKind::Undirected)
    }

    /// Add a vertex.
    pub fn vertex(mut self, v: impl Into<V>) -> Self {
        self.vertices.push(v.into());
        self
    }

    /// Add several vertices.
    pub fn vertices<I, T>(mut self, vs: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<V>,
    {
        self.vertices.extend(vs.into_iter().map(Into::into));
        self
    }

    /// Add an edge or arc.
    pub fn edge(mut self, origin: impl Into<V>, destination: impl Into<V>) -> Self {
        self.edges.push((origin.into(), destination.into()));
        self
    }

    /// Add several edges or arcs.
    pub fn edges<I, T>(mut self, es: I) -> Self
    where
        I: IntoIterator<Item = (T, T)>,
        T: Into<V>,
    {
        self.edges
            .extend(es.into_iter().map(|(u, v)| (u.into(), v.into())));
        self
    }

    /// Build the final graph.
    pub fn build(self) -> AdjacencyGraph<V> {
        AdjacencyGraph::from_lists(self.kind, self.vertices, self.edges)
    }
}
