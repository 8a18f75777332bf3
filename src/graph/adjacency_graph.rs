//! Core graph structure — vertices with adjacency lists.

use std::collections::{HashMap, HashSet};

use crate::types::{GraphKind, Vertex};

/// A graph stored as a hashed map from each vertex to its neighbor list.
///
/// Every vertex owns an adjacency entry, so the key set of the map is the
/// vertex set. Vertices iterate in insertion order. Neighbor lists keep
/// edge-addition order and may repeat a vertex when parallel edges were added.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacencyGraph<V: Vertex> {
    /// Vertex -> neighbors, in edge-addition order.
    adjacency: HashMap<V, Vec<V>>,
    /// Vertices in insertion order.
    order: Vec<V>,
    /// Fixed at construction.
    kind: GraphKind,
}

impl<V: Vertex> AdjacencyGraph<V> {
    /// Create a new empty graph.
    pub fn new(kind: GraphKind) -> Self {
        Self {
            adjacency: HashMap::new(),
            order: Vec::new(),
            kind,
        }
    }

    /// Create an empty directed graph.
    pub fn directed() -> Self {
        Self::new(GraphKind::Directed)
    }

    /// Create an empty undirected graph.
    pub fn undirected() -> Self {
        Self::new(GraphKind::Undirected)
    }

    /// Create a graph from vertex and edge lists (see [`Self::build_from_lists`]).
    pub fn from_lists<I, E>(kind: GraphKind, vertices: I, edges: E) -> Self
    where
        I: IntoIterator<Item = V>,
        E: IntoIterator<Item = (V, V)>,
    {
        let mut graph = Self::new(kind);
        graph.build_from_lists(vertices, edges);
        graph
    }

    /// Whether edges are stored one-way or both ways.
    pub fn kind(&self) -> GraphKind {
        self.kind
    }

    /// True if this graph was created directed.
    pub fn is_directed(&self) -> bool {
        self.kind.is_directed()
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.order.len()
    }

    /// Total number of adjacency entries across all vertices.
    ///
    /// An undirected edge contributes two entries, an arc one.
    pub fn entry_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    /// True if the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// True if `v` is a vertex of this graph.
    pub fn contains_vertex(&self, v: &V) -> bool {
        self.adjacency.contains_key(v)
    }

    /// Iterate over all vertices in insertion order.
    pub fn vertices(&self) -> impl Iterator<Item = &V> + '_ {
        self.order.iter()
    }

    /// The vertex set as an owned set.
    pub fn vertex_set(&self) -> HashSet<V> {
        self.order.iter().cloned().collect()
    }

    /// The smallest vertex under `Ord`, found in one pass. `None` when empty.
    pub fn first_vertex(&self) -> Option<&V> {
        self.order.iter().min()
    }

    /// Read-only view of the whole adjacency mapping.
    pub fn adjacency(&self) -> &HashMap<V, Vec<V>> {
        &self.adjacency
    }

    /// Vertices paired with their neighbor lists, in insertion order.
    pub fn entries(&self) -> impl Iterator<Item = (&V, &[V])> + '_ {
        self.order.iter().map(move |v| (v, self.neighbors(v)))
    }

    /// Neighbors of `v`, or an empty slice if `v` has no entry.
    pub fn neighbors(&self, v: &V) -> &[V] {
        self.adjacency.get(v).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Insert a vertex with an empty neighbor list. Idempotent.
    pub fn add_vertex(&mut self, v: V) {
        if !self.adjacency.contains_key(&v) {
            self.adjacency.insert(v.clone(), Vec::new());
            self.order.push(v);
        }
    }

    /// Add an edge (undirected) or arc (directed), creating missing endpoints.
    ///
    /// Parallel edges are kept as repeated entries.
    pub fn add_edge(&mut self, origin: V, destination: V) {
        self.add_vertex(origin.clone());
        self.add_vertex(destination.clone());

        self.push_neighbor(&origin, destination.clone());
        if !self.kind.is_directed() {
            self.push_neighbor(&destination, origin);
        }
    }

    /// Add all vertices, then all edges, in input order.
    ///
    /// Edge endpoints missing from `vertices` are inserted rather than
    /// rejected; use [`crate::input::validate_input`] first for strictness.
    pub fn build_from_lists<I, E>(&mut self, vertices: I, edges: E)
    where
        I: IntoIterator<Item = V>,
        E: IntoIterator<Item = (V, V)>,
    {
        for v in vertices {
            self.add_vertex(v);
        }
        for (origin, destination) in edges {
            self.add_edge(origin, destination);
        }
    }

    /// Add the reverse of every arc that lacks one. Returns the number added.
    ///
    /// Existence is checked against the adjacency lists as they were when the
    /// call started, so reverse arcs added here are never themselves examined.
    /// One reverse arc is added per forward arc, so a repeated arc gets a
    /// repeated reverse. Once every arc has a reverse, a further call adds nothing.
    pub fn symmetrize(&mut self) -> usize {
        let pending: Vec<(V, V)> = {
            let existing: HashSet<(&V, &V)> = self
                .entries()
                .flat_map(|(origin, dests)| dests.iter().map(move |dest| (origin, dest)))
                .collect();

            self.entries()
                .flat_map(|(origin, dests)| dests.iter().map(move |dest| (origin, dest)))
                .filter(|&(origin, dest)| !existing.contains(&(dest, origin)))
                .map(|(origin, dest)| (dest.clone(), origin.clone()))
                .collect()
        };

        let added = pending.len();
        for (origin, destination) in pending {
            self.push_neighbor(&origin, destination);
        }
        log::debug!("symmetrize added {} reverse arcs", added);
        added
    }

    fn push_neighbor(&mut self, v: &V, neighbor: V) {
        if let Some(list) = self.adjacency.get_mut(v) {
            list.push(neighbor);
        }
    }
}

impl<V: Vertex> Default for AdjacencyGraph<V> {
    fn default() -> Self {
        Self::undirected()
    }
}

impl<V: Vertex + std::fmt::Display> std::fmt::Display for AdjacencyGraph<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} graph {{", self.kind)?;
        for (i, (v, neighbors)) in self.entries().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, " {}: [", v)?;
            for (j, n) in neighbors.iter().enumerate() {
                if j > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", n)?;
            }
            write!(f, "]")?;
        }
        write!(f, " }}")
    }
}
