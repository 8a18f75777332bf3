//! Connectivity checker — reachability from one vertex versus the vertex set.

use std::collections::HashSet;

use serde::Serialize;

use crate::graph::{transitive_closure, AdjacencyGraph};
use crate::types::{GraphKind, Vertex};

/// Result of a connectivity check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConnectivityResult<V: Vertex> {
    /// True iff the closure equals the vertex set.
    pub connected: bool,
    /// Vertices reachable from `start`.
    pub closure: HashSet<V>,
    /// The vertex traversal started from. `None` only for an empty graph.
    pub start: Option<V>,
}

impl<V: Vertex> ConnectivityResult<V> {
    /// Vertices of `graph` the traversal did not reach, ascending.
    pub fn unreached<'a>(&self, graph: &'a AdjacencyGraph<V>) -> Vec<&'a V> {
        let mut missing: Vec<&V> = graph
            .vertices()
            .filter(|v| !self.closure.contains(*v))
            .collect();
        missing.sort();
        missing
    }

    /// The closure in ascending order, for reporting.
    pub fn sorted_closure(&self) -> Vec<&V> {
        let mut closure: Vec<&V> = self.closure.iter().collect();
        closure.sort();
        closure
    }
}

/// The connectivity checker.
///
/// Directed graphs are tested for weak connectivity: the graph is
/// symmetrized in place first, then treated like an undirected one.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConnectivityChecker;

impl ConnectivityChecker {
    /// Create a new checker.
    pub fn new() -> Self {
        Self
    }

    /// Check whether `graph` is connected under `mode`.
    ///
    /// With [`GraphKind::Directed`] this mutates `graph` by adding missing
    /// reverse arcs. The start vertex is the smallest vertex under `Ord`,
    /// found in one linear pass. An empty graph is reported as not
    /// connected, with an empty closure and no start.
    pub fn check<V: Vertex>(
        &self,
        graph: &mut AdjacencyGraph<V>,
        mode: GraphKind,
    ) -> ConnectivityResult<V> {
        let Some(start) = graph.first_vertex().cloned() else {
            log::debug!("empty graph: nothing to traverse");
            return ConnectivityResult {
                connected: false,
                closure: HashSet::new(),
                start: None,
            };
        };

        // Symmetrization never changes the vertex set, so `start` stays valid.
        if mode.is_directed() {
            graph.symmetrize();
        }

        log::debug!("checking {} graph from {:?}", mode, start);

        let closure = transitive_closure(graph, &start);
        let connected = closure.len() == graph.vertex_count()
            && closure.iter().all(|v| graph.contains_vertex(v));

        log::debug!(
            "closure covers {} of {} vertices",
            closure.len(),
            graph.vertex_count()
        );

        ConnectivityResult {
            connected,
            closure,
            start: Some(start),
        }
    }
}

/// Check connectivity with a default [`ConnectivityChecker`].
pub fn is_connected<V: Vertex>(
    graph: &mut AdjacencyGraph<V>,
    mode: GraphKind,
) -> ConnectivityResult<V> {
    ConnectivityChecker::new().check(graph, mode)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_graph_is_not_connected() {
        let mut g: AdjacencyGraph<u32> = AdjacencyGraph::undirected();
        let result = is_connected(&mut g, GraphKind::Undirected);
        assert!(!result.connected);
        assert!(result.closure.is_empty());
        assert_eq!(result.start, None);
    }

    #[test]
    fn start_is_smallest_vertex() {
        let mut g: AdjacencyGraph<u32> = AdjacencyGraph::undirected();
        g.add_edge(5, 3);
        g.add_vertex(9);
        let result = is_connected(&mut g, GraphKind::Undirected);
        assert_eq!(result.start, Some(3));
        assert!(!result.connected);
        assert_eq!(result.unreached(&g), vec![&9]);
    }

    #[test]
    fn start_ignores_insertion_order() {
        let mut g: AdjacencyGraph<u32> = AdjacencyGraph::undirected();
        for v in [8, 4, 6, 2, 7] {
            g.add_vertex(v);
        }
        g.add_edge(8, 2);
        let result = is_connected(&mut g, GraphKind::Undirected);
        assert_eq!(result.start, Some(2));
        assert_eq!(result.sorted_closure(), vec![&2, &8]);
        assert_eq!(result.unreached(&g), vec![&4, &6, &7]);
    }

    #[test]
    fn directed_mode_mutates_graph() {
        let mut g: AdjacencyGraph<u32> = AdjacencyGraph::directed();
        g.add_edge(2, 1);
        let result = is_connected(&mut g, GraphKind::Directed);
        assert!(result.connected);
        assert_eq!(g.neighbors(&1), &[2]);
    }

    #[test]
    fn directed_graph_checked_undirected_is_not_symmetrized() {
        let mut g: AdjacencyGraph<u32> = AdjacencyGraph::directed();
        g.add_edge(2, 1);
        let result = is_connected(&mut g, GraphKind::Undirected);
        assert!(!result.connected);
        assert!(g.neighbors(&1).is_empty());
    }
}
