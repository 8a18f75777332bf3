//! Graph traversal algorithms (iterative DFS).

use std::collections::HashSet;

use crate::types::Vertex;

use super::AdjacencyGraph;

/// Every vertex reachable from `start`, `start` included.
///
/// Uses an explicit stack, so depth is bounded by memory rather than the
/// call stack. Each vertex is expanded at most once and each adjacency entry
/// is read once, so the cost is O(V + E) expected. A `start` that is not
/// in the graph has no neighbors and yields `{start}`.
pub fn transitive_closure<V: Vertex>(graph: &AdjacencyGraph<V>, start: &V) -> HashSet<V> {
    dfs_order(graph, start).into_iter().collect()
}

/// Vertices reachable from `start` in depth-first discovery order.
///
/// Neighbors are explored in adjacency-list order, matching what a
/// recursive DFS over the same lists would visit.
pub fn dfs_order<V: Vertex>(graph: &AdjacencyGraph<V>, start: &V) -> Vec<V> {
    let mut visited: HashSet<&V> = HashSet::new();
    let mut order: Vec<V> = Vec::new();
    let mut stack: Vec<&V> = vec![start];

    while let Some(current) = stack.pop() {
        if !visited.insert(current) {
            continue;
        }
        order.push(current.clone());

        // Reversed so the first listed neighbor is popped first.
        for neighbor in graph.neighbors(current).iter().rev() {
            if !visited.contains(neighbor) {
                stack.push(neighbor);
            }
        }
    }

    log::debug!("dfs from {:?} reached {} vertices", start, order.len());
    order
}
