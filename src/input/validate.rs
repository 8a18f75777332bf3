//! Input validator: edges must be pairs drawn from the declared vertex set.

use std::collections::HashSet;
use std::fmt::Display;

use crate::types::{GraphError, GraphResult, Vertex, EDGE_ARITY};

/// Check a vertex list and edge list before graph construction.
///
/// Fails on an empty vertex set, on an edge that is not exactly a pair, and
/// on an endpoint missing from `vertices`. Edges are checked in order and
/// the first offender is reported with its index.
pub fn validate_input<V, E>(vertices: &[V], edges: &[E]) -> GraphResult<()>
where
    V: Vertex + Display,
    E: AsRef<[V]>,
{
    if vertices.is_empty() {
        return Err(GraphError::EmptyVertexSet);
    }

    let known: HashSet<&V> = vertices.iter().collect();

    for (index, edge) in edges.iter().enumerate() {
        let endpoints = edge.as_ref();
        if endpoints.len() != EDGE_ARITY {
            return Err(GraphError::MalformedEdge {
                index,
                arity: endpoints.len(),
            });
        }
        if let Some(missing) = endpoints.iter().find(|v| !known.contains(v)) {
            return Err(GraphError::UnknownVertex {
                index,
                vertex: missing.to_string(),
            });
        }
    }

    Ok(())
}

/// Boolean form of [`validate_input`].
pub fn is_valid_input<V, E>(vertices: &[V], edges: &[E]) -> bool
where
    V: Vertex + Display,
    E: AsRef<[V]>,
{
    match validate_input(vertices, edges) {
        Ok(()) => true,
        Err(e) => {
            log::debug!("invalid input: {}", e);
            false
        }
    }
}
