//! Built-in example graphs.

use crate::input::GraphDocument;
use crate::types::{GraphKind, VertexLabel};

/// The example graphs shipped with the crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sample {
    /// Undirected 4-cycle A-B-C-D-A.
    Connected,
    /// Two undirected triangles x1-x2-x3 and x4-x5-x6.
    Disconnected,
    /// Directed x1..x6: a 3-cycle, a path x4->x5->x6 and the bridge x2->x4.
    DirectedWeak,
}

impl Sample {
    /// All samples, in demo order.
    pub const ALL: [Sample; 3] = [Self::Disconnected, Self::DirectedWeak, Self::Connected];

    /// Return a human-readable name for this sample.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Connected => "connected",
            Self::Disconnected => "disconnected",
            Self::DirectedWeak => "directed_weak",
        }
    }

    /// Whether the sample holds edges or arcs.
    pub fn kind(&self) -> GraphKind {
        match self {
            Self::DirectedWeak => GraphKind::Directed,
            Self::Connected | Self::Disconnected => GraphKind::Undirected,
        }
    }

    /// The sample as a document.
    pub fn document(&self) -> GraphDocument {
        let (vertices, edges) = sample_graph(*self);
        GraphDocument::new(self.name(), self.kind(), vertices, edges)
    }
}

type EdgeList = Vec<(VertexLabel, VertexLabel)>;

const CYCLE_VERTICES: &[&str] = &["A", "B", "C", "D"];
const CYCLE_EDGES: &[(&str, &str)] = &[("A", "B"), ("B", "C"), ("C", "D"), ("D", "A")];

const SIX_VERTICES: &[&str] = &["x1", "x2", "x3", "x4", "x5", "x6"];
const TRIANGLE_EDGES: &[(&str, &str)] = &[
    ("x1", "x2"),
    ("x2", "x3"),
    ("x3", "x1"),
    ("x4", "x5"),
    ("x5", "x6"),
    ("x6", "x4"),
];
const BRIDGED_ARCS: &[(&str, &str)] = &[
    ("x1", "x2"),
    ("x2", "x3"),
    ("x3", "x1"),
    ("x4", "x5"),
    ("x5", "x6"),
    ("x2", "x4"),
];

/// Vertex and edge lists for a sample.
pub fn sample_graph(sample: Sample) -> (Vec<VertexLabel>, EdgeList) {
    let (vertices, edges) = match sample {
        Sample::Connected => (CYCLE_VERTICES, CYCLE_EDGES),
        Sample::Disconnected => (SIX_VERTICES, TRIANGLE_EDGES),
        Sample::DirectedWeak => (SIX_VERTICES, BRIDGED_ARCS),
    };

    (
        vertices.iter().map(|&v| v.into()).collect(),
        edges.iter().map(|&(u, v)| (u.into(), v.into())).collect(),
    )
}
