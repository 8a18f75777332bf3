//! Phase 3 tests: graph documents and input validation.

use std::io::Write;

use tempfile::NamedTempFile;

use graph_connectivity::input::{is_valid_input, validate_input, GraphDocument};
use graph_connectivity::samples::{sample_graph, Sample};
use graph_connectivity::types::{GraphError, GraphKind, VertexLabel};

// ==================== Helpers ====================

fn write_doc(json: &str) -> NamedTempFile {
    let mut tmp = NamedTempFile::new().unwrap();
    tmp.write_all(json.as_bytes()).unwrap();
    tmp.flush().unwrap();
    tmp
}

// ==================== Validator Tests ====================

#[test]
fn test_validate_accepts_samples() {
    for sample in Sample::ALL {
        let doc = sample.document();
        assert!(doc.validate().is_ok(), "{} should be valid", sample.name());
    }
}

#[test]
fn test_validate_reports_first_bad_edge() {
    let vertices = vec![VertexLabel::from("A"), VertexLabel::from("B")];
    let edges = vec![
        vec![VertexLabel::from("A"), VertexLabel::from("B")],
        vec![VertexLabel::from("B"), VertexLabel::from("C")],
        vec![VertexLabel::from("D"), VertexLabel::from("A")],
    ];
    match validate_input(&vertices, &edges) {
        Err(GraphError::UnknownVertex { index, vertex }) => {
            assert_eq!(index, 1);
            assert_eq!(vertex, "C");
        }
        other => panic!("Expected UnknownVertex, got {:?}", other),
    }
    assert!(!is_valid_input(&vertices, &edges));
}

#[test]
fn test_validate_integer_ids() {
    assert!(is_valid_input(&[1, 2, 3], &[[1, 2], [2, 3]]));
    assert!(!is_valid_input(&[1, 2], &[[1, 2], [2, 3]]));
}

#[test]
fn test_error_messages() {
    let err = GraphError::MalformedEdge { index: 4, arity: 3 };
    assert_eq!(err.to_string(), "Edge 4 has 3 endpoints, expected 2");
    let err = GraphError::UnknownVertex {
        index: 0,
        vertex: "q".to_string(),
    };
    assert_eq!(err.to_string(), "Edge 0 references unknown vertex q");
    assert_eq!(GraphError::EmptyVertexSet.to_string(), "Vertex set is empty");
}

// ==================== Document Tests ====================

#[test]
fn test_load_document_from_file() {
    let tmp = write_doc(
        r#"{
            "name": "square",
            "type": "undirected",
            "vertices": ["A", "B", "C", "D"],
            "edges": [["A", "B"], ["B", "C"], ["C", "D"], ["D", "A"]]
        }"#,
    );
    let doc = GraphDocument::load(tmp.path()).unwrap();
    assert_eq!(doc.name, "square");
    assert_eq!(doc.kind, GraphKind::Undirected);
    assert_eq!(doc.vertices.len(), 4);

    let (vertices, edges) = sample_graph(Sample::Connected);
    assert_eq!(doc.vertices, vertices);
    assert_eq!(doc.edge_pairs(), edges);
}

#[test]
fn test_name_defaults_to_file_stem() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("road_map.json");
    std::fs::write(
        &path,
        r#"{"type": "directed", "vertices": [1, 2], "edges": [[1, 2]]}"#,
    )
    .unwrap();

    let doc = GraphDocument::load(&path).unwrap();
    assert_eq!(doc.name, "road_map");
    assert_eq!(doc.kind, GraphKind::Directed);
    assert_eq!(doc.vertices, vec![VertexLabel::Int(1), VertexLabel::Int(2)]);
}

#[test]
fn test_load_source_format() {
    let tmp = write_doc(
        r#"{"nome": "orig", "tipo": "nao_orientado", "vertices": ["a", "b"], "ligacoes": [["a", "b"]]}"#,
    );
    let doc = GraphDocument::load(tmp.path()).unwrap();
    assert_eq!(doc.name, "orig");
    assert_eq!(doc.kind, GraphKind::Undirected);
    assert_eq!(doc.edges.len(), 1);
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = GraphDocument::load(&dir.path().join("absent.json"));
    assert!(matches!(result, Err(GraphError::Io(_))));
}

#[test]
fn test_bad_json_is_json_error() {
    let tmp = write_doc("{ not json");
    assert!(matches!(
        GraphDocument::load(tmp.path()),
        Err(GraphError::Json(_))
    ));
}

#[test]
fn test_to_graph_rejects_unknown_vertex() {
    let doc = GraphDocument::from_json_str(
        r#"{"type": "undirected", "vertices": ["A"], "edges": [["A", "B"]]}"#,
    )
    .unwrap();
    assert!(matches!(
        doc.to_graph(),
        Err(GraphError::UnknownVertex { index: 0, .. })
    ));
}

#[test]
fn test_to_graph_rejects_empty_vertex_set() {
    let doc =
        GraphDocument::from_json_str(r#"{"type": "undirected", "vertices": []}"#).unwrap();
    assert!(matches!(doc.to_graph(), Err(GraphError::EmptyVertexSet)));
}

#[test]
fn test_to_graph_builds_kind() {
    let graph = Sample::DirectedWeak.document().to_graph().unwrap();
    assert!(graph.is_directed());
    assert_eq!(graph.vertex_count(), 6);
    assert_eq!(graph.entry_count(), 6);
}

#[test]
fn test_document_serializes_with_type_field() {
    let doc = GraphDocument::new(
        "pair",
        GraphKind::Directed,
        vec![VertexLabel::Int(1), VertexLabel::from("b")],
        vec![(VertexLabel::Int(1), VertexLabel::from("b"))],
    );
    let value = serde_json::to_value(&doc).unwrap();
    assert_eq!(value["type"], "directed");
    assert_eq!(value["edges"], serde_json::json!([[1, "b"]]));

    let back: GraphDocument = serde_json::from_value(value).unwrap();
    assert_eq!(back, doc);
}
