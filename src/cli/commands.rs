//! CLI command implementations.

use std::path::Path;
use std::time::{Duration, Instant};

use crate::engine::{ConnectivityChecker, ConnectivityResult};
use crate::graph::{dfs_order, AdjacencyGraph};
use crate::input::GraphDocument;
use crate::samples::Sample;
use crate::types::{GraphKind, GraphResult, VertexLabel};

/// Everything a report needs about one checked document.
pub struct Analysis {
    /// The input as loaded.
    pub document: GraphDocument,
    /// The graph after the check (symmetrized for directed input).
    pub graph: AdjacencyGraph<VertexLabel>,
    /// The checker's verdict.
    pub result: ConnectivityResult<VertexLabel>,
    /// Time spent building and checking.
    pub elapsed: Duration,
    /// Depth-first discovery order from the start vertex, when requested.
    pub discovery: Option<Vec<VertexLabel>>,
}

/// Validate, build and check a document.
///
/// With `trace` set, the depth-first discovery order from the start vertex
/// is recorded as well. It is computed outside the timed section.
pub fn analyze(document: GraphDocument, trace: bool) -> GraphResult<Analysis> {
    let started = Instant::now();
    let mut graph = document.to_graph()?;
    let result = ConnectivityChecker::new().check(&mut graph, document.kind);
    let elapsed = started.elapsed();

    let discovery = match (&result.start, trace) {
        (Some(start), true) => Some(dfs_order(&graph, start)),
        _ => None,
    };

    Ok(Analysis {
        document,
        graph,
        result,
        elapsed,
        discovery,
    })
}

/// Check a graph document. Returns whether the graph is connected.
///
/// `kind` overrides the document's declared graph type.
pub fn cmd_check(
    path: &Path,
    kind: Option<GraphKind>,
    verbose: bool,
    json: bool,
) -> GraphResult<bool> {
    let mut document = GraphDocument::load(path)?;
    if let Some(kind) = kind {
        log::info!("overriding type {} with {}", document.kind, kind);
        document.kind = kind;
    }
    let analysis = analyze(document, verbose)?;

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&analysis_json(&analysis)).unwrap_or_default()
        );
    } else {
        print_analysis(&analysis);
    }
    Ok(analysis.result.connected)
}

/// Run only the input validator over a document.
pub fn cmd_validate(path: &Path, json: bool) -> GraphResult<()> {
    let document = GraphDocument::load(path)?;
    let outcome = document.validate();

    if json {
        let info = serde_json::json!({
            "file": path.display().to_string(),
            "name": document.name,
            "valid": outcome.is_ok(),
            "error": outcome.as_ref().err().map(|e| e.to_string()),
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&info).unwrap_or_default()
        );
    } else {
        match &outcome {
            Ok(()) => println!(
                "{}: valid ({} vertices, {} edges)",
                document.name,
                document.vertices.len(),
                document.edges.len()
            ),
            Err(e) => println!("{}: invalid ({})", document.name, e),
        }
    }
    outcome
}

/// Run every built-in sample and print a summary.
pub fn cmd_demo(verbose: bool, json: bool) -> GraphResult<()> {
    let mut analyses = Vec::with_capacity(Sample::ALL.len());
    for sample in Sample::ALL {
        analyses.push(analyze(sample.document(), verbose)?);
    }

    if json {
        let all: Vec<serde_json::Value> = analyses.iter().map(analysis_json).collect();
        println!(
            "{}",
            serde_json::to_string_pretty(&all).unwrap_or_default()
        );
        return Ok(());
    }

    for (i, analysis) in analyses.iter().enumerate() {
        if i > 0 {
            println!();
        }
        print_analysis(analysis);
    }

    println!("\nSummary:");
    for analysis in &analyses {
        println!(
            "  {} ({}): {}",
            analysis.document.name,
            analysis.document.kind,
            verdict(analysis.result.connected)
        );
    }
    Ok(())
}

/// Print the cost of each step of the check.
pub fn cmd_complexity(json: bool) -> GraphResult<()> {
    let steps: [(&str, &str, &str); 5] = [
        ("build", "O(V + E)", "both"),
        ("symmetrize", "O(V + E)", "directed"),
        ("closure", "O(V + E)", "both"),
        ("compare", "O(V)", "both"),
        ("total", "O(V + E)", "both"),
    ];

    if json {
        let rows: Vec<serde_json::Value> = steps
            .iter()
            .map(|(step, cost, applies)| {
                serde_json::json!({"step": step, "cost": cost, "applies_to": applies})
            })
            .collect();
        println!(
            "{}",
            serde_json::to_string_pretty(&rows).unwrap_or_default()
        );
    } else {
        println!("Cost per step (V = vertices, E = edges or arcs):");
        for (step, cost, applies) in steps {
            println!("  {:<11} {:<17} {}", step, cost, applies);
        }
        println!("Costs are expected: adjacency and visited set are hashed. Each vertex is expanded once.");
    }
    Ok(())
}

fn print_analysis(analysis: &Analysis) {
    let doc = &analysis.document;
    let result = &analysis.result;

    println!(
        "=== {} GRAPH: {} ===",
        doc.kind.name().to_uppercase(),
        doc.name
    );
    println!("Vertices (X): {}", format_set(doc.vertices.iter()));
    println!("Edges: {}", format_edges(&doc.edge_pairs()));
    if doc.kind.is_directed() {
        println!("Symmetrized: {}", analysis.graph);
    }
    match &result.start {
        Some(start) => println!("Start vertex: {}", start),
        None => println!("Start vertex: none"),
    }
    if let Some(discovery) = &analysis.discovery {
        println!("Discovery order: {}", format_order(discovery));
    }
    println!(
        "Transitive closure: {}",
        format_set(result.sorted_closure().into_iter())
    );
    println!("Closure == X? {}", result.connected);
    let unreached = result.unreached(&analysis.graph);
    if !unreached.is_empty() {
        println!("Unreached: {}", format_set(unreached.into_iter()));
    }
    println!("Result: {}", verdict(result.connected));
    println!("Elapsed: {}", format_duration(analysis.elapsed));
}

fn analysis_json(analysis: &Analysis) -> serde_json::Value {
    let doc = &analysis.document;
    let result = &analysis.result;
    let unreached = result.unreached(&analysis.graph);

    let mut info = serde_json::json!({
        "name": doc.name,
        "type": doc.kind.name(),
        "vertices": doc.vertices,
        "edges": doc.edges,
        "start": result.start,
        "closure": result.sorted_closure(),
        "connected": result.connected,
        "unreached": unreached,
        "elapsed_secs": analysis.elapsed.as_secs_f64(),
    });
    if doc.kind.is_directed() {
        let adjacency: serde_json::Map<String, serde_json::Value> = analysis
            .graph
            .adjacency()
            .iter()
            .map(|(v, neighbors)| (v.to_string(), serde_json::json!(neighbors)))
            .collect();
        info["symmetrized"] = serde_json::Value::Object(adjacency);
    }
    if let Some(discovery) = &analysis.discovery {
        info["discovery_order"] = serde_json::json!(discovery);
    }
    info
}

fn verdict(connected: bool) -> &'static str {
    if connected {
        "CONNECTED"
    } else {
        "DISCONNECTED"
    }
}

fn format_set<'a, I>(items: I) -> String
where
    I: Iterator<Item = &'a VertexLabel>,
{
    let parts: Vec<String> = items.map(|v| v.to_string()).collect();
    format!("{{{}}}", parts.join(", "))
}

fn format_order(order: &[VertexLabel]) -> String {
    let parts: Vec<String> = order.iter().map(|v| v.to_string()).collect();
    parts.join(" -> ")
}

fn format_edges(edges: &[(VertexLabel, VertexLabel)]) -> String {
    let parts: Vec<String> = edges
        .iter()
        .map(|(u, v)| format!("({}, {})", u, v))
        .collect();
    format!("[{}]", parts.join(", "))
}

fn format_duration(elapsed: Duration) -> String {
    format!("{:.6}s", elapsed.as_secs_f64())
}
