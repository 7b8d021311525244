//! Show command
use std::path::Path;

use crate::cli::{Cli, OutputFormat};
use stemma_core::edgelist;
use stemma_core::error::Result;
use stemma_core::graph::DiGraph;

/// Execute the show command
pub fn execute(cli: &Cli, graph_path: &Path) -> Result<()> {
    let graph = edgelist::load_graph(graph_path)?;

    match cli.format {
        OutputFormat::Json => output_show_json(&graph)?,
        OutputFormat::Human => output_show_human(cli, &graph),
    }

    Ok(())
}

fn sorted_entries(graph: &DiGraph<u64>) -> Vec<(u64, Vec<u64>)> {
    let mut entries: Vec<(u64, Vec<u64>)> = graph
        .iter()
        .map(|(id, neighbors)| (id, neighbors.iter().copied().collect()))
        .collect();
    entries.sort_by_key(|(id, _)| *id);
    entries
}

fn output_show_json(graph: &DiGraph<u64>) -> Result<()> {
    let mut vertices = serde_json::Map::new();
    for (id, neighbors) in sorted_entries(graph) {
        vertices.insert(id.to_string(), serde_json::json!(neighbors));
    }
    let value = serde_json::json!({
        "vertex_count": graph.vertex_count(),
        "edge_count": graph.edge_count(),
        "vertices": vertices,
    });
    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}

fn output_show_human(cli: &Cli, graph: &DiGraph<u64>) {
    for (id, neighbors) in sorted_entries(graph) {
        if neighbors.is_empty() {
            println!("{}", id);
        } else {
            let rendered: Vec<String> = neighbors.iter().map(u64::to_string).collect();
            println!("{} -> {}", id, rendered.join(" "));
        }
    }
    if !cli.quiet {
        eprintln!(
            "{} vertices, {} edges",
            graph.vertex_count(),
            graph.edge_count()
        );
    }
}
