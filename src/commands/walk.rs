//! Walk command
use std::path::Path;
use std::time::Instant;

use crate::cli::{Cli, OutputFormat};
use stemma_core::edgelist;
use stemma_core::error::{Result, StemmaError};
use stemma_core::graph::{Traversal, WalkResult};

/// Execute the walk command
pub fn execute(
    cli: &Cli,
    graph_path: &Path,
    start: u64,
    order: Traversal,
    recursive: bool,
) -> Result<()> {
    let t0 = Instant::now();

    if recursive && order == Traversal::Breadth {
        return Err(StemmaError::UsageError(
            "--recursive requires --order depth".to_string(),
        ));
    }

    let graph = edgelist::load_graph(graph_path)?;

    if cli.verbose {
        tracing::debug!(
            elapsed = ?t0.elapsed(),
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            "load_graph"
        );
    }

    let visited = match (order, recursive) {
        (Traversal::Breadth, _) => graph.breadth_first_walk(start)?.collect(),
        (Traversal::Depth, false) => graph.depth_first_walk(start)?.collect(),
        (Traversal::Depth, true) => graph.depth_first_walk_recursive(start)?,
    };
    let result = WalkResult::new(start, order, recursive, visited);

    match cli.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
        OutputFormat::Human => {
            for vertex in &result.visited {
                println!("{}", vertex);
            }
        }
    }

    Ok(())
}
