//! Path command
use std::path::Path;
use std::time::Instant;

use crate::cli::{Cli, OutputFormat};
use stemma_core::edgelist;
use stemma_core::error::{Result, StemmaError};
use stemma_core::graph::{PathResult, Traversal};

/// Execute the path command
pub fn execute(
    cli: &Cli,
    graph_path: &Path,
    from: u64,
    to: u64,
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

    let found = match (order, recursive) {
        (Traversal::Breadth, _) => graph.breadth_first_search(from, to)?,
        (Traversal::Depth, false) => graph.depth_first_search(from, to)?,
        (Traversal::Depth, true) => graph.depth_first_search_recursive(from, to)?,
    };
    let result = PathResult::from_search(from, to, order, found);

    match cli.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
        OutputFormat::Human => output_path_human(&result),
    }

    Ok(())
}

fn output_path_human(result: &PathResult<u64>) {
    if result.found {
        let rendered: Vec<String> = result.path.iter().map(u64::to_string).collect();
        println!("{}", rendered.join(" -> "));
    } else {
        println!("no path found from {} to {}", result.from, result.to);
    }
}
