//! CLI commands for stemma

pub mod ancestor;
pub mod path;
pub mod show;
pub mod walk;

use std::time::Instant;

use crate::cli::{Cli, Commands};
use stemma_core::error::Result;

/// Dispatch the parsed CLI invocation to its command handler
pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let result = match &cli.command {
        Commands::Show { graph } => show::execute(cli, graph),
        Commands::Walk {
            graph,
            start,
            order,
            recursive,
        } => walk::execute(cli, graph, *start, *order, *recursive),
        Commands::Path {
            graph,
            from,
            to,
            order,
            recursive,
        } => path::execute(cli, graph, *from, *to, *order, *recursive),
        Commands::Ancestor { pairs, start } => ancestor::execute(cli, pairs, *start),
    };

    tracing::debug!(elapsed = ?start.elapsed(), "dispatch");
    result
}
