//! Ancestor command
use std::path::Path;
use std::time::Instant;

use crate::cli::{Cli, OutputFormat};
use stemma_core::ancestry::{self, AncestorResult};
use stemma_core::edgelist;
use stemma_core::error::Result;

/// Execute the ancestor command
pub fn execute(cli: &Cli, pairs_path: &Path, start: u64) -> Result<()> {
    let t0 = Instant::now();

    let pairs = edgelist::load_pairs(pairs_path)?;

    if cli.verbose {
        tracing::debug!(elapsed = ?t0.elapsed(), pairs = pairs.len(), "load_pairs");
    }

    let ancestor = ancestry::earliest_ancestor(&pairs, start)?;
    let result = AncestorResult::new(start, ancestor);

    match cli.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
        OutputFormat::Human => match result.ancestor {
            Some(id) => println!("{}", id),
            // The reference sentinel for "no ancestor found".
            None => println!("-1"),
        },
    }

    Ok(())
}
