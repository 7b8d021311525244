//! CLI argument parsing for stemma
//!
//! Uses clap for argument parsing.
//! Supports global flags: --format, --quiet, --verbose, --log-level, --log-json

pub mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use output::OutputFormat;
use stemma_core::graph::Traversal;

/// Stemma - directed-graph traversal and ancestry CLI
#[derive(Parser, Debug)]
#[command(name = "stemma")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Report timing for major phases
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the adjacency of a graph file
    Show {
        /// Edge-list graph file
        #[arg(long, value_name = "FILE")]
        graph: PathBuf,
    },

    /// Visit every vertex reachable from a start vertex
    Walk {
        /// Edge-list graph file
        #[arg(long, value_name = "FILE")]
        graph: PathBuf,

        /// Start vertex
        #[arg(long)]
        start: u64,

        /// Visit order (breadth, depth)
        #[arg(long, default_value = "breadth")]
        order: Traversal,

        /// Use the recursive depth-first variant
        #[arg(long)]
        recursive: bool,
    },

    /// Find a path between two vertices
    Path {
        /// Edge-list graph file
        #[arg(long, value_name = "FILE")]
        graph: PathBuf,

        /// Start vertex
        #[arg(long)]
        from: u64,

        /// Destination vertex
        #[arg(long)]
        to: u64,

        /// Search order (breadth finds a hop-count shortest path)
        #[arg(long, default_value = "breadth")]
        order: Traversal,

        /// Use the recursive depth-first variant
        #[arg(long)]
        recursive: bool,
    },

    /// Resolve the earliest ancestor of a node from (parent, child) pairs
    Ancestor {
        /// Relationship pair file, one `PARENT CHILD` per line
        #[arg(long, value_name = "FILE")]
        pairs: PathBuf,

        /// Node whose earliest ancestor to resolve
        #[arg(long)]
        start: u64,
    },
}
