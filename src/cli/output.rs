//! Output format selection

use clap::ValueEnum;

/// Output format for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Line-oriented output for humans
    Human,
    /// Structured JSON for scripts
    Json,
}
