//! Error types and exit codes for stemma
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (missing vertex, invalid edge list, missing input file)

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes per stemma convention
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - missing vertex, invalid input (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during stemma operations
#[derive(Error, Debug)]
pub enum StemmaError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("--format may only be specified once")]
    DuplicateFormat,

    #[error("{0}")]
    UsageError(String),

    // Data errors (exit code 3)
    #[error("vertex does not exist in graph: {id}")]
    MissingVertex { id: String },

    #[error("invalid edge list at line {line}: {reason}")]
    InvalidEdgeList { line: usize, reason: String },

    #[error("input file not found: {path:?}")]
    InputNotFound { path: PathBuf },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl StemmaError {
    /// Create an error for an edge or query referencing an unregistered vertex
    pub fn missing_vertex(id: impl fmt::Display) -> Self {
        StemmaError::MissingVertex { id: id.to_string() }
    }

    /// Create an error for a malformed edge-list line
    pub fn invalid_edge_list(line: usize, reason: impl fmt::Display) -> Self {
        StemmaError::InvalidEdgeList {
            line,
            reason: reason.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            StemmaError::UnknownFormat(_)
            | StemmaError::DuplicateFormat
            | StemmaError::UsageError(_) => ExitCode::Usage,

            StemmaError::MissingVertex { .. }
            | StemmaError::InvalidEdgeList { .. }
            | StemmaError::InputNotFound { .. } => ExitCode::Data,

            StemmaError::Io(_) | StemmaError::Json(_) | StemmaError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier used in JSON error envelopes
    fn error_type(&self) -> &'static str {
        match self {
            StemmaError::UnknownFormat(_) => "unknown_format",
            StemmaError::DuplicateFormat => "duplicate_format",
            StemmaError::UsageError(_) => "usage_error",
            StemmaError::MissingVertex { .. } => "missing_vertex",
            StemmaError::InvalidEdgeList { .. } => "invalid_edge_list",
            StemmaError::InputNotFound { .. } => "input_not_found",
            StemmaError::Io(_) => "io_error",
            StemmaError::Json(_) => "json_error",
            StemmaError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for stemma operations
pub type Result<T> = std::result::Result<T, StemmaError>;
