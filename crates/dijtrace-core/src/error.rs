//! Error types and exit codes for dijtrace
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (malformed edge list, out-of-range node, negative weight)

use thiserror::Error;

/// Exit codes for the dijtrace CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - bad graph input (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during dijtrace operations
#[derive(Error, Debug)]
pub enum DijtraceError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    // Data errors (exit code 3)
    #[error("graph must have at least one node (got {nodes})")]
    InvalidGraphSize { nodes: usize },

    #[error("line {line}: expected 'u v w', got: {content:?}")]
    MalformedEdge { line: usize, content: String },

    #[error("{context}: node {index} out of range 0..{nodes}")]
    OutOfRangeIndex {
        context: String,
        index: i64,
        nodes: usize,
    },

    #[error("negative weight on edge {from}->{to} (w={weight}): shortest-path run aborted")]
    NegativeWeight { from: usize, to: usize, weight: f64 },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl DijtraceError {
    /// Create an error for an edge or source/target node outside the graph
    pub fn out_of_range(context: &str, index: i64, nodes: usize) -> Self {
        DijtraceError::OutOfRangeIndex {
            context: context.to_string(),
            index,
            nodes,
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            // Usage errors
            DijtraceError::UnknownFormat(_) | DijtraceError::UsageError(_) => ExitCode::Usage,

            // Data errors
            DijtraceError::InvalidGraphSize { .. }
            | DijtraceError::MalformedEdge { .. }
            | DijtraceError::OutOfRangeIndex { .. }
            | DijtraceError::NegativeWeight { .. } => ExitCode::Data,

            // Generic failures
            DijtraceError::Io(_) | DijtraceError::Json(_) | DijtraceError::Other(_) => {
                ExitCode::Failure
            }
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            DijtraceError::UnknownFormat(_) => "unknown_format",
            DijtraceError::UsageError(_) => "usage_error",
            DijtraceError::InvalidGraphSize { .. } => "invalid_graph_size",
            DijtraceError::MalformedEdge { .. } => "malformed_edge",
            DijtraceError::OutOfRangeIndex { .. } => "out_of_range_index",
            DijtraceError::NegativeWeight { .. } => "negative_weight",
            DijtraceError::Io(_) => "io_error",
            DijtraceError::Json(_) => "json_error",
            DijtraceError::Other(_) => "other",
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

/// Result type alias for dijtrace operations
pub type Result<T> = std::result::Result<T, DijtraceError>;
