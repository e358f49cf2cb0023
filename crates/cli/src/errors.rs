//! CLI error types rendered through miette.

use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the `sloan` command.
#[derive(Error, Debug, Diagnostic)]
pub enum CliError {
    /// The edge list could not be read.
    #[error("Failed to read edge list {}", path.display())]
    #[diagnostic(
        code(sloan::cli::file_error),
        help("Check file permissions and ensure the path exists")
    )]
    FileError {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A line of the edge list is malformed.
    #[error("Line {line}: {message}")]
    #[diagnostic(
        code(sloan::cli::parse_error),
        help("Expected `source,target[,cost]` or `id,source,target,cost` per line")
    )]
    ParseError {
        /// One-based line number.
        line: usize,
        /// What was wrong with the line.
        message: String,
    },

    /// The edge list yielded no edges.
    #[error("Edge list contains no edges")]
    #[diagnostic(code(sloan::cli::empty_input))]
    EmptyInput,

    /// The reordering itself failed.
    #[error(transparent)]
    #[diagnostic(transparent)]
    Ordering(#[from] sloan_ordering::Error),

    /// The report could not be serialized.
    #[error("Failed to render JSON report")]
    #[diagnostic(code(sloan::cli::json_error))]
    Json(#[from] serde_json::Error),

    /// Tracing could not be initialized.
    #[error("Tracing initialization failed: {message}")]
    #[diagnostic(
        code(sloan::cli::tracing_error),
        help("Check the RUST_LOG environment variable")
    )]
    TracingError {
        /// Description of the failure.
        message: String,
    },
}

impl CliError {
    /// Create a file error for `path`.
    pub fn file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileError {
            path: path.into(),
            source,
        }
    }

    /// Create a parse error for a one-based line number.
    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::ParseError {
            line,
            message: message.into(),
        }
    }
}

/// Result type for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;
