//! Error types for reordering operations.

use miette::Diagnostic;
use thiserror::Error;

/// Result type for reordering operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while ordering a graph.
///
/// Every error is a precondition violation detected before any per-vertex
/// state is allocated, so a failed call never exposes a partial ordering.
#[derive(Error, Debug, Clone, PartialEq, Eq, Diagnostic)]
pub enum Error {
    /// The operation was invoked with a vertex outside the graph, an empty
    /// graph, or inputs that do not describe the same graph.
    #[error("Invalid graph: {message}")]
    #[diagnostic(code(sloan_ordering::graph::invalid))]
    InvalidGraph {
        /// Human-readable description of the violated precondition.
        message: String,
    },

    /// An external vertex key has no internal index in the graph.
    #[error("Vertex '{key}' is not part of the graph")]
    #[diagnostic(code(sloan_ordering::graph::unknown_vertex))]
    UnknownVertex {
        /// The key that was looked up, rendered with `Debug`.
        key: String,
    },
}

impl Error {
    /// Create an invalid graph error with a message.
    pub fn invalid_graph(message: impl Into<String>) -> Self {
        Self::InvalidGraph {
            message: message.into(),
        }
    }

    /// Create an error for a vertex index that does not belong to a graph
    /// with `vertex_count` vertices.
    #[must_use]
    pub fn vertex_out_of_range(vertex: usize, vertex_count: usize) -> Self {
        Self::invalid_graph(format!(
            "vertex {vertex} does not belong to a graph with {vertex_count} vertices"
        ))
    }

    /// Create the error reported for graphs without vertices.
    #[must_use]
    pub fn empty_graph() -> Self {
        Self::invalid_graph("graph has no vertices")
    }

    /// Create an unknown vertex error for an external key.
    pub fn unknown_vertex(key: &impl std::fmt::Debug) -> Self {
        Self::UnknownVertex {
            key: format!("{key:?}"),
        }
    }

    /// Returns true when this is an [`Error::InvalidGraph`].
    #[must_use]
    pub fn is_invalid_graph(&self) -> bool {
        matches!(self, Self::InvalidGraph { .. })
    }
}
