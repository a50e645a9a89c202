//! Error types for the trailgraph library.

use thiserror::Error;

/// All errors that can occur in the trailgraph library.
///
/// Mutations whose preconditions are not met (duplicate vertex, arc between
/// unknown vertices, removing something absent) are not errors: they leave the
/// graph unchanged and report `false`.
#[derive(Error, Debug)]
pub enum GraphError {
    /// An operation referenced a vertex label that is not in the graph.
    #[error("Vertex {0} not found")]
    VertexNotFound(String),

    /// IO error (edge-list export, dataset read).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed dataset row.
    #[error("Parse error on line {line}: {reason}")]
    Parse { line: usize, reason: String },

    /// Remote story title lookup failed.
    #[error("Network error: {0}")]
    Network(String),

    /// Configuration file could not be read or parsed.
    #[error("Config error: {0}")]
    Config(String),
}

impl GraphError {
    /// Build a `VertexNotFound` from any debuggable label.
    pub fn not_found<T: std::fmt::Debug + ?Sized>(label: &T) -> Self {
        GraphError::VertexNotFound(format!("{:?}", label))
    }
}

/// Convenience result type for trailgraph operations.
pub type GraphResult<T> = Result<T, GraphError>;
