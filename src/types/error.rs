//! Error types for the graph-model library.

use thiserror::Error;

/// All errors that can occur in the graph-model library.
#[derive(Error, Debug)]
pub enum GraphError {
    /// An edge endpoint is missing from the adjacency matrix order.
    #[error("Node {0} is not present in the adjacency order")]
    UnknownNode(String),

    /// An edge was given fewer than two nodes.
    #[error("Edge needs at least two nodes, got {0}")]
    EdgeTooShort(usize),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience result type for graph-model operations.
pub type GraphResult<T> = Result<T, GraphError>;
