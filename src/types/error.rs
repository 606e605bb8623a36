//! Error types for the city-graph library.

use thiserror::Error;

use super::VertexId;

/// All errors that can occur in the city-graph library.
#[derive(Error, Debug)]
pub enum GraphError {
    /// A vertex with this ID is already in the graph.
    #[error("Vertex ID {0} already exists")]
    DuplicateVertex(VertexId),

    /// An edge endpoint or algorithm start refers to an absent vertex.
    #[error("Unknown vertex ID: {0}")]
    UnknownVertex(VertexId),

    /// Lookup of an absent vertex.
    #[error("Vertex ID {0} not found")]
    NotFound(VertexId),

    /// Edge weight is negative.
    #[error("Edge weight must be non-negative: {0}")]
    InvalidWeight(i64),

    /// Extraction from an empty queue or frontier.
    #[error("Container is empty")]
    Empty,

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Network description could not be parsed.
    #[error("Invalid network description: {0}")]
    Parse(String),
}

impl From<serde_json::Error> for GraphError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

/// Convenience result type for city-graph operations.
pub type GraphResult<T> = Result<T, GraphError>;
