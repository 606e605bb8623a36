//! Vertices of the road network.

use serde::Serialize;

use super::edge::Edge;
use super::VertexId;

/// A named location (intersection, landmark) and its outgoing roads.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Vertex {
    /// Caller-chosen unique identity.
    pub id: VertexId,
    /// Display label, e.g. "Simpang A".
    pub label: String,
    /// Outgoing edges in insertion order.
    pub edges: Vec<Edge>,
}

impl Vertex {
    /// Create a vertex with no outgoing edges.
    pub fn new(id: VertexId, label: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
            edges: Vec::new(),
        }
    }

    /// Number of outgoing edges.
    pub fn out_degree(&self) -> usize {
        self.edges.len()
    }
}
