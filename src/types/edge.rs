//! Weighted directed edges.

use serde::Serialize;

use super::error::{GraphError, GraphResult};
use super::VertexId;

/// Edge weight (road length, travel time, ...). Always non-negative.
pub type Weight = u64;

/// A directed, weighted road segment. Owned by its source vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Edge {
    /// Vertex this edge leads to.
    pub target: VertexId,
    /// Cost of traversing the edge.
    pub weight: Weight,
}

impl Edge {
    /// Create an edge from a caller-supplied signed weight.
    /// Negative weights are rejected, not clamped.
    pub fn new(target: VertexId, weight: i64) -> GraphResult<Self> {
        let weight = Weight::try_from(weight).map_err(|_| GraphError::InvalidWeight(weight))?;
        Ok(Self { target, weight })
    }
}

impl std::fmt::Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "-> {}(w:{})", self.target, self.weight)
    }
}
