//! Fluent API for building Graph instances.

use crate::types::{GraphResult, VertexId};

use super::Graph;

/// Fluent builder for constructing a Graph.
///
/// Nothing is validated until `build`, which applies vertices first and
/// then edges, failing on the first invalid one.
#[derive(Debug, Clone, Default)]
pub struct GraphBuilder {
    vertices: Vec<(VertexId, String)>,
    edges: Vec<(VertexId, VertexId, i64)>,
}

impl GraphBuilder {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a location.
    pub fn vertex(&mut self, id: VertexId, label: impl Into<String>) -> &mut Self {
        self.vertices.push((id, label.into()));
        self
    }

    /// Add a one-way road.
    pub fn edge(&mut self, from: VertexId, to: VertexId, weight: i64) -> &mut Self {
        self.edges.push((from, to, weight));
        self
    }

    /// Add a two-way road (one edge per direction).
    pub fn road(&mut self, a: VertexId, b: VertexId, weight: i64) -> &mut Self {
        self.edge(a, b, weight).edge(b, a, weight)
    }

    /// Build the final Graph.
    pub fn build(&self) -> GraphResult<Graph> {
        let mut graph = Graph::with_capacity(self.vertices.len());
        for (id, label) in &self.vertices {
            graph.add_vertex(*id, label.clone())?;
        }
        for &(from, to, weight) in &self.edges {
            graph.add_edge(from, to, weight)?;
        }
        Ok(graph)
    }
}
