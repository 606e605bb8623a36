//! Core graph structure: vertices with their outgoing weighted edges.

use std::collections::HashMap;

use crate::types::{Edge, GraphError, GraphResult, Vertex, VertexId};

/// Directed, weighted road network.
///
/// Vertices are stored in insertion order with an ID index on the side.
/// Edges are owned by their source vertex and always point at a vertex of
/// the same graph: `add_edge` rejects absent endpoints.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    /// All vertices, in insertion order.
    vertices: Vec<Vertex>,
    /// ID -> position in `vertices`.
    index: HashMap<VertexId, usize>,
    /// Total number of directed edges.
    edge_count: usize,
}

impl Graph {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-allocate for a known number of vertices.
    pub fn with_capacity(vertex_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            index: HashMap::with_capacity(vertex_count),
            edge_count: 0,
        }
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of directed edges.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn contains(&self, id: VertexId) -> bool {
        self.index.contains_key(&id)
    }

    /// Add a vertex with no outgoing edges.
    pub fn add_vertex(&mut self, id: VertexId, label: impl Into<String>) -> GraphResult<()> {
        if self.contains(id) {
            log::debug!("rejected duplicate vertex {}", id);
            return Err(GraphError::DuplicateVertex(id));
        }
        let vertex = Vertex::new(id, label);
        log::debug!("added vertex {} ({})", id, vertex.label);
        self.index.insert(id, self.vertices.len());
        self.vertices.push(vertex);
        Ok(())
    }

    /// Add a directed edge `from -> to`. Both vertices must exist and the
    /// weight must be non-negative; on error nothing is added.
    pub fn add_edge(&mut self, from: VertexId, to: VertexId, weight: i64) -> GraphResult<()> {
        let edge = Edge::new(to, weight)?;
        if !self.contains(to) {
            return Err(GraphError::UnknownVertex(to));
        }
        let source = self.vertex_mut(from)?;
        source.edges.push(edge);
        self.edge_count += 1;
        log::debug!("added edge {} -> {} (w:{})", from, to, edge.weight);
        Ok(())
    }

    /// Add a two-way road: `a -> b` and `b -> a` with the same weight.
    /// Either both edges are added or neither.
    pub fn add_road(&mut self, a: VertexId, b: VertexId, weight: i64) -> GraphResult<()> {
        Edge::new(b, weight)?;
        for id in [a, b] {
            if !self.contains(id) {
                return Err(GraphError::UnknownVertex(id));
            }
        }
        self.add_edge(a, b, weight)?;
        self.add_edge(b, a, weight)
    }

    /// Look up a vertex.
    pub fn find_vertex(&self, id: VertexId) -> GraphResult<&Vertex> {
        self.get_vertex(id).ok_or(GraphError::NotFound(id))
    }

    /// Look up a vertex, `None` if absent.
    pub fn get_vertex(&self, id: VertexId) -> Option<&Vertex> {
        self.index.get(&id).map(|&idx| &self.vertices[idx])
    }

    fn vertex_mut(&mut self, id: VertexId) -> GraphResult<&mut Vertex> {
        match self.index.get(&id) {
            Some(&idx) => Ok(&mut self.vertices[idx]),
            None => Err(GraphError::UnknownVertex(id)),
        }
    }

    /// Label of a vertex, empty if absent.
    pub fn label(&self, id: VertexId) -> &str {
        self.get_vertex(id).map(|v| v.label.as_str()).unwrap_or("")
    }

    /// Outgoing edges of a vertex; empty for absent vertices.
    pub fn edges_from(&self, id: VertexId) -> &[Edge] {
        self.get_vertex(id)
            .map(|v| v.edges.as_slice())
            .unwrap_or(&[])
    }

    /// All vertices in insertion order.
    pub fn list_vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Outgoing edges of an existing vertex.
    pub fn list_edges(&self, id: VertexId) -> GraphResult<&[Edge]> {
        self.find_vertex(id).map(|v| v.edges.as_slice())
    }

    /// Vertex IDs in insertion order.
    pub fn vertex_ids(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.vertices.iter().map(|v| v.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Graph {
        let mut g = Graph::new();
        g.add_vertex(1, "Simpang A").unwrap();
        g.add_vertex(2, "Simpang B").unwrap();
        g.add_vertex(3, "Kantor Walikota").unwrap();
        g
    }

    #[test]
    fn test_add_vertex() {
        let g = sample();
        assert_eq!(g.vertex_count(), 3);
        assert_eq!(g.find_vertex(2).unwrap().label, "Simpang B");
        assert_eq!(g.label(3), "Kantor Walikota");
        assert_eq!(g.vertex_ids().collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn test_duplicate_vertex_keeps_original() {
        let mut g = sample();
        match g.add_vertex(1, "Other") {
            Err(GraphError::DuplicateVertex(1)) => {}
            other => panic!("Expected DuplicateVertex, got {:?}", other),
        }
        assert_eq!(g.vertex_count(), 3);
        assert_eq!(g.label(1), "Simpang A");
    }

    #[test]
    fn test_edges_keep_insertion_order() {
        let mut g = sample();
        g.add_edge(1, 2, 5).unwrap();
        g.add_edge(1, 3, 0).unwrap();
        let targets: Vec<VertexId> = g.list_edges(1).unwrap().iter().map(|e| e.target).collect();
        assert_eq!(targets, vec![2, 3]);
        assert_eq!(g.edge_count(), 2);
        assert!(g.edges_from(2).is_empty());
    }

    #[test]
    fn test_edge_unknown_endpoint() {
        let mut g = sample();
        assert!(matches!(g.add_edge(9, 1, 1), Err(GraphError::UnknownVertex(9))));
        assert!(matches!(g.add_edge(1, 9, 1), Err(GraphError::UnknownVertex(9))));
        assert_eq!(g.edge_count(), 0);
        assert!(g.edges_from(1).is_empty());
    }

    #[test]
    fn test_negative_weight() {
        let mut g = sample();
        assert!(matches!(g.add_edge(1, 2, -1), Err(GraphError::InvalidWeight(-1))));
        assert_eq!(g.edge_count(), 0);
    }

    #[test]
    fn test_road_is_atomic() {
        let mut g = sample();
        g.add_road(1, 2, 4).unwrap();
        assert_eq!(g.edge_count(), 2);
        assert_eq!(g.edges_from(2)[0].target, 1);

        assert!(g.add_road(3, 42, 1).is_err());
        assert!(g.add_road(3, 1, -2).is_err());
        assert_eq!(g.edge_count(), 2);
        assert!(g.edges_from(3).is_empty());
    }

    #[test]
    fn test_find_missing() {
        let g = sample();
        assert!(matches!(g.find_vertex(99), Err(GraphError::NotFound(99))));
        assert!(g.get_vertex(99).is_none());
        assert!(g.list_edges(99).is_err());
    }
}
