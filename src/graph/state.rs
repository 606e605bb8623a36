//! Per-run traversal state kept beside the graph, never on it.

use std::collections::{HashMap, HashSet};

use crate::types::{Distance, VertexId};

use super::Graph;

/// Visited flags and best-known distances for one algorithm run.
///
/// Every algorithm resets the state it is given before starting, so a
/// single `TraversalState` can be reused across runs without leaking
/// results from one into the next.
#[derive(Debug, Clone, Default)]
pub struct TraversalState {
    visited: HashSet<VertexId>,
    distances: HashMap<VertexId, Distance>,
}

impl TraversalState {
    /// Create an empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a state already reset for `graph`.
    pub fn for_graph(graph: &Graph) -> Self {
        let mut state = Self::new();
        state.reset(graph);
        state
    }

    /// Clear every visited flag and set every vertex of `graph` to
    /// `Unreachable`.
    pub fn reset(&mut self, graph: &Graph) {
        self.visited.clear();
        self.distances.clear();
        self.visited.reserve(graph.vertex_count());
        self.distances.reserve(graph.vertex_count());
        for id in graph.vertex_ids() {
            self.distances.insert(id, Distance::Unreachable);
        }
    }

    pub fn is_visited(&self, id: VertexId) -> bool {
        self.visited.contains(&id)
    }

    /// Mark a vertex visited. Returns false if it already was.
    pub fn mark_visited(&mut self, id: VertexId) -> bool {
        self.visited.insert(id)
    }

    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }

    /// Best-known distance; `Unreachable` for vertices never reached.
    pub fn distance(&self, id: VertexId) -> Distance {
        self.distances.get(&id).copied().unwrap_or_default()
    }

    pub fn set_distance(&mut self, id: VertexId, distance: Distance) {
        self.distances.insert(id, distance);
    }

    /// All tracked distances.
    pub fn distances(&self) -> &HashMap<VertexId, Distance> {
        &self.distances
    }
}
