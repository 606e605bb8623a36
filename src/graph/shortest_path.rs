//! Single-source shortest paths over non-negative weights.
//!
//! Dijkstra-style relaxation with lazy deletion: a relaxed vertex gets a
//! fresh frontier entry, and entries for vertices that were already
//! finalized are skipped when they come out of the frontier.

use std::collections::HashMap;

use serde::Serialize;

use crate::frontier::DistanceFrontier;
use crate::types::{Distance, GraphError, GraphResult, VertexId, Weight};

use super::{Graph, TraversalState};

/// Distances from one source to every vertex of the graph.
#[derive(Debug, Clone, Serialize)]
pub struct ShortestPaths {
    /// Source vertex.
    pub source: VertexId,
    /// Distance for every vertex; `Unreachable` if never finalized.
    pub distances: HashMap<VertexId, Distance>,
    /// Previous vertex on one shortest path, for every reachable vertex
    /// except the source.
    pub predecessors: HashMap<VertexId, VertexId>,
    /// Vertices in the order their distances became final.
    pub finalized: Vec<VertexId>,
}

/// A path from the source to one target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Route {
    /// Vertices from source to target, both included.
    pub vertices: Vec<VertexId>,
    /// Total weight along the route.
    pub distance: Weight,
}

impl ShortestPaths {
    /// Distance to `id`. Unknown vertices are `Unreachable`.
    pub fn distance(&self, id: VertexId) -> Distance {
        self.distances.get(&id).copied().unwrap_or_default()
    }

    pub fn is_reachable(&self, id: VertexId) -> bool {
        self.distance(id).is_reachable()
    }

    /// Number of vertices with a finite distance (source included).
    pub fn reachable_count(&self) -> usize {
        self.finalized.len()
    }

    /// Reconstruct the route to `target` by walking predecessors back to
    /// the source. `None` if `target` is unreachable.
    pub fn route_to(&self, target: VertexId) -> Option<Route> {
        let distance = self.distance(target).finite()?;
        let mut vertices = vec![target];
        let mut current = target;
        while current != self.source {
            current = *self.predecessors.get(&current)?;
            vertices.push(current);
        }
        vertices.reverse();
        Some(Route { vertices, distance })
    }
}

/// Shortest distances from `start` to every vertex.
pub fn shortest_paths(graph: &Graph, start: VertexId) -> GraphResult<ShortestPaths> {
    let mut state = TraversalState::new();
    shortest_paths_with_state(graph, start, &mut state)
}

/// Shortest distances reusing a caller-owned state. The state is reset
/// before the run.
pub fn shortest_paths_with_state(
    graph: &Graph,
    start: VertexId,
    state: &mut TraversalState,
) -> GraphResult<ShortestPaths> {
    if !graph.contains(start) {
        return Err(GraphError::UnknownVertex(start));
    }
    state.reset(graph);

    let mut frontier = DistanceFrontier::new();
    let mut predecessors: HashMap<VertexId, VertexId> = HashMap::new();
    let mut finalized: Vec<VertexId> = Vec::new();
    let mut stale = 0usize;

    state.set_distance(start, Distance::ZERO);
    frontier.insert(start, 0);

    while let Ok(entry) = frontier.extract_min() {
        let u = entry.vertex;
        if !state.mark_visited(u) {
            stale += 1;
            continue;
        }
        finalized.push(u);

        for edge in graph.edges_from(u) {
            if state.is_visited(edge.target) {
                continue;
            }
            let candidate = Distance::Finite(entry.distance.saturating_add(edge.weight));
            if candidate < state.distance(edge.target) {
                state.set_distance(edge.target, candidate);
                predecessors.insert(edge.target, u);
                frontier.insert(edge.target, entry.distance.saturating_add(edge.weight));
            }
        }
    }

    log::debug!(
        "shortest paths from {}: {} of {} vertices reachable, {} stale frontier entries",
        start,
        finalized.len(),
        graph.vertex_count(),
        stale
    );

    Ok(ShortestPaths {
        source: start,
        distances: state.distances().clone(),
        predecessors,
        finalized,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph(vertices: &[VertexId], edges: &[(VertexId, VertexId, i64)]) -> Graph {
        let mut g = Graph::new();
        for &v in vertices {
            g.add_vertex(v, format!("v{}", v)).unwrap();
        }
        for &(a, b, w) in edges {
            g.add_edge(a, b, w).unwrap();
        }
        g
    }

    #[test]
    fn test_prefers_cheaper_longer_path() {
        let g = graph(&[1, 2, 3], &[(1, 3, 10), (1, 2, 2), (2, 3, 3)]);
        let sp = shortest_paths(&g, 1).unwrap();
        assert_eq!(sp.distance(3), Distance::Finite(5));
        assert_eq!(
            sp.route_to(3),
            Some(Route { vertices: vec![1, 2, 3], distance: 5 })
        );
    }

    #[test]
    fn test_source_route() {
        let g = graph(&[1], &[]);
        let sp = shortest_paths(&g, 1).unwrap();
        assert_eq!(sp.distance(1), Distance::ZERO);
        assert_eq!(sp.route_to(1), Some(Route { vertices: vec![1], distance: 0 }));
    }

    #[test]
    fn test_unreachable_has_no_route() {
        let g = graph(&[1, 2], &[(2, 1, 1)]);
        let sp = shortest_paths(&g, 1).unwrap();
        assert_eq!(sp.distance(2), Distance::Unreachable);
        assert!(sp.route_to(2).is_none());
        assert_eq!(sp.reachable_count(), 1);
        assert_eq!(sp.distances.len(), 2);
    }

    #[test]
    fn test_zero_weight_edges() {
        let g = graph(&[1, 2, 3], &[(1, 2, 0), (2, 3, 0), (1, 3, 1)]);
        let sp = shortest_paths(&g, 1).unwrap();
        assert_eq!(sp.distance(3), Distance::ZERO);
        assert_eq!(sp.predecessors.get(&3), Some(&2));
    }

    #[test]
    fn test_finalization_is_nondecreasing() {
        let g = graph(
            &[1, 2, 3, 4, 5],
            &[(1, 2, 7), (1, 3, 2), (3, 2, 1), (2, 4, 1), (3, 5, 9), (4, 5, 1)],
        );
        let sp = shortest_paths(&g, 1).unwrap();
        let ds: Vec<Weight> = sp
            .finalized
            .iter()
            .map(|&v| sp.distance(v).finite().unwrap())
            .collect();
        assert!(ds.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(sp.distance(5), Distance::Finite(5));
    }

    #[test]
    fn test_unknown_start() {
        let g = graph(&[1], &[]);
        assert!(matches!(
            shortest_paths(&g, 2),
            Err(GraphError::UnknownVertex(2))
        ));
    }
}
