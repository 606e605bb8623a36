//! Network service: labelled reports over the graph algorithms.

use serde::Serialize;

use crate::graph::{bfs, dfs, shortest_paths, Graph, TraversalResult};
use crate::types::{Distance, Edge, GraphError, GraphResult, VertexId};

/// Which traversal to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TraversalKind {
    /// Level by level.
    BreadthFirst,
    /// Pre-order, deepest first.
    DepthFirst,
}

impl TraversalKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::BreadthFirst => "bfs",
            Self::DepthFirst => "dfs",
        }
    }
}

/// A vertex as shown to a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Location {
    pub id: VertexId,
    pub label: String,
}

/// One visited location.
#[derive(Debug, Clone, Serialize)]
pub struct Visit {
    pub id: VertexId,
    pub label: String,
    pub depth: u32,
}

/// Traversal output with labels.
#[derive(Debug, Clone, Serialize)]
pub struct VisitReport {
    pub kind: TraversalKind,
    pub start: VertexId,
    pub visits: Vec<Visit>,
}

/// Distance from the source to one location.
#[derive(Debug, Clone, Serialize)]
pub struct LocationDistance {
    pub id: VertexId,
    pub label: String,
    pub distance: Distance,
}

/// Shortest distances to every location, in vertex order.
#[derive(Debug, Clone, Serialize)]
pub struct DistanceReport {
    pub source: VertexId,
    pub distances: Vec<LocationDistance>,
}

/// Cheapest route between two locations.
#[derive(Debug, Clone, Serialize)]
pub struct RouteReport {
    pub from: VertexId,
    pub to: VertexId,
    /// `Unreachable` when there is no route; `stops` is then empty.
    pub distance: Distance,
    pub stops: Vec<Location>,
}

/// A location with its outgoing roads.
#[derive(Debug, Clone, Serialize)]
pub struct AdjacencyEntry {
    pub id: VertexId,
    pub label: String,
    pub edges: Vec<Edge>,
}

/// Read-only query facade over a road network.
pub struct NetworkService<'a> {
    graph: &'a Graph,
}

impl<'a> NetworkService<'a> {
    /// Create a service over `graph`.
    pub fn new(graph: &'a Graph) -> Self {
        Self { graph }
    }

    pub fn graph(&self) -> &'a Graph {
        self.graph
    }

    fn location(&self, id: VertexId) -> Location {
        Location {
            id,
            label: self.graph.label(id).to_string(),
        }
    }

    /// Every location with its outgoing roads, in vertex order.
    pub fn adjacency(&self) -> Vec<AdjacencyEntry> {
        self.graph
            .list_vertices()
            .iter()
            .map(|v| AdjacencyEntry {
                id: v.id,
                label: v.label.clone(),
                edges: v.edges.clone(),
            })
            .collect()
    }

    /// Run a traversal from `start`.
    pub fn traverse(&self, kind: TraversalKind, start: VertexId) -> GraphResult<VisitReport> {
        let result: TraversalResult = match kind {
            TraversalKind::BreadthFirst => bfs(self.graph, start)?,
            TraversalKind::DepthFirst => dfs(self.graph, start)?,
        };

        let visits = result
            .visited
            .iter()
            .map(|&id| Visit {
                id,
                label: self.graph.label(id).to_string(),
                depth: result.depth(id).unwrap_or(0),
            })
            .collect();

        Ok(VisitReport {
            kind,
            start,
            visits,
        })
    }

    /// Shortest distances from `source` to every location.
    pub fn distances(&self, source: VertexId) -> GraphResult<DistanceReport> {
        let sp = shortest_paths(self.graph, source)?;
        let distances = self
            .graph
            .list_vertices()
            .iter()
            .map(|v| LocationDistance {
                id: v.id,
                label: v.label.clone(),
                distance: sp.distance(v.id),
            })
            .collect();
        Ok(DistanceReport { source, distances })
    }

    /// Cheapest route from `from` to `to`.
    pub fn route(&self, from: VertexId, to: VertexId) -> GraphResult<RouteReport> {
        if !self.graph.contains(to) {
            return Err(GraphError::UnknownVertex(to));
        }
        let sp = shortest_paths(self.graph, from)?;

        let report = match sp.route_to(to) {
            Some(route) => RouteReport {
                from,
                to,
                distance: Distance::Finite(route.distance),
                stops: route.vertices.iter().map(|&id| self.location(id)).collect(),
            },
            None => RouteReport {
                from,
                to,
                distance: Distance::Unreachable,
                stops: Vec::new(),
            },
        };
        Ok(report)
    }
}
