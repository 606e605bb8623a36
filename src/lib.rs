//! city-graph: in-memory road network graph.
//!
//! Models a city road network as a directed, weighted graph of locations and
//! answers connectivity (breadth-first and depth-first traversal) and
//! shortest-path queries.

pub mod cli;
pub mod engine;
pub mod format;
pub mod frontier;
pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use engine::{DistanceReport, NetworkService, RouteReport, TraversalKind, VisitReport};
pub use format::{NetworkFile, NetworkReader, NetworkWriter};
pub use frontier::{DistanceFrontier, FrontierEntry, FrontierQueue, QueueEntry};
pub use graph::{
    bfs, bfs_with_state, dfs, dfs_with_state, shortest_paths, shortest_paths_with_state, Graph,
    GraphBuilder, Route, ShortestPaths, TraversalResult, TraversalState,
};
pub use types::{Distance, Edge, GraphError, GraphResult, Vertex, VertexId, Weight};
