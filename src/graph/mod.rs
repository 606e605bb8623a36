//! In-memory graph operations: the core data structure and its algorithms.

pub mod builder;
pub mod road_graph;
pub mod shortest_path;
pub mod state;
pub mod traversal;

pub use builder::GraphBuilder;
pub use road_graph::Graph;
pub use shortest_path::{shortest_paths, shortest_paths_with_state, Route, ShortestPaths};
pub use state::TraversalState;
pub use traversal::{bfs, bfs_with_state, dfs, dfs_with_state, TraversalResult};
