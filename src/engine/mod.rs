//! High-level operations: the network query service.

pub mod network;

pub use network::{
    AdjacencyEntry, DistanceReport, Location, LocationDistance, NetworkService, RouteReport,
    TraversalKind, Visit, VisitReport,
};
