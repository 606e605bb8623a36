//! All data types for the city-graph library.

pub mod distance;
pub mod edge;
pub mod error;
pub mod vertex;

pub use distance::Distance;
pub use edge::{Edge, Weight};
pub use error::{GraphError, GraphResult};
pub use vertex::Vertex;

/// Caller-chosen vertex identity.
pub type VertexId = u64;
