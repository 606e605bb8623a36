//! Work-list containers used by the graph algorithms.

pub mod distance;
pub mod queue;

pub use distance::{DistanceFrontier, FrontierEntry};
pub use queue::{FrontierQueue, QueueEntry};
