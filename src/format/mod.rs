//! JSON network description I/O.

pub mod network;
pub mod reader;
pub mod writer;

pub use network::{EdgeRecord, NetworkFile, VertexRecord};
pub use reader::NetworkReader;
pub use writer::NetworkWriter;
