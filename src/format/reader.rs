//! Reads JSON network descriptions into an in-memory graph.

use std::io::Read;
use std::path::Path;

use crate::graph::Graph;
use crate::types::GraphResult;

use super::network::NetworkFile;

/// Reader for JSON network descriptions.
pub struct NetworkReader;

impl NetworkReader {
    /// Read a network file into a Graph.
    pub fn read_from_file(path: &Path) -> GraphResult<Graph> {
        Self::read_file(path)?.to_graph()
    }

    /// Parse a network file without building the graph.
    pub fn read_file(path: &Path) -> GraphResult<NetworkFile> {
        let data = std::fs::read_to_string(path)?;
        log::debug!("read {} bytes from {}", data.len(), path.display());
        Self::parse(&data)
    }

    /// Read from any reader into a Graph.
    pub fn read_from(reader: &mut impl Read) -> GraphResult<Graph> {
        let mut data = String::new();
        reader.read_to_string(&mut data)?;
        Self::parse(&data)?.to_graph()
    }

    /// Parse a JSON document.
    pub fn parse(data: &str) -> GraphResult<NetworkFile> {
        Ok(serde_json::from_str(data)?)
    }
}
