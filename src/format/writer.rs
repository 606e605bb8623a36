//! Writes a graph as a JSON network description.

use std::io::Write;

use crate::graph::Graph;
use crate::types::GraphResult;

use super::network::NetworkFile;

/// Writer for JSON network descriptions.
pub struct NetworkWriter {
    pretty: bool,
}

impl NetworkWriter {
    /// Create a new writer.
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    /// Render the graph as a JSON string.
    pub fn to_string(&self, name: &str, graph: &Graph) -> GraphResult<String> {
        let file = NetworkFile::from_graph(name, graph);
        let json = if self.pretty {
            serde_json::to_string_pretty(&file)?
        } else {
            serde_json::to_string(&file)?
        };
        Ok(json)
    }

    /// Write the graph as JSON to any writer.
    pub fn write_to(&self, name: &str, graph: &Graph, writer: &mut impl Write) -> GraphResult<()> {
        let json = self.to_string(name, graph)?;
        writer.write_all(json.as_bytes())?;
        writer.write_all(b"\n")?;
        Ok(())
    }
}

impl Default for NetworkWriter {
    fn default() -> Self {
        Self::new(false)
    }
}
