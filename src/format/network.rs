//! JSON network description: locations and roads.

use serde::{Deserialize, Serialize};

use crate::graph::Graph;
use crate::types::{GraphResult, VertexId};

/// A location entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VertexRecord {
    pub id: VertexId,
    #[serde(default)]
    pub label: String,
}

/// A road entry. Weights are signed so negative input can be reported
/// instead of failing to parse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeRecord {
    pub from: VertexId,
    pub to: VertexId,
    pub weight: i64,
    /// Also add the `to -> from` edge.
    #[serde(default)]
    pub two_way: bool,
}

/// A whole road network description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkFile {
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default)]
    pub vertices: Vec<VertexRecord>,
    #[serde(default)]
    pub edges: Vec<EdgeRecord>,
}

fn default_name() -> String {
    "unnamed".to_string()
}

impl NetworkFile {
    /// Build a graph: all vertices first, then roads in file order.
    pub fn to_graph(&self) -> GraphResult<Graph> {
        let mut graph = Graph::with_capacity(self.vertices.len());
        for v in &self.vertices {
            graph.add_vertex(v.id, v.label.clone())?;
        }
        for e in &self.edges {
            if e.two_way {
                graph.add_road(e.from, e.to, e.weight)?;
            } else {
                graph.add_edge(e.from, e.to, e.weight)?;
            }
        }
        log::debug!(
            "loaded network '{}': {} vertices, {} edges",
            self.name,
            graph.vertex_count(),
            graph.edge_count()
        );
        Ok(graph)
    }

    /// Describe an existing graph, one record per directed edge.
    pub fn from_graph(name: impl Into<String>, graph: &Graph) -> Self {
        let vertices = graph
            .list_vertices()
            .iter()
            .map(|v| VertexRecord {
                id: v.id,
                label: v.label.clone(),
            })
            .collect();
        let edges = graph
            .list_vertices()
            .iter()
            .flat_map(|v| {
                v.edges.iter().map(move |e| EdgeRecord {
                    from: v.id,
                    to: e.target,
                    weight: i64::try_from(e.weight).unwrap_or(i64::MAX),
                    two_way: false,
                })
            })
            .collect();
        Self {
            name: name.into(),
            vertices,
            edges,
        }
    }

    /// The built-in "Kota Smartvana" road network: six locations joined by
    /// seven two-way roads.
    pub fn default_city() -> Self {
        let vertices = [
            (1, "Simpang A"),
            (2, "Simpang B"),
            (3, "Kantor Walikota"),
            (4, "Pasar Sentral"),
            (5, "Rumah Sakit Umum"),
            (6, "Area Parkir Pusat"),
        ]
        .into_iter()
        .map(|(id, label)| VertexRecord {
            id,
            label: label.to_string(),
        })
        .collect();

        let edges = [(1, 2, 5), (1, 4, 3), (2, 3, 7), (2, 5, 4), (4, 5, 6), (3, 6, 2), (4, 6, 4)]
            .into_iter()
            .map(|(from, to, weight)| EdgeRecord {
                from,
                to,
                weight,
                two_way: true,
            })
            .collect();

        Self {
            name: "Kota Smartvana".to_string(),
            vertices,
            edges,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::GraphError;

    #[test]
    fn test_defaults_applied() {
        let file: NetworkFile =
            serde_json::from_str(r#"{"vertices":[{"id":1}],"edges":[]}"#).unwrap();
        assert_eq!(file.name, "unnamed");
        assert_eq!(file.vertices[0].label, "");
    }

    #[test]
    fn test_default_city_shape() {
        let graph = NetworkFile::default_city().to_graph().unwrap();
        assert_eq!(graph.vertex_count(), 6);
        assert_eq!(graph.edge_count(), 14);
        let from_one: Vec<VertexId> = graph.edges_from(1).iter().map(|e| e.target).collect();
        assert_eq!(from_one, vec![2, 4]);
    }

    #[test]
    fn test_negative_weight_in_file() {
        let mut file = NetworkFile::default_city();
        file.edges.push(EdgeRecord {
            from: 1,
            to: 6,
            weight: -3,
            two_way: false,
        });
        assert!(matches!(file.to_graph(), Err(GraphError::InvalidWeight(-3))));
    }

    #[test]
    fn test_from_graph_reproduces_graph() {
        let graph = NetworkFile::default_city().to_graph().unwrap();
        let described = NetworkFile::from_graph("copy", &graph);
        assert_eq!(described.edges.len(), 14);
        let rebuilt = described.to_graph().unwrap();
        assert_eq!(rebuilt.list_vertices(), graph.list_vertices());
    }
}
