//! CLI command implementations.

use std::path::Path;

use crate::engine::{NetworkService, TraversalKind};
use crate::format::{NetworkFile, NetworkReader, NetworkWriter};
use crate::graph::Graph;
use crate::types::{GraphResult, VertexId};

/// Load the network named on the command line, or the built-in city.
pub fn load_network(path: Option<&Path>) -> GraphResult<(String, Graph)> {
    let file = match path {
        Some(path) => NetworkReader::read_file(path)?,
        None => NetworkFile::default_city(),
    };
    let graph = file.to_graph()?;
    Ok((file.name, graph))
}

fn print_json(value: &impl serde::Serialize) -> GraphResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Display every location with its outgoing roads.
pub fn cmd_show(path: Option<&Path>, json: bool) -> GraphResult<()> {
    let (name, graph) = load_network(path)?;
    let adjacency = NetworkService::new(&graph).adjacency();

    if json {
        return print_json(&serde_json::json!({
            "name": name,
            "vertices": graph.vertex_count(),
            "edges": graph.edge_count(),
            "adjacency": adjacency,
        }));
    }

    println!("Network: {}", name);
    println!("Vertices: {}", graph.vertex_count());
    println!("Edges: {}", graph.edge_count());
    if adjacency.is_empty() {
        println!("Graph is empty.");
        return Ok(());
    }
    for entry in &adjacency {
        let roads = if entry.edges.is_empty() {
            "-> No outgoing edges".to_string()
        } else {
            entry
                .edges
                .iter()
                .map(|e| e.to_string())
                .collect::<Vec<_>>()
                .join(" ")
        };
        println!("Vertex {} ({}): {}", entry.id, entry.label, roads);
    }
    Ok(())
}

/// Run a BFS or DFS traversal.
pub fn cmd_traverse(
    path: Option<&Path>,
    kind: TraversalKind,
    start: VertexId,
    json: bool,
) -> GraphResult<()> {
    let (_, graph) = load_network(path)?;
    let report = NetworkService::new(&graph).traverse(kind, start)?;

    if json {
        return print_json(&report);
    }

    println!(
        "{} starting from vertex {}:",
        kind.name().to_uppercase(),
        start
    );
    for visit in &report.visits {
        let indent = "  ".repeat(visit.depth as usize);
        println!(
            "{}[depth {}] {} ({})",
            indent, visit.depth, visit.id, visit.label
        );
    }
    Ok(())
}

/// Shortest distances from a location to every other location.
pub fn cmd_shortest(path: Option<&Path>, start: VertexId, json: bool) -> GraphResult<()> {
    let (_, graph) = load_network(path)?;
    let report = NetworkService::new(&graph).distances(start)?;

    if json {
        return print_json(&report);
    }

    println!("Vertex distances from {}:", start);
    for entry in &report.distances {
        println!("  To {} ({}): {}", entry.id, entry.label, entry.distance);
    }
    Ok(())
}

/// Cheapest route between two locations.
pub fn cmd_route(path: Option<&Path>, from: VertexId, to: VertexId, json: bool) -> GraphResult<()> {
    let (_, graph) = load_network(path)?;
    let report = NetworkService::new(&graph).route(from, to)?;

    if json {
        return print_json(&report);
    }

    if report.stops.is_empty() {
        println!("No route from {} to {}", from, to);
        return Ok(());
    }
    let stops: Vec<String> = report
        .stops
        .iter()
        .map(|s| format!("{} ({})", s.id, s.label))
        .collect();
    println!("Route {} -> {}: {}", from, to, stops.join(" -> "));
    println!("Total distance: {}", report.distance);
    Ok(())
}

/// Print the network as a JSON description.
pub fn cmd_export(path: Option<&Path>, pretty: bool) -> GraphResult<()> {
    let (name, graph) = load_network(path)?;
    let writer = NetworkWriter::new(pretty);
    writer.write_to(&name, &graph, &mut std::io::stdout().lock())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_network() {
        let (name, graph) = load_network(None).unwrap();
        assert_eq!(name, "Kota Smartvana");
        assert_eq!(graph.vertex_count(), 6);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = load_network(Some(Path::new("/nonexistent/network.json")));
        assert!(matches!(result, Err(crate::types::GraphError::Io(_))));
    }
}
