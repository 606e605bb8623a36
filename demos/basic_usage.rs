//! Build a small road network and query it.

use city_graph::*;

fn main() -> GraphResult<()> {
    // Locations
    let mut graph = Graph::new();
    graph.add_vertex(1, "Simpang A")?;
    graph.add_vertex(2, "Simpang B")?;
    graph.add_vertex(3, "Kantor Walikota")?;
    graph.add_vertex(4, "Pasar Sentral")?;

    // Roads
    graph.add_road(1, 2, 5)?;
    graph.add_road(1, 4, 3)?;
    graph.add_edge(2, 3, 7)?;

    // Rejected input leaves the graph untouched
    if let Err(e) = graph.add_edge(3, 1, -2) {
        println!("Rejected: {}", e);
    }

    println!(
        "Graph created with {} vertices and {} edges",
        graph.vertex_count(),
        graph.edge_count()
    );

    let order = bfs(&graph, 1)?;
    println!("BFS from 1: {:?}", order.visited);

    let order = dfs(&graph, 1)?;
    println!("DFS from 1: {:?}", order.visited);

    let paths = shortest_paths(&graph, 4)?;
    for vertex in graph.list_vertices() {
        println!(
            "  To {} ({}): {}",
            vertex.id,
            vertex.label,
            paths.distance(vertex.id)
        );
    }

    if let Some(route) = paths.route_to(3) {
        println!("Route 4 -> 3: {:?} (distance {})", route.vertices, route.distance);
    }

    Ok(())
}
