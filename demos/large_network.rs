//! Grid-shaped city with 100k intersections: build time and query time.

use std::time::Instant;

use city_graph::*;

const SIDE: u64 = 316;

fn main() -> GraphResult<()> {
    let start = Instant::now();
    let mut graph = Graph::with_capacity((SIDE * SIDE) as usize);
    for row in 0..SIDE {
        for col in 0..SIDE {
            graph.add_vertex(row * SIDE + col, format!("({}, {})", row, col))?;
        }
    }
    for row in 0..SIDE {
        for col in 0..SIDE {
            let id = row * SIDE + col;
            if col + 1 < SIDE {
                graph.add_road(id, id + 1, ((row + col) % 7 + 1) as i64)?;
            }
            if row + 1 < SIDE {
                graph.add_road(id, id + SIDE, ((row * col) % 5 + 1) as i64)?;
            }
        }
    }
    println!(
        "Built {} vertices / {} edges in {:?}",
        graph.vertex_count(),
        graph.edge_count(),
        start.elapsed()
    );

    let t = Instant::now();
    let order = bfs(&graph, 0)?;
    println!("BFS visited {} in {:?}", order.visited.len(), t.elapsed());

    let t = Instant::now();
    let order = dfs(&graph, 0)?;
    println!("DFS visited {} in {:?}", order.visited.len(), t.elapsed());

    let t = Instant::now();
    let paths = shortest_paths(&graph, 0)?;
    let corner = SIDE * SIDE - 1;
    println!(
        "Shortest paths in {:?}; far corner at distance {}",
        t.elapsed(),
        paths.distance(corner)
    );

    Ok(())
}
