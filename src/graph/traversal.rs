//! Graph traversal algorithms (BFS, DFS).
//!
//! Both traversals follow each vertex's outgoing edges in insertion order:
//! the edge added first is explored first.

use std::collections::HashMap;

use serde::Serialize;

use crate::frontier::FrontierQueue;
use crate::types::{GraphError, GraphResult, VertexId};

use super::{Graph, TraversalState};

/// Result of a traversal.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TraversalResult {
    /// Starting vertex.
    pub start: VertexId,
    /// Visited vertex IDs in visitation order, starting with `start`.
    pub visited: Vec<VertexId>,
    /// Depth at which each vertex was reached (hops for BFS, tree depth for DFS).
    pub depths: HashMap<VertexId, u32>,
}

impl TraversalResult {
    fn new(start: VertexId) -> Self {
        Self {
            start,
            visited: Vec::new(),
            depths: HashMap::new(),
        }
    }

    fn record(&mut self, id: VertexId, depth: u32) {
        self.visited.push(id);
        self.depths.insert(id, depth);
    }

    /// Depth of a visited vertex.
    pub fn depth(&self, id: VertexId) -> Option<u32> {
        self.depths.get(&id).copied()
    }

    /// Whether the traversal reached `id`.
    pub fn contains(&self, id: VertexId) -> bool {
        self.depths.contains_key(&id)
    }
}

/// Breadth-first traversal from `start`.
pub fn bfs(graph: &Graph, start: VertexId) -> GraphResult<TraversalResult> {
    let mut state = TraversalState::new();
    bfs_with_state(graph, start, &mut state)
}

/// Breadth-first traversal reusing a caller-owned state. The state is reset
/// before the run.
pub fn bfs_with_state(
    graph: &Graph,
    start: VertexId,
    state: &mut TraversalState,
) -> GraphResult<TraversalResult> {
    if !graph.contains(start) {
        return Err(GraphError::UnknownVertex(start));
    }
    state.reset(graph);

    let mut result = TraversalResult::new(start);
    // Tag = hop depth.
    let mut queue: FrontierQueue<u32> = FrontierQueue::new();

    state.mark_visited(start);
    queue.push(start, 0);

    while let Ok(entry) = queue.pop() {
        result.record(entry.vertex, entry.tag);

        for edge in graph.edges_from(entry.vertex) {
            if state.mark_visited(edge.target) {
                queue.push(edge.target, entry.tag + 1);
            }
        }
    }

    log::debug!("bfs from {} visited {} vertices", start, result.visited.len());
    Ok(result)
}

/// Depth-first (pre-order) traversal from `start`.
pub fn dfs(graph: &Graph, start: VertexId) -> GraphResult<TraversalResult> {
    let mut state = TraversalState::new();
    dfs_with_state(graph, start, &mut state)
}

/// Depth-first traversal reusing a caller-owned state. The state is reset
/// before the run.
///
/// Uses an explicit stack of (vertex, next edge index) frames instead of
/// recursion, so the visit order is the recursive pre-order but memory does
/// not depend on the call stack.
pub fn dfs_with_state(
    graph: &Graph,
    start: VertexId,
    state: &mut TraversalState,
) -> GraphResult<TraversalResult> {
    if !graph.contains(start) {
        return Err(GraphError::UnknownVertex(start));
    }
    state.reset(graph);

    let mut result = TraversalResult::new(start);
    let mut stack: Vec<(VertexId, usize)> = vec![(start, 0)];

    state.mark_visited(start);
    result.record(start, 0);

    while let Some(frame) = stack.last_mut() {
        let (current, next_edge) = *frame;
        let Some(edge) = graph.edges_from(current).get(next_edge) else {
            stack.pop();
            continue;
        };
        frame.1 += 1;

        if state.mark_visited(edge.target) {
            let depth = stack.len() as u32;
            result.record(edge.target, depth);
            stack.push((edge.target, 0));
        }
    }

    log::debug!("dfs from {} visited {} vertices", start, result.visited.len());
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_chain(n: u64) -> Graph {
        let mut g = Graph::new();
        for i in 0..n {
            g.add_vertex(i, format!("v{}", i)).unwrap();
        }
        for i in 0..n.saturating_sub(1) {
            g.add_edge(i, i + 1, 1).unwrap();
        }
        g
    }

    /// 0 -> {1, 2}, 1 -> 3, 2 -> 3, 3 -> 4
    fn make_diamond() -> Graph {
        let mut g = Graph::new();
        for i in 0..5 {
            g.add_vertex(i, format!("v{}", i)).unwrap();
        }
        g.add_edge(0, 1, 1).unwrap();
        g.add_edge(0, 2, 1).unwrap();
        g.add_edge(1, 3, 1).unwrap();
        g.add_edge(2, 3, 1).unwrap();
        g.add_edge(3, 4, 1).unwrap();
        g
    }

    /// Recursive pre-order DFS, used as the reference order.
    fn dfs_recursive(graph: &Graph, v: VertexId, seen: &mut Vec<VertexId>) {
        seen.push(v);
        for edge in graph.edges_from(v) {
            if !seen.contains(&edge.target) {
                dfs_recursive(graph, edge.target, seen);
            }
        }
    }

    #[test]
    fn test_bfs_chain_depths() {
        let g = make_chain(6);
        let r = bfs(&g, 0).unwrap();
        assert_eq!(r.visited, vec![0, 1, 2, 3, 4, 5]);
        assert_eq!(r.depth(5), Some(5));
    }

    #[test]
    fn test_bfs_diamond_levels() {
        let g = make_diamond();
        let r = bfs(&g, 0).unwrap();
        assert_eq!(r.visited, vec![0, 1, 2, 3, 4]);
        assert_eq!(r.depth(3), Some(2));
    }

    #[test]
    fn test_dfs_diamond_preorder() {
        let g = make_diamond();
        let r = dfs(&g, 0).unwrap();
        assert_eq!(r.visited, vec![0, 1, 3, 4, 2]);
        assert_eq!(r.depth(4), Some(3));
        assert_eq!(r.depth(2), Some(1));
    }

    #[test]
    fn test_dfs_matches_recursive_order() {
        let mut g = make_diamond();
        g.add_vertex(5, "v5").unwrap();
        g.add_edge(4, 0, 1).unwrap();
        g.add_edge(4, 5, 1).unwrap();
        g.add_edge(2, 5, 1).unwrap();
        g.add_edge(5, 1, 1).unwrap();

        let mut expected = Vec::new();
        dfs_recursive(&g, 2, &mut expected);
        assert_eq!(dfs(&g, 2).unwrap().visited, expected);
    }

    #[test]
    fn test_cycle_terminates() {
        let mut g = make_chain(4);
        g.add_edge(3, 0, 1).unwrap();
        assert_eq!(bfs(&g, 2).unwrap().visited, vec![2, 3, 0, 1]);
        assert_eq!(dfs(&g, 2).unwrap().visited, vec![2, 3, 0, 1]);
    }

    #[test]
    fn test_self_loop() {
        let mut g = make_chain(1);
        g.add_edge(0, 0, 3).unwrap();
        assert_eq!(bfs(&g, 0).unwrap().visited, vec![0]);
        assert_eq!(dfs(&g, 0).unwrap().visited, vec![0]);
    }

    #[test]
    fn test_directed_edges_only_forward() {
        let g = make_chain(4);
        let r = bfs(&g, 2).unwrap();
        assert_eq!(r.visited, vec![2, 3]);
        assert!(!r.contains(0));
    }

    #[test]
    fn test_unknown_start() {
        let g = make_chain(3);
        assert!(matches!(bfs(&g, 99), Err(GraphError::UnknownVertex(99))));
        assert!(matches!(dfs(&g, 99), Err(GraphError::UnknownVertex(99))));
    }

    #[test]
    fn test_deep_chain_does_not_recurse() {
        let g = make_chain(200_000);
        let r = dfs(&g, 0).unwrap();
        assert_eq!(r.visited.len(), 200_000);
        assert_eq!(r.depth(199_999), Some(199_999));
    }
}
