//! Graph traversal algorithms (BFS, stack-based DFS).

use std::collections::VecDeque;

use serde::Serialize;

use super::UndirectedGraph;

/// Traversal strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TraversalKind {
    Bfs,
    Dfs,
}

impl TraversalKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Bfs => "BFS",
            Self::Dfs => "DFS",
        }
    }

    /// Parse a traversal kind from a string name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "bfs" | "breadth" => Some(Self::Bfs),
            "dfs" | "depth" => Some(Self::Dfs),
            _ => None,
        }
    }
}

/// Breadth-first traversal from `start`.
///
/// A vertex is marked visited when it is enqueued, so it is enqueued at most
/// once. Neighbors are visited in edge insertion order. Returns an empty
/// sequence when `start` is not a vertex.
pub fn bfs_traverse(graph: &UndirectedGraph, start: usize) -> Vec<usize> {
    let n = graph.vertex_count();
    if start >= n {
        return Vec::new();
    }

    let mut visited = vec![false; n];
    let mut order: Vec<usize> = Vec::new();
    let mut queue: VecDeque<usize> = VecDeque::new();

    visited[start] = true;
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        order.push(current);
        for &neighbor in graph.neighbors(current) {
            if !visited[neighbor] {
                visited[neighbor] = true;
                queue.push_back(neighbor);
            }
        }
    }

    order
}

/// Iterative depth-first traversal from `start`.
///
/// A vertex is marked visited when it is pushed, and neighbors are pushed in
/// edge insertion order, so siblings are emitted last-added first. This is
/// not the order a recursive pre-order DFS would produce.
pub fn dfs_traverse(graph: &UndirectedGraph, start: usize) -> Vec<usize> {
    let n = graph.vertex_count();
    if start >= n {
        return Vec::new();
    }

    let mut visited = vec![false; n];
    let mut order: Vec<usize> = Vec::new();
    let mut stack: Vec<usize> = vec![start];
    visited[start] = true;

    while let Some(current) = stack.pop() {
        order.push(current);
        for &neighbor in graph.neighbors(current) {
            if !visited[neighbor] {
                visited[neighbor] = true;
                stack.push(neighbor);
            }
        }
    }

    order
}
