//! Core graph structure: fixed vertex set, symmetric adjacency lists and a
//! mirrored edge list for rendering.

use crate::oplog::{EventSink, OperationObserver};
use crate::types::{OpEvent, StructureKind, VizError, VizResult};

use super::traversal::{bfs_traverse, dfs_traverse, TraversalKind};

/// Undirected graph over vertices `0..vertex_count`.
///
/// Self-loops and repeated edges are kept as given: each `add_edge` call
/// appends another adjacency entry on both ends.
#[derive(Debug)]
pub struct UndirectedGraph {
    /// Neighbors of each vertex, in edge insertion order.
    adjacency: Vec<Vec<usize>>,
    /// Every accepted edge, in insertion order.
    edges: Vec<(usize, usize)>,
    sink: EventSink,
}

impl UndirectedGraph {
    /// Create a graph with `vertex_count` isolated vertices.
    pub fn new(vertex_count: usize) -> Self {
        Self {
            adjacency: vec![Vec::new(); vertex_count],
            edges: Vec::new(),
            sink: EventSink::default(),
        }
    }

    /// Create from an edge list. Out-of-range edges are skipped.
    pub fn from_edges(vertex_count: usize, edges: &[(usize, usize)]) -> Self {
        let mut graph = Self::new(vertex_count);
        for &(u, v) in edges {
            graph.add_edge(u, v);
        }
        graph
    }

    /// Attach an observer notified on every change.
    pub fn set_observer(&mut self, observer: Box<dyn OperationObserver>) {
        self.sink.set(observer);
    }

    /// Detach and return the current observer.
    pub fn take_observer(&mut self) -> Option<Box<dyn OperationObserver>> {
        self.sink.take()
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Neighbors of `vertex` in insertion order; empty for an unknown vertex.
    pub fn neighbors(&self, vertex: usize) -> &[usize] {
        self.adjacency
            .get(vertex)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// All adjacency lists, indexed by vertex.
    pub fn adjacency(&self) -> &[Vec<usize>] {
        &self.adjacency
    }

    /// All edges (immutable slice).
    pub fn edges(&self) -> &[(usize, usize)] {
        &self.edges
    }

    pub fn has_edge(&self, u: usize, v: usize) -> bool {
        self.neighbors(u).contains(&v)
    }

    /// Add the undirected edge `(u, v)`. Returns `false`, leaving the graph
    /// untouched, if either endpoint is out of range.
    pub fn add_edge(&mut self, u: usize, v: usize) -> bool {
        match self.try_add_edge(u, v) {
            Ok(()) => true,
            Err(e) => {
                self.sink
                    .emit(OpEvent::error(StructureKind::Graph, e.to_string()));
                false
            }
        }
    }

    /// Like [`add_edge`](Self::add_edge) but reports the offending vertex.
    pub fn try_add_edge(&mut self, u: usize, v: usize) -> VizResult<()> {
        let count = self.vertex_count();
        for vertex in [u, v] {
            if vertex >= count {
                return Err(VizError::VertexOutOfRange { vertex, count });
            }
        }

        self.adjacency[u].push(v);
        self.adjacency[v].push(u);
        self.edges.push((u, v));
        self.sink.emit(OpEvent::info(
            StructureKind::Graph,
            format!("Added edge {} - {}", u, v),
        ));
        Ok(())
    }

    /// Breadth-first visit order from `start`.
    pub fn bfs(&mut self, start: usize) -> Vec<usize> {
        self.traverse(TraversalKind::Bfs, start)
    }

    /// Stack-based depth-first visit order from `start`.
    pub fn dfs(&mut self, start: usize) -> Vec<usize> {
        self.traverse(TraversalKind::Dfs, start)
    }

    /// Run a traversal and log its visit order.
    pub fn traverse(&mut self, kind: TraversalKind, start: usize) -> Vec<usize> {
        let order = match kind {
            TraversalKind::Bfs => bfs_traverse(self, start),
            TraversalKind::Dfs => dfs_traverse(self, start),
        };
        if order.is_empty() {
            self.sink.emit(OpEvent::error(
                StructureKind::Graph,
                format!(
                    "{} start vertex {} out of range for {} vertices",
                    kind.name(),
                    start,
                    self.vertex_count()
                ),
            ));
        } else {
            let visited: Vec<String> = order.iter().map(|v| v.to_string()).collect();
            self.sink.emit(OpEvent::info(
                StructureKind::Graph,
                format!("{} from {}: {}", kind.name(), start, visited.join(" -> ")),
            ));
        }
        order
    }

    /// Remove all edges. The vertex count is kept.
    pub fn clear(&mut self) {
        for list in &mut self.adjacency {
            list.clear();
        }
        self.edges.clear();
        self.sink
            .emit(OpEvent::warning(StructureKind::Graph, "Graph cleared"));
    }
}
