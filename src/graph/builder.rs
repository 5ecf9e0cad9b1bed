//! Fluent API for building UndirectedGraph instances.

use super::UndirectedGraph;

/// Fluent builder for constructing an UndirectedGraph.
pub struct GraphBuilder {
    vertex_count: usize,
    edges: Vec<(usize, usize)>,
}

impl GraphBuilder {
    /// Start a graph with `vertex_count` vertices.
    pub fn new(vertex_count: usize) -> Self {
        Self {
            vertex_count,
            edges: Vec::new(),
        }
    }

    /// Add an edge.
    pub fn edge(mut self, u: usize, v: usize) -> Self {
        self.edges.push((u, v));
        self
    }

    /// Add a path through `vertices`, linking each consecutive pair.
    pub fn path(mut self, vertices: &[usize]) -> Self {
        for pair in vertices.windows(2) {
            self.edges.push((pair[0], pair[1]));
        }
        self
    }

    /// Build the graph. Out-of-range edges are dropped the same way
    /// `UndirectedGraph::add_edge` drops them.
    pub fn build(self) -> UndirectedGraph {
        UndirectedGraph::from_edges(self.vertex_count, &self.edges)
    }
}
