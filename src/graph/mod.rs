//! Undirected adjacency-list graph and its traversals.

pub mod builder;
pub mod traversal;
pub mod undirected;

pub use builder::GraphBuilder;
pub use traversal::{bfs_traverse, dfs_traverse, TraversalKind};
pub use undirected::UndirectedGraph;
