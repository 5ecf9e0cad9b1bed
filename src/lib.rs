//! structviz: the engine behind an interactive data-structure visualizer.
//!
//! Provides a min/max binary heap, an AVL tree, a chained hash table, an
//! undirected graph with BFS/DFS and a singly linked list. Each structure
//! mutates in place and exposes read-only snapshots; a presentation layer
//! pulls those after every call and may attach an observer to receive a
//! human-readable operation log.

pub mod cli;
pub mod config;
pub mod engine;
pub mod graph;
pub mod hash;
pub mod heap;
pub mod list;
pub mod oplog;
pub mod tree;
pub mod types;

// Re-export commonly used types at the crate root
pub use config::VisualizerConfig;
pub use engine::Workbench;
pub use graph::{bfs_traverse, dfs_traverse, GraphBuilder, TraversalKind, UndirectedGraph};
pub use hash::{bucket_for, BucketHashTable, BucketView};
pub use heap::{HeapOrder, MinMaxHeap};
pub use list::SinglyLinkedList;
pub use oplog::{LogEntry, OperationLog, OperationObserver, SharedLog};
pub use tree::{AvlTree, Rotation, RotationDirection, TreeNodeView};
pub use types::{
    EventLevel, OpEvent, StructureKind, VizError, VizResult, DEFAULT_BUCKET_COUNT,
    DEFAULT_LOG_CAPACITY, DEFAULT_VERTEX_COUNT,
};
