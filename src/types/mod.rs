//! Shared types for the structviz engine.

pub mod error;
pub mod event;

pub use error::{VizError, VizResult};
pub use event::{EventLevel, OpEvent, StructureKind};

/// Bucket count used when a hash table is built without an explicit size.
pub const DEFAULT_BUCKET_COUNT: usize = 13;

/// Vertex count used when a graph is built from the default configuration.
pub const DEFAULT_VERTEX_COUNT: usize = 8;

/// Maximum number of entries an operation log retains by default.
pub const DEFAULT_LOG_CAPACITY: usize = 200;

/// Smallest value the linked list accepts at its head.
pub const MIN_LIST_VALUE: i64 = 1;
