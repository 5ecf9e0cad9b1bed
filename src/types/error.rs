//! Error types for the structviz library.

use thiserror::Error;

/// Errors raised at the input and configuration edge of the engine.
///
/// The structure algorithms themselves never fail: empty or missing
/// results come back as `None` and rejected mutations as `false`.
#[derive(Error, Debug)]
pub enum VizError {
    /// Value below the minimum accepted by a structure.
    #[error("Invalid value: {0}")]
    InvalidValue(i64),

    /// Hash table constructed with zero buckets.
    #[error("Bucket count must be greater than zero")]
    ZeroBuckets,

    /// Vertex id outside the graph.
    #[error("Vertex {vertex} out of range for graph with {count} vertices")]
    VertexOutOfRange { vertex: usize, count: usize },

    /// Malformed user input (CLI arguments, scripted operations).
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Configuration could not be decoded or encoded.
    #[error("Config error: {0}")]
    Config(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result type for structviz operations.
pub type VizResult<T> = Result<T, VizError>;
