//! Operation log side-channel: observers the structures notify on every
//! structural change, kept apart from the algorithmic state.

pub mod observer;
pub mod operation_log;

pub use observer::{OperationObserver, SharedLog};
pub use operation_log::{LogEntry, OperationLog};

pub(crate) use observer::EventSink;
