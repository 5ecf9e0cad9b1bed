//! Session-level orchestration: one instance of every structure sharing a log.

pub mod workbench;

pub use workbench::Workbench;
