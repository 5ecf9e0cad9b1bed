//! Command implementations for the `sviz` binary.

pub mod commands;
