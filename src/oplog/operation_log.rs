//! Bounded, timestamped log of operation events.

use std::collections::VecDeque;

use chrono::{DateTime, Local};
use serde::Serialize;

use crate::types::{OpEvent, DEFAULT_LOG_CAPACITY};

use super::OperationObserver;

/// An event stamped with the local time it was recorded.
#[derive(Debug, Clone, Serialize)]
pub struct LogEntry {
    pub timestamp: DateTime<Local>,
    pub event: OpEvent,
}

impl LogEntry {
    /// Format as `[HH:MM:SS] message`, the way the log panel shows it.
    pub fn render_line(&self) -> String {
        format!(
            "[{}] {}",
            self.timestamp.format("%H:%M:%S"),
            self.event.message
        )
    }
}

/// Ordered log of events, oldest first. Once `capacity` is reached the
/// oldest entry is dropped for each new one.
#[derive(Debug, Clone)]
pub struct OperationLog {
    entries: VecDeque<LogEntry>,
    capacity: usize,
}

impl OperationLog {
    /// Create a log with the default capacity.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_LOG_CAPACITY)
    }

    /// Create a log holding at most `capacity` entries (minimum 1).
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity.min(1024)),
            capacity,
        }
    }

    /// Record an event with the current local time.
    pub fn record(&mut self, event: OpEvent) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(LogEntry {
            timestamp: Local::now(),
            event,
        });
    }

    /// Entries, oldest first.
    pub fn entries(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter()
    }

    /// Entries, newest first.
    pub fn latest_first(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter().rev()
    }

    /// Messages only, oldest first.
    pub fn messages(&self) -> Vec<&str> {
        self.entries
            .iter()
            .map(|e| e.event.message.as_str())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl Default for OperationLog {
    fn default() -> Self {
        Self::new()
    }
}

impl OperationObserver for OperationLog {
    fn on_event(&mut self, event: &OpEvent) {
        self.record(event.clone());
    }
}
