//! Operation log events emitted by the structures.

use std::fmt;

use serde::Serialize;

/// Which structure produced an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum StructureKind {
    Heap,
    AvlTree,
    HashTable,
    Graph,
    LinkedList,
    /// Events about the session rather than one structure.
    Session,
}

impl StructureKind {
    /// Return a human-readable name for this structure.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Heap => "heap",
            Self::AvlTree => "avl",
            Self::HashTable => "hash",
            Self::Graph => "graph",
            Self::LinkedList => "list",
            Self::Session => "session",
        }
    }

    /// Parse a structure kind from a string name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "heap" => Some(Self::Heap),
            "avl" | "tree" | "avl_tree" => Some(Self::AvlTree),
            "hash" | "hash_table" => Some(Self::HashTable),
            "graph" => Some(Self::Graph),
            "list" | "linked_list" => Some(Self::LinkedList),
            "session" => Some(Self::Session),
            _ => None,
        }
    }
}

/// Severity of an event, mapped to a colour by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum EventLevel {
    Info,
    Warning,
    Error,
}

impl EventLevel {
    /// Return a human-readable name for this level.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

/// A single human-readable event describing a structural change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OpEvent {
    /// Structure that produced the event.
    pub structure: StructureKind,
    /// Severity.
    pub level: EventLevel,
    /// Free-text description.
    pub message: String,
}

impl OpEvent {
    /// Create an info-level event.
    pub fn info(structure: StructureKind, message: impl Into<String>) -> Self {
        Self {
            structure,
            level: EventLevel::Info,
            message: message.into(),
        }
    }

    /// Create a warning-level event.
    pub fn warning(structure: StructureKind, message: impl Into<String>) -> Self {
        Self {
            structure,
            level: EventLevel::Warning,
            message: message.into(),
        }
    }

    /// Create an error-level event.
    pub fn error(structure: StructureKind, message: impl Into<String>) -> Self {
        Self {
            structure,
            level: EventLevel::Error,
            message: message.into(),
        }
    }
}

impl fmt::Display for OpEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.structure.name(), self.message)
    }
}
