//! Visualizer configuration with TOML persistence.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::types::{
    VizError, VizResult, DEFAULT_BUCKET_COUNT, DEFAULT_LOG_CAPACITY, DEFAULT_VERTEX_COUNT,
};

/// Complete visualizer configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct VisualizerConfig {
    /// Heap configuration
    pub heap: HeapConfig,

    /// Hash table configuration
    pub hash: HashConfig,

    /// Graph configuration
    pub graph: GraphConfig,

    /// Operation log configuration
    pub log: LogConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeapConfig {
    /// Min-heap when true, max-heap otherwise
    pub min_heap: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HashConfig {
    /// Number of buckets, fixed for the table's lifetime
    pub bucket_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// Number of vertices
    pub vertex_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Maximum retained log entries
    pub capacity: usize,
}

impl Default for HeapConfig {
    fn default() -> Self {
        Self { min_heap: true }
    }
}

impl Default for HashConfig {
    fn default() -> Self {
        Self {
            bucket_count: DEFAULT_BUCKET_COUNT,
        }
    }
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            vertex_count: DEFAULT_VERTEX_COUNT,
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_LOG_CAPACITY,
        }
    }
}

impl VisualizerConfig {
    /// Load from TOML file
    pub fn load(path: &Path) -> VizResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content).map_err(|e| VizError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Save to TOML file
    pub fn save(&self, path: &Path) -> VizResult<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| VizError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Load from `path` if given, otherwise the defaults.
    pub fn load_or_default(path: Option<&Path>) -> VizResult<Self> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }

    /// Reject settings no structure can be built from.
    pub fn validate(&self) -> VizResult<()> {
        if self.hash.bucket_count == 0 {
            return Err(VizError::ZeroBuckets);
        }
        if self.log.capacity == 0 {
            return Err(VizError::Config("log.capacity must be at least 1".into()));
        }
        Ok(())
    }
}
