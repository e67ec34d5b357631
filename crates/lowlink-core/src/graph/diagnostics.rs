//! Traversal diagnostics: slow traversal logging.

// u128 -> u64 for millisecond durations: traversal durations fit within u64.
#![allow(clippy::cast_possible_truncation)]

use std::fmt;
use std::time::Duration;

use crate::config::LoggingConfig;

/// Traversal entry point that produced a set of statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraversalKind {
    /// Full-forest depth-first walk.
    DepthFirst,
    /// Single-component breadth-first walk.
    BreadthFirst,
}

impl fmt::Display for TraversalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DepthFirst => f.write_str("dfs"),
            Self::BreadthFirst => f.write_str("bfs"),
        }
    }
}

/// Statistics about a completed traversal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraversalStats {
    /// Which traversal ran.
    pub kind: TraversalKind,
    /// Key of the start node.
    pub start: String,
    /// Number of nodes marked visited.
    pub nodes_visited: usize,
    /// Trees in the DFS forest (1 for BFS).
    pub trees: usize,
    /// Components discovered (1 for BFS).
    pub components: usize,
}

/// Logs traversals exceeding a duration threshold.
#[derive(Debug, Clone)]
pub struct SlowTraversalLogger {
    threshold: Duration,
    enabled: bool,
}

impl Default for SlowTraversalLogger {
    fn default() -> Self {
        Self::from_config(&LoggingConfig::default())
    }
}

impl SlowTraversalLogger {
    /// Creates a logger with the given threshold.
    #[must_use]
    pub fn new(threshold: Duration) -> Self {
        Self {
            threshold,
            enabled: true,
        }
    }

    /// Creates a disabled logger.
    #[must_use]
    pub fn disabled() -> Self {
        Self {
            threshold: Duration::MAX,
            enabled: false,
        }
    }

    /// Creates a logger from the logging section of the engine configuration.
    #[must_use]
    pub fn from_config(config: &LoggingConfig) -> Self {
        if config.slow_traversal_logging {
            Self::new(config.slow_traversal_threshold())
        } else {
            Self::disabled()
        }
    }

    /// Returns true if the duration reaches the slow traversal threshold.
    #[must_use]
    pub fn is_slow(&self, duration: Duration) -> bool {
        self.enabled && duration >= self.threshold
    }

    /// Logs a slow traversal. Returns true if a warning was emitted.
    pub fn log_if_slow(&self, duration: Duration, stats: &TraversalStats) -> bool {
        if !self.is_slow(duration) {
            return false;
        }

        tracing::warn!(
            kind = %stats.kind,
            start = %stats.start,
            duration_ms = duration.as_millis() as u64,
            nodes_visited = stats.nodes_visited,
            trees = stats.trees,
            components = stats.components,
            "Slow traversal detected"
        );
        true
    }
}
