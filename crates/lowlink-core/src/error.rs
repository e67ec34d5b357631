//! Error types for lowlink-core.
//!
//! Traversal entry points report a missing start or end node as an absent
//! result (`None`), so the hot path never allocates an error. This enum
//! covers the key-based convenience wrappers and configuration loading.

use thiserror::Error;

use crate::config::ConfigError;

/// Engine error types.
#[derive(Error, Debug)]
pub enum Error {
    /// No node with the given key exists in the graph.
    #[error("Node not found: {0}")]
    NodeNotFound(String),

    /// Configuration could not be loaded or failed validation.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Result type alias for engine operations.
pub type Result<T> = std::result::Result<T, Error>;
