//! Engine configuration.
//!
//! Configuration is layered with `figment`: built-in defaults, then an
//! optional TOML file, then `LOWLINK_`-prefixed environment variables
//! (`__` separates nested keys, e.g. `LOWLINK_TRAVERSAL__KEEP_SINGLETON_TREES=false`).
//!
//! ```toml
//! [graph]
//! directed = false
//! initial_capacity = 362880
//!
//! [traversal]
//! keep_singleton_trees = true
//!
//! [logging]
//! slow_traversal_logging = true
//! slow_traversal_ms = 250
//! ```

use std::path::Path;
use std::time::Duration;

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Prefix for environment variable overrides.
pub const ENV_PREFIX: &str = "LOWLINK_";

/// Errors raised while loading or validating configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A provider (file, string, environment) could not be read or parsed.
    #[error("Failed to load configuration: {0}")]
    Load(Box<figment::Error>),

    /// The configuration parsed but holds an unusable value.
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Load(Box::new(err))
    }
}

/// Graph construction settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// Build directed graphs instead of the default undirected ones.
    pub directed: bool,
    /// Expected node count, used to pre-size the adjacency map.
    pub initial_capacity: usize,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            directed: false,
            initial_capacity: 0,
        }
    }
}

/// Traversal behaviour switches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TraversalConfig {
    /// Emit a one-node tree into the DFS forest for roots without tree edges.
    ///
    /// Components are unaffected: an isolated node is always its own
    /// component, whether or not its tree is kept in the forest.
    pub keep_singleton_trees: bool,
}

impl Default for TraversalConfig {
    fn default() -> Self {
        Self {
            keep_singleton_trees: true,
        }
    }
}

/// Diagnostics settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Warn about traversals slower than `slow_traversal_ms`.
    pub slow_traversal_logging: bool,
    /// Slow traversal threshold in milliseconds.
    pub slow_traversal_ms: u64,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            slow_traversal_logging: true,
            slow_traversal_ms: 100,
        }
    }
}

impl LoggingConfig {
    /// Returns the slow traversal threshold as a [`Duration`].
    #[must_use]
    pub fn slow_traversal_threshold(&self) -> Duration {
        Duration::from_millis(self.slow_traversal_ms)
    }
}

/// Top-level engine configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Graph construction settings.
    pub graph: GraphConfig,
    /// Traversal behaviour switches.
    pub traversal: TraversalConfig,
    /// Diagnostics settings.
    pub logging: LoggingConfig,
}

impl EngineConfig {
    /// Loads configuration from defaults, an optional TOML file and the environment.
    ///
    /// A missing file is not an error; its layer is simply empty.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let config: Self = Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::file(path.as_ref()))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Parses configuration from an in-memory TOML document layered over defaults.
    pub fn from_toml_str(toml: &str) -> Result<Self, ConfigError> {
        let config: Self = Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::string(toml))
            .extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Checks value ranges that serde cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.logging.slow_traversal_logging && self.logging.slow_traversal_ms == 0 {
            return Err(ConfigError::Invalid(
                "logging.slow_traversal_ms must be greater than 0 when slow traversal logging is enabled"
                    .to_string(),
            ));
        }
        Ok(())
    }
}
