//! Tests for layered engine configuration.

use std::io::Write;
use std::time::Duration;

use serial_test::serial;
use tempfile::NamedTempFile;

use crate::config::{ConfigError, EngineConfig, GraphConfig, LoggingConfig, TraversalConfig};
use crate::graph::{Graph, GraphMode};

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .expect("create temp config");
    file.write_all(contents.as_bytes())
        .expect("write temp config");
    file
}

fn clear_env() {
    for key in [
        "LOWLINK_GRAPH__DIRECTED",
        "LOWLINK_GRAPH__INITIAL_CAPACITY",
        "LOWLINK_TRAVERSAL__KEEP_SINGLETON_TREES",
        "LOWLINK_LOGGING__SLOW_TRAVERSAL_LOGGING",
        "LOWLINK_LOGGING__SLOW_TRAVERSAL_MS",
    ] {
        std::env::remove_var(key);
    }
}

#[test]
fn test_defaults() {
    let config = EngineConfig::default();
    assert_eq!(
        config.graph,
        GraphConfig {
            directed: false,
            initial_capacity: 0
        }
    );
    assert!(config.traversal.keep_singleton_trees);
    assert!(config.logging.slow_traversal_logging);
    assert_eq!(
        config.logging.slow_traversal_threshold(),
        Duration::from_millis(100)
    );
    assert!(config.validate().is_ok());
}

#[test]
fn test_from_toml_str_partial_override() {
    let config = EngineConfig::from_toml_str(
        r"
        [graph]
        directed = true

        [traversal]
        keep_singleton_trees = false
        ",
    )
    .expect("valid toml");

    assert!(config.graph.directed);
    assert_eq!(config.graph.initial_capacity, 0);
    assert_eq!(
        config.traversal,
        TraversalConfig {
            keep_singleton_trees: false
        }
    );
    assert_eq!(config.logging, LoggingConfig::default());
}

#[test]
fn test_from_toml_str_rejects_zero_threshold() {
    let err = EngineConfig::from_toml_str(
        r"
        [logging]
        slow_traversal_ms = 0
        ",
    )
    .unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
}

#[test]
fn test_zero_threshold_allowed_when_logging_disabled() {
    let config = EngineConfig::from_toml_str(
        r"
        [logging]
        slow_traversal_logging = false
        slow_traversal_ms = 0
        ",
    )
    .expect("disabled logging ignores threshold");
    assert!(!config.logging.slow_traversal_logging);
}

#[test]
fn test_from_toml_str_type_error() {
    let err = EngineConfig::from_toml_str("[graph]\ndirected = \"sometimes\"\n").unwrap_err();
    assert!(matches!(err, ConfigError::Load(_)));
    assert!(err.to_string().starts_with("Failed to load configuration"));
}

#[test]
#[serial]
fn test_load_from_file() {
    clear_env();
    let file = write_config(
        r"
        [graph]
        initial_capacity = 362880

        [logging]
        slow_traversal_ms = 250
        ",
    );

    let config = EngineConfig::load(file.path()).expect("load config file");
    assert_eq!(config.graph.initial_capacity, 362_880);
    assert_eq!(config.logging.slow_traversal_ms, 250);
    assert!(config.traversal.keep_singleton_trees);
}

#[test]
#[serial]
fn test_load_missing_file_uses_defaults() {
    clear_env();
    let dir = tempfile::tempdir().expect("create temp dir");
    let config = EngineConfig::load(dir.path().join("absent.toml")).expect("defaults");
    assert_eq!(config, EngineConfig::default());
}

#[test]
#[serial]
fn test_env_overrides_file() {
    clear_env();
    let file = write_config(
        r"
        [traversal]
        keep_singleton_trees = true

        [logging]
        slow_traversal_ms = 250
        ",
    );

    std::env::set_var("LOWLINK_TRAVERSAL__KEEP_SINGLETON_TREES", "false");
    std::env::set_var("LOWLINK_LOGGING__SLOW_TRAVERSAL_MS", "500");
    let result = EngineConfig::load(file.path());
    clear_env();

    let config = result.expect("load with env overrides");
    assert!(!config.traversal.keep_singleton_trees);
    assert_eq!(config.logging.slow_traversal_ms, 500);
}

#[test]
#[serial]
fn test_env_invalid_value_fails_validation() {
    clear_env();
    std::env::set_var("LOWLINK_LOGGING__SLOW_TRAVERSAL_MS", "0");
    let dir = tempfile::tempdir().expect("create temp dir");
    let result = EngineConfig::load(dir.path().join("absent.toml"));
    clear_env();

    assert!(matches!(result, Err(ConfigError::Invalid(_))));
}

#[test]
fn test_graph_from_config() {
    let config = GraphConfig {
        directed: true,
        initial_capacity: 16,
    };
    let graph = Graph::from_config("states", &config);
    assert_eq!(graph.label(), "states");
    assert_eq!(graph.mode(), GraphMode::Directed);
    assert!(graph.is_empty());
}
