//! # Lowlink Core
//!
//! Generic in-memory graph engine for state-space exploration.
//!
//! Nodes are opaque identities keyed by a string (a puzzle configuration, a
//! machine state, a router name). The engine stores them in an adjacency
//! list and answers structural questions about the resulting graph.
//!
//! ## Features
//!
//! - **Graph store**: directed or undirected, idempotent node and edge insertion
//! - **Depth-first forest**: iterative walk with discovery and low-link values
//! - **Components**: every node assigned to exactly one connected component
//! - **Articulation points**: cut vertices found during the same DFS pass
//! - **Breadth-first levels**: hop distances and shortest paths
//!
//! ## Quick Start
//!
//! ```rust
//! use lowlink_core::{Graph, GraphAnalyzer, GraphNode};
//!
//! let mut graph = Graph::new("puzzle");
//! graph.add_edge(GraphNode::new("123"), GraphNode::new("132"));
//! graph.add_edge(GraphNode::new("132"), GraphNode::new("312"));
//!
//! let mut analyzer = GraphAnalyzer::new(&graph);
//! analyzer.dfs(&GraphNode::new("123")).unwrap();
//! assert_eq!(analyzer.number_of_ccs(), Some(1));
//!
//! let path = analyzer.shortest_path_by_key("123", "312").unwrap().unwrap();
//! assert_eq!(path.len(), 3);
//! println!("{graph}"); // puzzle={3 node(s),2 edge(s)}
//! ```

#![warn(missing_docs)]
#![cfg_attr(test, allow(clippy::uninlined_format_args, clippy::cast_possible_truncation))]

pub mod config;
pub mod error;
pub mod graph;

#[cfg(test)]
mod config_tests;

pub use config::{ConfigError, EngineConfig, GraphConfig, LoggingConfig, TraversalConfig};
pub use error::{Error, Result};
pub use graph::{
    breadth_first, depth_first, BfsOutcome, DfsForest, Graph, GraphAnalyzer, GraphMode, GraphNode,
    GraphTraversal, NodeSet, TraversalState,
};
