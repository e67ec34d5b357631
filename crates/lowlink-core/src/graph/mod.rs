//! In-memory graph module.
//!
//! Provides the adjacency-list store, depth-first and breadth-first
//! traversals, connected components, articulation points and shortest paths.
//! Nodes are opaque keyed identities, so the same engine serves any state
//! space that can name its states.
//!
//! # Example
//!
//! ```rust
//! use lowlink_core::graph::{breadth_first, depth_first, Graph, GraphNode};
//! use lowlink_core::TraversalConfig;
//!
//! let mut graph = Graph::new("G");
//! graph.add_edge(GraphNode::new("X"), GraphNode::new("Y"));
//! graph.add_edge(GraphNode::new("X"), GraphNode::new("Z"));
//!
//! let forest = depth_first(&graph, &GraphNode::new("X"), &TraversalConfig::default()).unwrap();
//! assert_eq!(forest.component_count(), 1);
//! assert!(forest.articulation_nodes().contains("X"));
//!
//! let outcome = breadth_first(&graph, &GraphNode::new("Y")).unwrap();
//! assert_eq!(outcome.distance(&GraphNode::new("Z")), Some(2));
//! ```

mod analyzer;
mod articulation;
pub mod bfs;
mod components;
pub mod dfs;
pub mod diagnostics;
mod store;
pub mod traversal;
mod types;


pub use analyzer::{GraphAnalyzer, TraversalState};
pub use bfs::{breadth_first, BfsOutcome};
pub use dfs::{depth_first, DfsForest};
pub use diagnostics::{SlowTraversalLogger, TraversalKind, TraversalStats};
pub use store::Graph;
pub use traversal::GraphTraversal;
pub use types::{FxIndexMap, FxIndexSet, GraphMode, GraphNode, NodeSet};
