//! Read-only adjacency view consumed by the traversal algorithms.
//!
//! Provides generic traversal via the [`GraphTraversal`] trait, so any graph
//! store can run DFS and BFS without reimplementation.

use super::store::Graph;
use super::types::{GraphMode, GraphNode};

/// Trait for graph traversal: any graph store can implement this.
///
/// All nodes handed back must be the store's canonical instances.
pub trait GraphTraversal {
    /// Returns the edge directedness of the underlying graph.
    fn graph_mode(&self) -> GraphMode;

    /// Returns the number of nodes.
    fn order(&self) -> usize;

    /// Returns every node, in the store's iteration order.
    fn all_nodes(&self) -> Vec<GraphNode>;

    /// Returns the neighbors of a node (empty if the node is absent).
    fn adjacent_nodes(&self, node: &GraphNode) -> Vec<GraphNode>;

    /// Returns the canonical instance equal to `node`, if it is a member.
    fn canonical_node(&self, node: &GraphNode) -> Option<GraphNode>;
}

/// Implement `GraphTraversal` for the adjacency-list [`Graph`].
impl GraphTraversal for Graph {
    fn graph_mode(&self) -> GraphMode {
        self.mode()
    }

    fn order(&self) -> usize {
        self.node_count()
    }

    fn all_nodes(&self) -> Vec<GraphNode> {
        self.nodes().cloned().collect()
    }

    fn adjacent_nodes(&self, node: &GraphNode) -> Vec<GraphNode> {
        self.neighbors(node)
            .map(|neighbors| neighbors.iter().cloned().collect())
            .unwrap_or_default()
    }

    fn canonical_node(&self, node: &GraphNode) -> Option<GraphNode> {
        self.canonical(node).cloned()
    }
}
