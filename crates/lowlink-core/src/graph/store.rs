//! Adjacency-list graph store.
//!
//! A single canonical map from node identity to its neighbor set. There is no
//! parallel id-to-node index: lookups by key go through the same map via
//! `Borrow<str>`, so the two views cannot drift apart.

use std::fmt;

use rustc_hash::FxBuildHasher;

use crate::config::GraphConfig;

use super::types::{FxIndexMap, GraphMode, GraphNode, NodeSet};

/// In-memory graph stored as an adjacency list.
///
/// Provides O(1) expected-time node and edge lookups. Node and edge insertion
/// is idempotent: re-adding an existing node or edge leaves the graph untouched.
/// For undirected graphs an edge and its mirror are inserted together and
/// counted once.
///
/// Iteration over nodes and neighbors follows insertion order.
#[derive(Debug, Clone)]
pub struct Graph {
    /// Human-readable name, used in summaries and sub-graph labels.
    label: String,
    /// Edge directedness.
    mode: GraphMode,
    /// Node identity -> neighbor identities.
    adjacency: FxIndexMap<GraphNode, NodeSet>,
    /// Distinct edges (an undirected edge and its mirror count once).
    edge_count: usize,
}

impl Graph {
    /// Creates an empty undirected graph.
    #[must_use]
    pub fn new(label: &str) -> Self {
        Self::with_mode(label, GraphMode::Undirected)
    }

    /// Creates an empty directed graph.
    #[must_use]
    pub fn directed(label: &str) -> Self {
        Self::with_mode(label, GraphMode::Directed)
    }

    /// Creates an empty graph in the given mode.
    #[must_use]
    pub fn with_mode(label: &str, mode: GraphMode) -> Self {
        Self::with_capacity(label, mode, 0)
    }

    /// Creates an empty graph with room for `expected_nodes` nodes.
    ///
    /// Large state-space graphs know their size up front; pre-sizing avoids
    /// rehashing while the graph is populated.
    #[must_use]
    pub fn with_capacity(label: &str, mode: GraphMode, expected_nodes: usize) -> Self {
        Self {
            label: label.to_string(),
            mode,
            adjacency: FxIndexMap::with_capacity_and_hasher(expected_nodes, FxBuildHasher),
            edge_count: 0,
        }
    }

    /// Creates an empty graph from a [`GraphConfig`].
    #[must_use]
    pub fn from_config(label: &str, config: &GraphConfig) -> Self {
        Self::with_capacity(
            label,
            GraphMode::from_directed(config.directed),
            config.initial_capacity,
        )
    }

    /// Returns the graph label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the edge directedness.
    #[must_use]
    pub fn mode(&self) -> GraphMode {
        self.mode
    }

    /// Returns true for directed graphs.
    #[must_use]
    pub fn is_directed(&self) -> bool {
        self.mode.is_directed()
    }

    // ── Nodes ──────────────────────────────────────────────────────────

    /// Adds a node if its key is absent and returns the canonical instance.
    ///
    /// When a node with the same key already exists, the stored instance is
    /// returned and `node` is dropped. Callers should keep using the returned
    /// value for subsequent operations.
    pub fn add_node(&mut self, node: GraphNode) -> GraphNode {
        let entry = self.adjacency.entry(node);
        let canonical = entry.key().clone();
        entry.or_default();
        canonical
    }

    /// Returns true if a node with the same key is in the graph.
    #[must_use]
    pub fn contains_node(&self, node: &GraphNode) -> bool {
        self.adjacency.contains_key(node)
    }

    /// Returns the canonical node stored under `key`.
    #[must_use]
    pub fn node_by_id(&self, key: &str) -> Option<&GraphNode> {
        self.adjacency.get_key_value(key).map(|(node, _)| node)
    }

    /// Returns the canonical instance equal to `node`.
    #[must_use]
    pub fn canonical(&self, node: &GraphNode) -> Option<&GraphNode> {
        self.adjacency.get_key_value(node).map(|(node, _)| node)
    }

    /// Returns the number of nodes (n).
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns true if the graph has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Iterates over all nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &GraphNode> + '_ {
        self.adjacency.keys()
    }

    // ── Edges ──────────────────────────────────────────────────────────

    /// Adds an edge, creating missing endpoints first.
    ///
    /// For undirected graphs the mirror edge is inserted in the same call.
    /// Returns true if the edge was new; the edge count grows by exactly one
    /// in that case.
    pub fn add_edge(&mut self, from: GraphNode, to: GraphNode) -> bool {
        let from = self.add_node(from);
        let to = self.add_node(to);

        let inserted = self
            .adjacency
            .get_mut(&from)
            .is_some_and(|neighbors| neighbors.insert(to.clone()));
        if !inserted {
            return false;
        }

        if !self.mode.is_directed() {
            if let Some(neighbors) = self.adjacency.get_mut(&to) {
                neighbors.insert(from);
            }
        }
        self.edge_count += 1;
        true
    }

    /// Returns true if the edge `from -> to` is present.
    ///
    /// For undirected graphs this is symmetric.
    #[must_use]
    pub fn contains_edge(&self, from: &GraphNode, to: &GraphNode) -> bool {
        self.adjacency
            .get(from)
            .is_some_and(|neighbors| neighbors.contains(to))
    }

    /// Returns the neighbor set of a node, or `None` if the node is absent.
    #[must_use]
    pub fn neighbors(&self, node: &GraphNode) -> Option<&NodeSet> {
        self.adjacency.get(node)
    }

    /// Returns the number of distinct edges (m).
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Returns the out-degree of a node (its degree for undirected graphs).
    #[must_use]
    pub fn degree(&self, node: &GraphNode) -> usize {
        self.adjacency.get(node).map_or(0, NodeSet::len)
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}={{{} node(s),{} edge(s)}}",
            self.label,
            self.node_count(),
            self.edge_count
        )
    }
}
