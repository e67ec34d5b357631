//! Articulation point (cut vertex) detection.
//!
//! Not a separate pass: the DFS walk feeds this tracker inline with its
//! discovery and low-link values. The classic low-link rule applies:
//!
//! - a non-root `u` is a cut vertex if some tree child `v` has `low[v] >= disc[u]`;
//! - a DFS root is a cut vertex iff it has more than one tree child.
//!
//! Tree children are counted as tree edges are recorded, so the root test
//! never rescans the parent relation. Only defined for undirected graphs; a
//! disabled tracker ignores every call.

use rustc_hash::FxHashMap;

use super::types::{GraphNode, NodeSet};

#[derive(Debug, Default)]
pub(crate) struct ArticulationTracker {
    enabled: bool,
    children: FxHashMap<GraphNode, usize>,
    cut_vertices: NodeSet,
}

impl ArticulationTracker {
    pub(crate) fn new(enabled: bool) -> Self {
        Self {
            enabled,
            ..Self::default()
        }
    }

    /// Counts a new tree edge `parent -> child`.
    pub(crate) fn record_tree_edge(&mut self, parent: &GraphNode) {
        if self.enabled {
            *self.children.entry(parent.clone()).or_insert(0) += 1;
        }
    }

    /// Applies the non-root test once a tree child of `parent` is finished.
    pub(crate) fn child_finished(
        &mut self,
        parent: &GraphNode,
        parent_is_root: bool,
        parent_discovery: usize,
        child_low: usize,
    ) {
        if self.enabled && !parent_is_root && child_low >= parent_discovery {
            self.cut_vertices.insert(parent.clone());
        }
    }

    /// Applies the root test once a DFS tree is complete.
    pub(crate) fn root_finished(&mut self, root: &GraphNode) {
        if self.enabled && self.child_count(root) > 1 {
            self.cut_vertices.insert(root.clone());
        }
    }

    pub(crate) fn child_count(&self, node: &GraphNode) -> usize {
        self.children.get(node).copied().unwrap_or(0)
    }

    pub(crate) fn finish(self) -> NodeSet {
        self.cut_vertices
    }
}
