//! Connected components, collected as a by-product of a traversal.
//!
//! Each traversal root opens exactly one component, so after a full walk the
//! number of components equals the number of connected components and every
//! node belongs to exactly one of them.

use rustc_hash::FxHashMap;

use super::store::Graph;
use super::types::{GraphMode, GraphNode};

/// Accumulates component sub-graphs while a traversal runs.
#[derive(Debug, Default)]
pub(crate) struct ComponentBuilder {
    components: Vec<Graph>,
    membership: FxHashMap<GraphNode, usize>,
}

impl ComponentBuilder {
    pub(crate) fn with_capacity(expected_nodes: usize) -> Self {
        Self {
            components: Vec::new(),
            membership: FxHashMap::with_capacity_and_hasher(expected_nodes, Default::default()),
        }
    }

    /// Opens a new component in the graph's own mode and returns its index.
    pub(crate) fn open(&mut self, mode: GraphMode) -> usize {
        let index = self.components.len();
        self.components.push(Graph::with_mode(&format!("CC{index}"), mode));
        index
    }

    /// Adds a visited node to the current component.
    pub(crate) fn add_member(&mut self, node: &GraphNode) {
        let Some(index) = self.components.len().checked_sub(1) else {
            return;
        };
        self.membership.insert(node.clone(), index);
        self.components[index].add_node(node.clone());
    }

    /// Records the edge `from -> to` into the current component.
    ///
    /// Recorded whether or not `to` is already visited, so back and cross
    /// edges inside the component are kept. A directed edge into a component
    /// closed earlier is skipped: the target already belongs there.
    pub(crate) fn record_edge(&mut self, from: &GraphNode, to: &GraphNode) {
        let Some(current) = self.components.len().checked_sub(1) else {
            return;
        };
        if self
            .membership
            .get(to)
            .is_some_and(|&index| index != current)
        {
            return;
        }
        self.components[current].add_edge(from.clone(), to.clone());
    }

    pub(crate) fn finish(self) -> (Vec<Graph>, FxHashMap<GraphNode, usize>) {
        (self.components, self.membership)
    }
}
