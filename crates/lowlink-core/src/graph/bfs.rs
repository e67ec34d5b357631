//! Breadth-first traversal and shortest-path reconstruction.
//!
//! Unlike the DFS walk, BFS explores only the component containing its start
//! node. Distances are hop counts, so the parent chain of any reached node is
//! a shortest path back to the start.

use std::collections::VecDeque;

use rustc_hash::FxHashMap;

use super::store::Graph;
use super::traversal::GraphTraversal;
use super::types::{GraphNode, NodeSet};

/// Result of a breadth-first walk from a single start node.
#[derive(Debug, Clone)]
pub struct BfsOutcome {
    start: GraphNode,
    levels: Vec<NodeSet>,
    distance: FxHashMap<GraphNode, usize>,
    parent: FxHashMap<GraphNode, Option<GraphNode>>,
    tree: Graph,
    component: Graph,
}

impl BfsOutcome {
    /// Returns the start node.
    #[must_use]
    pub fn start(&self) -> &GraphNode {
        &self.start
    }

    /// Returns the BFS levels: `levels()[i]` holds the nodes at distance `i`.
    #[must_use]
    pub fn levels(&self) -> &[NodeSet] {
        &self.levels
    }

    /// Returns the hop distance from the start to `node`, if reached.
    #[must_use]
    pub fn distance(&self, node: &GraphNode) -> Option<usize> {
        self.distance.get(node).copied()
    }

    /// Returns the BFS parent of `node`; `None` for the start and unreached nodes.
    #[must_use]
    pub fn parent(&self, node: &GraphNode) -> Option<&GraphNode> {
        self.parent.get(node).and_then(Option::as_ref)
    }

    /// Returns true if the walk reached `node`.
    #[must_use]
    pub fn reaches(&self, node: &GraphNode) -> bool {
        self.parent.contains_key(node)
    }

    /// Returns the number of reached nodes, the start included.
    #[must_use]
    pub fn reached_count(&self) -> usize {
        self.parent.len()
    }

    /// Returns the directed BFS tree.
    #[must_use]
    pub fn tree(&self) -> &Graph {
        &self.tree
    }

    /// Returns the explored component as a sub-graph of the walked graph.
    #[must_use]
    pub fn component(&self) -> &Graph {
        &self.component
    }

    /// Rebuilds the shortest path from the start to `end`.
    ///
    /// Walks the parent chain backward from `end`. Returns `None` when `end`
    /// was not reached.
    #[must_use]
    pub fn path_to(&self, end: &GraphNode) -> Option<Vec<GraphNode>> {
        let (end, _) = self.parent.get_key_value(end)?;

        let mut path = Vec::with_capacity(self.distance(end).map_or(1, |d| d + 1));
        let mut current = Some(end.clone());
        while let Some(node) = current {
            current = self.parent(&node).cloned();
            path.push(node);
        }
        path.reverse();

        (path.first() == Some(&self.start)).then_some(path)
    }
}

/// Runs a breadth-first walk over the component containing `start`.
///
/// Returns `None` if `start` is not a member of the graph.
#[must_use]
pub fn breadth_first<G: GraphTraversal>(graph: &G, start: &GraphNode) -> Option<BfsOutcome> {
    let Some(start) = graph.canonical_node(start) else {
        tracing::debug!(start = %start, "BFS rejected: start node not in graph");
        return None;
    };

    let mut distance = FxHashMap::default();
    let mut parent = FxHashMap::default();
    let mut levels = vec![NodeSet::from_iter([start.clone()])];
    let mut tree = Graph::directed("bfsTree");
    let mut component = Graph::with_mode("CC0", graph.graph_mode());
    let mut queue = VecDeque::new();

    distance.insert(start.clone(), 0usize);
    parent.insert(start.clone(), None);
    tree.add_node(start.clone());
    component.add_node(start.clone());
    queue.push_back((start.clone(), 0usize));

    while let Some((current, depth)) = queue.pop_front() {
        for next in graph.adjacent_nodes(&current) {
            component.add_edge(current.clone(), next.clone());
            if distance.contains_key(&next) {
                continue;
            }

            let next_depth = depth + 1;
            distance.insert(next.clone(), next_depth);
            parent.insert(next.clone(), Some(current.clone()));
            tree.add_edge(current.clone(), next.clone());
            if levels.len() == next_depth {
                levels.push(NodeSet::default());
            }
            levels[next_depth].insert(next.clone());
            queue.push_back((next, next_depth));
        }
    }

    tracing::debug!(
        start = %start,
        reached = parent.len(),
        levels = levels.len(),
        "BFS complete"
    );

    Some(BfsOutcome {
        start,
        levels,
        distance,
        parent,
        tree,
        component,
    })
}
