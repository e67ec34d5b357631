//! Depth-first traversal producing a DFS forest, connected components and
//! articulation points in a single walk.
//!
//! The walk is iterative: each stack frame carries a node, its neighbor list
//! and a cursor into that list, so stack depth is bounded by heap memory
//! rather than the thread's call stack. Low-link bookkeeping happens when a
//! frame is popped, exactly where a recursive visit would return.

use rustc_hash::FxHashMap;

use crate::config::TraversalConfig;

use super::articulation::ArticulationTracker;
use super::components::ComponentBuilder;
use super::store::Graph;
use super::traversal::GraphTraversal;
use super::types::{GraphNode, NodeSet};

/// Result of a complete depth-first walk.
///
/// The walk starts at the requested node, then continues from every node not
/// yet visited, so the forest covers the whole graph. Every DFS tree is a
/// directed graph; every component is a sub-graph with the same directedness
/// as the walked graph.
#[derive(Debug, Clone)]
pub struct DfsForest {
    start: GraphNode,
    trees: Vec<Graph>,
    components: Vec<Graph>,
    membership: FxHashMap<GraphNode, usize>,
    discovery: FxHashMap<GraphNode, usize>,
    low: FxHashMap<GraphNode, usize>,
    parent: FxHashMap<GraphNode, Option<GraphNode>>,
    articulation: NodeSet,
}

impl DfsForest {
    /// Returns the node the walk started from.
    #[must_use]
    pub fn start(&self) -> &GraphNode {
        &self.start
    }

    /// Returns the DFS trees, in the order their roots were reached.
    #[must_use]
    pub fn trees(&self) -> &[Graph] {
        &self.trees
    }

    /// Consumes the forest and returns its trees.
    #[must_use]
    pub fn into_trees(self) -> Vec<Graph> {
        self.trees
    }

    /// Returns the connected components, one sub-graph each.
    #[must_use]
    pub fn components(&self) -> &[Graph] {
        &self.components
    }

    /// Returns the number of connected components.
    #[must_use]
    pub fn component_count(&self) -> usize {
        self.components.len()
    }

    /// Returns the index of the component containing `node`.
    #[must_use]
    pub fn component_of(&self, node: &GraphNode) -> Option<usize> {
        self.membership.get(node).copied()
    }

    /// Returns the articulation points found by the walk.
    ///
    /// Always empty for directed graphs.
    #[must_use]
    pub fn articulation_nodes(&self) -> &NodeSet {
        &self.articulation
    }

    /// Returns the number of articulation points.
    #[must_use]
    pub fn articulation_count(&self) -> usize {
        self.articulation.len()
    }

    /// Returns true if the walk visited `node`.
    #[must_use]
    pub fn is_visited(&self, node: &GraphNode) -> bool {
        self.discovery.contains_key(node)
    }

    /// Returns the number of visited nodes.
    #[must_use]
    pub fn visited_count(&self) -> usize {
        self.discovery.len()
    }

    /// Returns the pre-order index assigned to `node`.
    #[must_use]
    pub fn discovery(&self, node: &GraphNode) -> Option<usize> {
        self.discovery.get(node).copied()
    }

    /// Returns the low-link value of `node`.
    #[must_use]
    pub fn low(&self, node: &GraphNode) -> Option<usize> {
        self.low.get(node).copied()
    }

    /// Returns the DFS parent of `node`; `None` for roots and unvisited nodes.
    #[must_use]
    pub fn parent(&self, node: &GraphNode) -> Option<&GraphNode> {
        self.parent.get(node).and_then(Option::as_ref)
    }

    /// Returns true if `node` is the root of a DFS tree.
    #[must_use]
    pub fn is_root(&self, node: &GraphNode) -> bool {
        matches!(self.parent.get(node), Some(None))
    }
}

/// Runs a full depth-first walk starting at `start`.
///
/// Returns `None` if `start` is not a member of the graph. The first node
/// visited is always `start`; remaining roots follow the graph's node order.
#[must_use]
pub fn depth_first<G: GraphTraversal>(
    graph: &G,
    start: &GraphNode,
    config: &TraversalConfig,
) -> Option<DfsForest> {
    let Some(start) = graph.canonical_node(start) else {
        tracing::debug!(start = %start, "DFS rejected: start node not in graph");
        return None;
    };

    let mut walk = DfsWalk::new(graph);
    let mut trees = Vec::new();

    for root in std::iter::once(start.clone()).chain(graph.all_nodes()) {
        if walk.discovery.contains_key(&root) {
            continue;
        }
        let index = walk.components.open(graph.graph_mode());
        let mut tree = Graph::directed(&format!("dfsTree{}", index + 1));
        walk.explore(graph, root, &mut tree);
        if config.keep_singleton_trees || tree.edge_count() > 0 {
            trees.push(tree);
        }
    }

    let forest = walk.finish(start, trees);
    tracing::debug!(
        start = %forest.start,
        visited = forest.visited_count(),
        trees = forest.trees.len(),
        components = forest.component_count(),
        articulation_points = forest.articulation_count(),
        "DFS complete"
    );
    Some(forest)
}

/// One entry of the explicit DFS stack.
struct Frame {
    node: GraphNode,
    neighbors: Vec<GraphNode>,
    cursor: usize,
}

impl Frame {
    fn next_neighbor(&mut self) -> Option<GraphNode> {
        let next = self.neighbors.get(self.cursor)?.clone();
        self.cursor += 1;
        Some(next)
    }
}

/// Mutable state of one walk, turned into a [`DfsForest`] at the end.
struct DfsWalk {
    counter: usize,
    discovery: FxHashMap<GraphNode, usize>,
    low: FxHashMap<GraphNode, usize>,
    parent: FxHashMap<GraphNode, Option<GraphNode>>,
    components: ComponentBuilder,
    articulation: ArticulationTracker,
}

impl DfsWalk {
    fn new<G: GraphTraversal>(graph: &G) -> Self {
        let n = graph.order();
        Self {
            counter: 0,
            discovery: FxHashMap::with_capacity_and_hasher(n, Default::default()),
            low: FxHashMap::with_capacity_and_hasher(n, Default::default()),
            parent: FxHashMap::with_capacity_and_hasher(n, Default::default()),
            components: ComponentBuilder::with_capacity(n),
            articulation: ArticulationTracker::new(!graph.graph_mode().is_directed()),
        }
    }

    /// Marks `node` visited and builds its stack frame.
    fn enter<G: GraphTraversal>(
        &mut self,
        graph: &G,
        node: GraphNode,
        tree: &mut Graph,
    ) -> Frame {
        self.discovery.insert(node.clone(), self.counter);
        self.low.insert(node.clone(), self.counter);
        self.counter += 1;
        tree.add_node(node.clone());
        self.components.add_member(&node);
        Frame {
            neighbors: graph.adjacent_nodes(&node),
            node,
            cursor: 0,
        }
    }

    /// Walks the tree rooted at `root`.
    fn explore<G: GraphTraversal>(&mut self, graph: &G, root: GraphNode, tree: &mut Graph) {
        self.parent.insert(root.clone(), None);
        let mut stack = vec![self.enter(graph, root.clone(), tree)];

        while let Some(frame) = stack.last_mut() {
            let Some(next) = frame.next_neighbor() else {
                if let Some(done) = stack.pop() {
                    self.leave(&done.node);
                }
                continue;
            };
            let node = frame.node.clone();

            self.components.record_edge(&node, &next);
            if let Some(&next_discovery) = self.discovery.get(&next) {
                if self.parent_of(&node) != Some(&next) {
                    self.lower(&node, next_discovery);
                }
            } else {
                tree.add_edge(node.clone(), next.clone());
                self.parent.insert(next.clone(), Some(node.clone()));
                self.articulation.record_tree_edge(&node);
                let child = self.enter(graph, next, tree);
                stack.push(child);
            }
        }

        self.articulation.root_finished(&root);
    }

    /// Propagates low-link to the parent and runs the non-root cut test.
    fn leave(&mut self, node: &GraphNode) {
        let Some(parent) = self.parent_of(node).cloned() else {
            return;
        };
        let child_low = self.low[node];
        self.lower(&parent, child_low);

        let parent_is_root = self.parent_of(&parent).is_none();
        let parent_discovery = self.discovery[&parent];
        self.articulation
            .child_finished(&parent, parent_is_root, parent_discovery, child_low);
    }

    fn lower(&mut self, node: &GraphNode, candidate: usize) {
        if let Some(low) = self.low.get_mut(node) {
            *low = (*low).min(candidate);
        }
    }

    fn parent_of(&self, node: &GraphNode) -> Option<&GraphNode> {
        self.parent.get(node).and_then(Option::as_ref)
    }

    fn finish(self, start: GraphNode, trees: Vec<Graph>) -> DfsForest {
        let (components, membership) = self.components.finish();
        DfsForest {
            start,
            trees,
            components,
            membership,
            discovery: self.discovery,
            low: self.low,
            parent: self.parent,
            articulation: self.articulation.finish(),
        }
    }
}
