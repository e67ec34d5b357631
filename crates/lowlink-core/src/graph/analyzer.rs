//! Stateful analysis session over a graph.
//!
//! [`GraphAnalyzer`] keeps the result of the most recent traversal and answers
//! component, articulation, level and shortest-path queries from it. Every
//! `dfs`/`bfs` call replaces that state entirely. The analyzer borrows the
//! graph immutably, so the graph cannot be mutated while a session is alive.

use std::time::Instant;

use crate::config::{EngineConfig, TraversalConfig};
use crate::error::{Error, Result};

use super::bfs::{breadth_first, BfsOutcome};
use super::dfs::{depth_first, DfsForest};
use super::diagnostics::{SlowTraversalLogger, TraversalKind, TraversalStats};
use super::store::Graph;
use super::traversal::GraphTraversal;
use super::types::{GraphNode, NodeSet};

/// State left behind by the most recent traversal.
#[derive(Debug, Clone, Default)]
pub enum TraversalState {
    /// No traversal has completed yet.
    #[default]
    NotRun,
    /// A full DFS walk.
    DepthFirst(DfsForest),
    /// A single-component BFS walk.
    BreadthFirst(BfsOutcome),
}

/// Analysis session: traversals plus queries over their results.
///
/// Component and articulation queries return `None` until a DFS has run
/// ("not computed"); level and distance queries return `None` until a BFS has
/// run.
///
/// # Example
///
/// ```rust
/// use lowlink_core::graph::{Graph, GraphAnalyzer, GraphNode};
///
/// let mut graph = Graph::new("G");
/// for (u, v) in [("A", "B"), ("B", "C"), ("C", "A"), ("C", "D"), ("E", "F")] {
///     graph.add_edge(GraphNode::new(u), GraphNode::new(v));
/// }
///
/// let mut analyzer = GraphAnalyzer::new(&graph);
/// assert_eq!(analyzer.number_of_ccs(), None);
///
/// analyzer.dfs(&GraphNode::new("A")).unwrap();
/// assert_eq!(analyzer.number_of_ccs(), Some(2));
/// assert_eq!(analyzer.number_of_articulation_nodes(), Some(1));
///
/// let path = analyzer
///     .shortest_path(&GraphNode::new("A"), &GraphNode::new("D"))
///     .unwrap();
/// let keys: Vec<&str> = path.iter().map(GraphNode::key).collect();
/// assert_eq!(keys, ["A", "C", "D"]);
/// ```
#[derive(Debug)]
pub struct GraphAnalyzer<'g, G: GraphTraversal = Graph> {
    graph: &'g G,
    traversal: TraversalConfig,
    slow_log: SlowTraversalLogger,
    state: TraversalState,
}

impl<'g, G: GraphTraversal> GraphAnalyzer<'g, G> {
    /// Creates a session with default configuration.
    #[must_use]
    pub fn new(graph: &'g G) -> Self {
        Self::with_config(graph, &EngineConfig::default())
    }

    /// Creates a session using the traversal and logging settings of `config`.
    #[must_use]
    pub fn with_config(graph: &'g G, config: &EngineConfig) -> Self {
        Self {
            graph,
            traversal: config.traversal.clone(),
            slow_log: SlowTraversalLogger::from_config(&config.logging),
            state: TraversalState::NotRun,
        }
    }

    /// Returns the analyzed graph.
    #[must_use]
    pub fn graph(&self) -> &'g G {
        self.graph
    }

    /// Returns the state left by the most recent traversal.
    #[must_use]
    pub fn state(&self) -> &TraversalState {
        &self.state
    }

    /// Runs a full DFS from `start`, replacing any previous traversal state.
    ///
    /// Returns `None`, leaving the previous state untouched, if `start` is not
    /// in the graph.
    pub fn dfs(&mut self, start: &GraphNode) -> Option<&DfsForest> {
        let started = Instant::now();
        let forest = depth_first(self.graph, start, &self.traversal)?;
        self.slow_log.log_if_slow(
            started.elapsed(),
            &TraversalStats {
                kind: TraversalKind::DepthFirst,
                start: forest.start().key().to_string(),
                nodes_visited: forest.visited_count(),
                trees: forest.trees().len(),
                components: forest.component_count(),
            },
        );

        self.state = TraversalState::DepthFirst(forest);
        self.last_dfs()
    }

    /// Runs a BFS from `start`, replacing any previous traversal state.
    ///
    /// Returns `None`, leaving the previous state untouched, if `start` is not
    /// in the graph.
    pub fn bfs(&mut self, start: &GraphNode) -> Option<&BfsOutcome> {
        let started = Instant::now();
        let outcome = breadth_first(self.graph, start)?;
        self.slow_log.log_if_slow(
            started.elapsed(),
            &TraversalStats {
                kind: TraversalKind::BreadthFirst,
                start: outcome.start().key().to_string(),
                nodes_visited: outcome.reached_count(),
                trees: 1,
                components: 1,
            },
        );

        self.state = TraversalState::BreadthFirst(outcome);
        self.last_bfs()
    }

    /// Runs a full DFS from the node stored under `key`.
    pub fn dfs_by_key(&mut self, key: &str) -> Result<&DfsForest> {
        let start = self.resolve(key)?;
        self.dfs(&start).ok_or_else(|| Error::NodeNotFound(key.to_string()))
    }

    /// Runs a BFS from the node stored under `key`.
    pub fn bfs_by_key(&mut self, key: &str) -> Result<&BfsOutcome> {
        let start = self.resolve(key)?;
        self.bfs(&start).ok_or_else(|| Error::NodeNotFound(key.to_string()))
    }

    /// Returns the most recent DFS forest, if the last traversal was a DFS.
    #[must_use]
    pub fn last_dfs(&self) -> Option<&DfsForest> {
        match &self.state {
            TraversalState::DepthFirst(forest) => Some(forest),
            _ => None,
        }
    }

    /// Returns the most recent BFS outcome, if the last traversal was a BFS.
    #[must_use]
    pub fn last_bfs(&self) -> Option<&BfsOutcome> {
        match &self.state {
            TraversalState::BreadthFirst(outcome) => Some(outcome),
            _ => None,
        }
    }

    // ── Components and articulation points ─────────────────────────────

    /// Returns the number of connected components, or `None` if not computed.
    #[must_use]
    pub fn number_of_ccs(&self) -> Option<usize> {
        self.last_dfs().map(DfsForest::component_count)
    }

    /// Returns the connected components, or `None` if not computed.
    #[must_use]
    pub fn ccs(&self) -> Option<&[Graph]> {
        self.last_dfs().map(DfsForest::components)
    }

    /// Returns the articulation points, or `None` if no DFS has run.
    #[must_use]
    pub fn articulation_nodes(&self) -> Option<&NodeSet> {
        self.last_dfs().map(DfsForest::articulation_nodes)
    }

    /// Returns the number of articulation points, or `None` if no DFS has run.
    #[must_use]
    pub fn number_of_articulation_nodes(&self) -> Option<usize> {
        self.last_dfs().map(DfsForest::articulation_count)
    }

    // ── Levels, distances and paths ────────────────────────────────────

    /// Returns the BFS levels of the most recent BFS.
    #[must_use]
    pub fn levels(&self) -> Option<&[NodeSet]> {
        self.last_bfs().map(BfsOutcome::levels)
    }

    /// Returns the distance of `node` from the most recent BFS start.
    #[must_use]
    pub fn distance(&self, node: &GraphNode) -> Option<usize> {
        self.last_bfs().and_then(|outcome| outcome.distance(node))
    }

    /// Returns a shortest path from `start` to `end`, both included.
    ///
    /// Reuses the most recent BFS when it was rooted at `start` and reached
    /// `end`; otherwise runs `bfs(start)` first. Returns `None` if either
    /// endpoint is missing or `end` is unreachable from `start`.
    pub fn shortest_path(
        &mut self,
        start: &GraphNode,
        end: &GraphNode,
    ) -> Option<Vec<GraphNode>> {
        let (Some(start), Some(end)) = (
            self.graph.canonical_node(start),
            self.graph.canonical_node(end),
        ) else {
            tracing::debug!(
                start = %start,
                end = %end,
                "Shortest path rejected: endpoint not in graph"
            );
            return None;
        };

        let fresh = self.last_bfs().is_some_and(|outcome| {
            outcome.start() == &start && (start == end || outcome.reaches(&end))
        });
        if fresh {
            tracing::debug!(start = %start, end = %end, "Shortest path: reusing BFS state");
        } else {
            tracing::debug!(start = %start, end = %end, "Shortest path: running BFS");
            self.bfs(&start)?;
        }

        self.last_bfs().and_then(|outcome| outcome.path_to(&end))
    }

    /// Returns a shortest path between the nodes stored under `start` and `end`.
    ///
    /// `Ok(None)` means both nodes exist but `end` is unreachable.
    pub fn shortest_path_by_key(
        &mut self,
        start: &str,
        end: &str,
    ) -> Result<Option<Vec<GraphNode>>> {
        let start = self.resolve(start)?;
        let end = self.resolve(end)?;
        Ok(self.shortest_path(&start, &end))
    }

    fn resolve(&self, key: &str) -> Result<GraphNode> {
        self.graph
            .canonical_node(&GraphNode::new(key))
            .ok_or_else(|| Error::NodeNotFound(key.to_string()))
    }
}
