//! Identity and mode types shared by the graph store and traversals.

use std::borrow::Borrow;
use std::fmt;
use std::sync::Arc;

use indexmap::{IndexMap, IndexSet};
use rustc_hash::FxBuildHasher;

/// Insertion-ordered hash map keyed with the Fx hasher.
pub type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

/// Insertion-ordered hash set keyed with the Fx hasher.
pub type FxIndexSet<T> = IndexSet<T, FxBuildHasher>;

/// Ordered set of node identities (neighbor sets, BFS levels, articulation sets).
pub type NodeSet = FxIndexSet<GraphNode>;

/// Immutable node identity.
///
/// Equality, ordering and hashing are defined solely by the key, so two nodes
/// built from the same key are the same node everywhere. Cloning is cheap: the
/// key is shared behind an [`Arc`].
///
/// # Example
///
/// ```rust
/// use lowlink_core::graph::GraphNode;
///
/// let a = GraphNode::new("123456780");
/// let b = GraphNode::new(String::from("123456780"));
/// assert_eq!(a, b);
/// assert_eq!(a.key(), "123456780");
/// ```
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GraphNode {
    // Hash must stay identical to `str`'s so that `Borrow<str>` lookups work.
    key: Arc<str>,
}

impl GraphNode {
    /// Creates a node identity from its key.
    #[must_use]
    pub fn new(key: impl Into<Arc<str>>) -> Self {
        Self { key: key.into() }
    }

    /// Returns the node key.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns true if both values share the same key allocation.
    ///
    /// Nodes handed out by a graph are canonical: every lookup of the same key
    /// returns a clone of one stored instance.
    #[must_use]
    pub fn same_instance(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.key, &other.key)
    }
}

impl Borrow<str> for GraphNode {
    fn borrow(&self) -> &str {
        &self.key
    }
}

impl From<&str> for GraphNode {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

impl From<String> for GraphNode {
    fn from(key: String) -> Self {
        Self::new(key)
    }
}

impl fmt::Debug for GraphNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GraphNode({})", self.key)
    }
}

impl fmt::Display for GraphNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key)
    }
}

/// Edge directedness of a graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GraphMode {
    /// Every edge `(u, v)` is stored together with its mirror `(v, u)`.
    #[default]
    Undirected,
    /// Edges are stored only in the direction they were added.
    Directed,
}

impl GraphMode {
    /// Returns the mode matching a `directed` flag.
    #[must_use]
    pub fn from_directed(directed: bool) -> Self {
        if directed {
            Self::Directed
        } else {
            Self::Undirected
        }
    }

    /// Returns true for [`GraphMode::Directed`].
    #[must_use]
    pub fn is_directed(self) -> bool {
        matches!(self, Self::Directed)
    }
}
