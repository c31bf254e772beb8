//! Adaptive prefix tree used for every dictionary lookup.
//!
//! The trie has a strict two-phase lifecycle:
//!
//! ```text
//!   TrieBuilder<V>  ── insert / extend / collect ──┐
//!        │                                         │ (queries allowed)
//!        ├── freeze()   ──▶ Trie<V>  (all nodes dense)
//!        └── optimize() ──▶ Trie<V>  (sparse where occupancy is low)
//! ```
//!
//! `Trie<V>` has no insertion method, so "insert after optimize" cannot be
//! written. The builder stays usable as a growable map in its own right; the
//! stemmer's result cache is a builder that is never frozen.
//!
//! ## Lookups
//!
//! Every read operation is provided by [`PrefixTree`], implemented for both
//! phases. The notable one is [`PrefixTree::find_node_or_last`]:
//!
//! ```text
//! trie: { "کتاب" }
//!
//! find_node_or_last("کتاب")    -> (node@کتاب, exact = true)
//! find_node_or_last("کتابها")  -> (node@کتاب, exact = false)   // walked off a leaf
//! find_node_or_last("کتب")     -> None                          // broken path
//! ```
//!
//! An inexact match is only reported when the walk reaches a node with no
//! children at all. A node that has children but not the one required fails
//! the lookup; there is no closest-match search.
//!
//! ## Enumeration order
//!
//! Enumerations are depth-first pre-order with children in ascending char order.

#[path = "trie/iter.rs"]
mod iter;
#[path = "trie/node.rs"]
mod node;

pub use iter::{Iter, Nodes};
pub use node::{DenseNode, Node, TrieNode};

/// Allocation counters for a trie.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TrieStats {
    /// Nodes allocated below the root.
    pub nodes: usize,
    /// Nodes rewritten as sparse by [`TrieBuilder::optimize`].
    pub sparse_nodes: usize,
}

/// Read operations shared by [`TrieBuilder`] and [`Trie`].
pub trait PrefixTree {
    type Value;
    type Node: TrieNode<Value = Self::Value>;

    fn root(&self) -> &Self::Node;

    /// Number of distinct keys carrying a value.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Exact-path walk; `None` as soon as a required child is missing.
    ///
    /// The returned node may be an interior node without a value.
    fn find_node(&self, key: &str) -> Option<&Self::Node> {
        key.chars().try_fold(self.root(), |node, c| node.child(c))
    }

    /// Exact walk that tolerates running off a structural leaf.
    ///
    /// Returns `(node, true)` when `key` was consumed completely, `(leaf, false)`
    /// when a childless node was reached with input left over, and `None` when
    /// a node with children has no child for the next char.
    fn find_node_or_last(&self, key: &str) -> Option<(&Self::Node, bool)> {
        let mut node = self.root();
        for c in key.chars() {
            if node.is_leaf() {
                return Some((node, false));
            }
            node = node.child(c)?;
        }
        Some((node, true))
    }

    /// Value stored under exactly `key`.
    fn get(&self, key: &str) -> Option<&Self::Value> {
        self.find_node(key)?.value()
    }

    fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Values of every valued proper-or-full prefix of `key`, shortest first.
    fn find_all(&self, key: &str) -> Vec<&Self::Value> {
        let mut found = Vec::new();
        let mut node = self.root();
        for c in key.chars() {
            match node.child(c) {
                Some(child) => node = child,
                None => break,
            }
            if let Some(value) = node.value() {
                found.push(value);
            }
        }
        found
    }

    /// Values of every key that occurs as a substring of `text`, ordered by
    /// start position then length.
    fn all_substring_values(&self, text: &str) -> Vec<&Self::Value> {
        let chars: Vec<char> = text.chars().collect();
        let mut found = Vec::new();
        for start in 0..chars.len() {
            let mut node = self.root();
            for &c in &chars[start..] {
                match node.child(c) {
                    Some(child) => node = child,
                    None => break,
                }
                if let Some(value) = node.value() {
                    found.push(value);
                }
            }
        }
        found
    }

    /// Valued nodes at or below `prefix`.
    fn subsumed_nodes(&self, prefix: &str) -> Nodes<'_, Self::Node> {
        Nodes::new(self.find_node(prefix))
    }

    /// Values stored at or below `prefix`.
    fn subsumed_values(&self, prefix: &str) -> impl Iterator<Item = &Self::Value> {
        self.subsumed_nodes(prefix).filter_map(|node| node.value())
    }

    /// Every stored value.
    fn values(&self) -> impl Iterator<Item = &Self::Value> {
        self.subsumed_values("")
    }

    /// Every `(key, value)` pair.
    fn iter(&self) -> Iter<'_, Self::Node> {
        Iter::new("", Some(self.root()))
    }

    /// Copy into a fresh builder, converting each value with `f`.
    fn map_values<U, F>(&self, mut f: F) -> TrieBuilder<U>
    where
        F: FnMut(&Self::Value) -> U,
    {
        self.iter().map(|(key, value)| (key, f(value))).collect()
    }
}

// --- Build phase -------------------------------------------------------------

/// Insert-only trie. Every node is dense until [`optimize`](Self::optimize).
#[derive(Debug, Clone)]
pub struct TrieBuilder<V> {
    root: DenseNode<V>,
    nodes: usize,
    len: usize,
}

impl<V> Default for TrieBuilder<V> {
    fn default() -> Self {
        TrieBuilder { root: DenseNode::default(), nodes: 0, len: 0 }
    }
}

impl<V> TrieBuilder<V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `value` under `key`, returning the value it replaced.
    pub fn insert(&mut self, key: &str, value: V) -> Option<V> {
        let mut node = &mut self.root;
        for c in key.chars() {
            node = node.child_or_insert(c, &mut self.nodes);
        }
        let previous = node.set_value(value);
        if previous.is_none() {
            self.len += 1;
        }
        previous
    }

    pub fn stats(&self) -> TrieStats {
        TrieStats { nodes: self.nodes, sparse_nodes: 0 }
    }

    /// Finish building, keeping every node dense.
    pub fn freeze(self) -> Trie<V> {
        self.finish(false)
    }

    /// Finish building, rewriting low-occupancy dense nodes as sparse ones.
    pub fn optimize(self) -> Trie<V> {
        self.finish(true)
    }

    fn finish(self, sparse: bool) -> Trie<V> {
        let mut sparse_nodes = 0;
        let root = self.root.freeze(sparse, &mut sparse_nodes);
        tracing::debug!(keys = self.len, nodes = self.nodes, sparse_nodes, "trie frozen");
        Trie { root, stats: TrieStats { nodes: self.nodes, sparse_nodes }, len: self.len }
    }
}

impl<V> PrefixTree for TrieBuilder<V> {
    type Value = V;
    type Node = DenseNode<V>;

    fn root(&self) -> &DenseNode<V> {
        &self.root
    }

    fn len(&self) -> usize {
        self.len
    }
}

impl<K: AsRef<str>, V> Extend<(K, V)> for TrieBuilder<V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key.as_ref(), value);
        }
    }
}

impl<K: AsRef<str>, V> FromIterator<(K, V)> for TrieBuilder<V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut builder = TrieBuilder::new();
        builder.extend(iter);
        builder
    }
}

// --- Frozen phase ------------------------------------------------------------

/// Read-only trie produced by [`TrieBuilder::freeze`] or [`TrieBuilder::optimize`].
#[derive(Debug, Clone)]
pub struct Trie<V> {
    root: Node<V>,
    stats: TrieStats,
    len: usize,
}

impl<V> Default for Trie<V> {
    fn default() -> Self {
        TrieBuilder::new().freeze()
    }
}

impl<V> Trie<V> {
    pub fn stats(&self) -> TrieStats {
        self.stats
    }
}

impl<V> PrefixTree for Trie<V> {
    type Value = V;
    type Node = Node<V>;

    fn root(&self) -> &Node<V> {
        &self.root
    }

    fn len(&self) -> usize {
        self.len
    }
}
