//! Node representations for the adaptive trie.
//!
//! A trie lives in one of two phases and each phase has its own node type:
//!
//! - **Build phase** (`DenseNode`): every node keeps its children in a slot
//!   array anchored at a base character. Lookup is a subtraction plus an index;
//!   inserting outside the current range grows the array in either direction.
//! - **Frozen phase** (`Node`): a tagged variant. Dense nodes whose array is
//!   mostly empty are rewritten as `Node::Sparse` (a hash map from char to
//!   child); everything else stays `Node::Dense`.
//!
//! ```text
//! base = 'ب'        slots: [ب] [ة] [ت] [ث] ... [ی]
//!                           │   ·   │   ·       │
//!                         child   child       child
//!
//! populated × SPARSE_RATIO < slots.len()  ──▶  Node::Sparse { children }
//! ```
//!
//! Both node types implement [`TrieNode`], which is the only contract the
//! lookup and enumeration code relies on.
//!
//! ## Invariants
//!
//! - A slot is only allocated when a child is inserted for it, so a dense node
//!   with a non-empty slot array always has at least one child.
//! - A node without children carries a value (the empty root excepted).
//! - Sparse nodes are never mutated and never turn back into dense nodes.
//!
//! A key of `n` chars is a chain of `n` nested nodes, so nothing here walks a
//! subtree by recursion: freezing, cloning and dropping all keep an explicit
//! stack. `Debug` output stops at the child count.

use std::collections::HashMap;
use std::fmt;
use std::mem;

/// A dense node converts to sparse when `populated * SPARSE_RATIO < slots`.
pub(crate) const SPARSE_RATIO: usize = 9;

/// Read-only view over a trie node, shared by the build and frozen phases.
pub trait TrieNode: Sized {
    type Value;

    /// Value stored at this node, if a key terminates here.
    fn value(&self) -> Option<&Self::Value>;

    /// Child reached by `c`, if any.
    fn child(&self, c: char) -> Option<&Self>;

    /// Number of populated children.
    fn child_count(&self) -> usize;

    /// `(char, child)` pairs in ascending char order.
    fn children(&self) -> Vec<(char, &Self)>;

    /// True when the node has no children at all (a structural leaf).
    fn is_leaf(&self) -> bool {
        self.child_count() == 0
    }
}

/// Offset of `c` in a slot array of `len` entries anchored at `base`.
fn slot_of(base: char, len: usize, c: char) -> Option<usize> {
    let offset = (c as u32).checked_sub(base as u32)? as usize;
    (offset < len).then_some(offset)
}

/// Char stored at `offset` in a slot array anchored at `base`.
///
/// Offsets landing on surrogate code points are never populated, so `None`
/// only shows up for empty slots.
fn char_at(base: char, offset: usize) -> Option<char> {
    char::from_u32(base as u32 + offset as u32)
}

fn dense_pairs<N>(base: char, slots: &[Option<N>]) -> Vec<(char, &N)> {
    slots
        .iter()
        .enumerate()
        .filter_map(|(offset, slot)| Some((char_at(base, offset)?, slot.as_ref()?)))
        .collect()
}

/// Children placed back into a slot array of `len` entries anchored at `base`.
fn dense_slots<N>(base: char, len: usize, children: Vec<(char, N)>) -> Vec<Option<N>> {
    let mut slots: Vec<Option<N>> = std::iter::repeat_with(|| None).take(len).collect();
    for (c, child) in children {
        if let Some(offset) = slot_of(base, len, c) {
            slots[offset] = Some(child);
        }
    }
    slots
}

/// Copy the subtree under `root` bottom-up. `rebuild` receives a source node
/// together with its already copied children, in ascending char order.
fn copy_subtree<N, F>(root: &N, rebuild: F) -> N
where
    N: TrieNode,
    F: Fn(&N, Vec<(char, N)>) -> N,
{
    let mut frame = Copying::open(root);
    let mut parents: Vec<(char, Copying<'_, N>)> = Vec::new();
    loop {
        match frame.pending.next() {
            Some((c, child)) => {
                parents.push((c, frame));
                frame = Copying::open(child);
            }
            None => {
                let copy = rebuild(frame.src, frame.done);
                match parents.pop() {
                    Some((c, mut parent)) => {
                        parent.done.push((c, copy));
                        frame = parent;
                    }
                    None => return copy,
                }
            }
        }
    }
}

struct Copying<'a, N> {
    src: &'a N,
    pending: std::vec::IntoIter<(char, &'a N)>,
    done: Vec<(char, N)>,
}

impl<'a, N: TrieNode> Copying<'a, N> {
    fn open(src: &'a N) -> Self {
        Copying { src, pending: src.children().into_iter(), done: Vec::new() }
    }
}

// --- Build phase -------------------------------------------------------------

/// Mutable dense node used while a trie is being populated.
pub struct DenseNode<V> {
    value: Option<V>,
    base: char,
    slots: Vec<Option<DenseNode<V>>>,
}

impl<V> Default for DenseNode<V> {
    fn default() -> Self {
        DenseNode { value: None, base: '\0', slots: Vec::new() }
    }
}

impl<V> DenseNode<V> {
    /// Return the child for `c`, creating it when missing.
    ///
    /// ```text
    /// empty:        slots = []           + 'د' -> base='د', slots=[د]
    /// above range:  base='د' slots=[د]   + 'ر' -> slots=[د, ذ, ر]
    /// below range:  base='د' slots=[د]   + 'ب' -> base='ب', slots=[ب, ة, ت, ث, ج, ...]
    /// ```
    ///
    /// `node_count` is bumped whenever a new node is allocated.
    pub(crate) fn child_or_insert(&mut self, c: char, node_count: &mut usize) -> &mut DenseNode<V> {
        if self.slots.is_empty() {
            self.base = c;
            self.slots.push(None);
        } else if c < self.base {
            let gap = (self.base as u32 - c as u32) as usize;
            let mut shifted = Vec::with_capacity(gap + self.slots.len());
            shifted.resize_with(gap, || None);
            shifted.append(&mut self.slots);
            self.slots = shifted;
            self.base = c;
        } else {
            let offset = (c as u32 - self.base as u32) as usize;
            if offset >= self.slots.len() {
                self.slots.resize_with(offset + 1, || None);
            }
        }

        let offset = (c as u32 - self.base as u32) as usize;
        self.slots[offset].get_or_insert_with(|| {
            *node_count += 1;
            DenseNode::default()
        })
    }

    /// Store `value`, returning whatever was there before.
    pub(crate) fn set_value(&mut self, value: V) -> Option<V> {
        self.value.replace(value)
    }

    /// Number of allocated slots, populated or not.
    pub fn allocated_slots(&self) -> usize {
        self.slots.len()
    }

    /// Whether the occupancy ratio makes a sparse representation worthwhile.
    pub fn should_convert(&self) -> bool {
        !self.slots.is_empty() && self.child_count() * SPARSE_RATIO < self.slots.len()
    }

    /// Freeze this subtree. With `sparse` set, every node that
    /// [`should_convert`](Self::should_convert) becomes a `Node::Sparse`;
    /// `sparse_nodes` counts those conversions.
    pub(crate) fn freeze(self, sparse: bool, sparse_nodes: &mut usize) -> Node<V> {
        let mut frame = Freezing::open(self, sparse);
        let mut parents: Vec<Freezing<V>> = Vec::new();
        loop {
            match frame.pending.next() {
                Some(Some(child)) => {
                    parents.push(frame);
                    frame = Freezing::open(child, sparse);
                }
                Some(None) => frame.done.push(None),
                None => {
                    let node = frame.close(sparse_nodes);
                    match parents.pop() {
                        Some(mut parent) => {
                            parent.done.push(Some(node));
                            frame = parent;
                        }
                        None => return node,
                    }
                }
            }
        }
    }
}

/// A dense node being frozen: its slots are consumed left to right and the
/// frozen children collected in `done`, one entry per slot.
struct Freezing<V> {
    value: Option<V>,
    base: char,
    convert: bool,
    pending: std::vec::IntoIter<Option<DenseNode<V>>>,
    done: Vec<Option<Node<V>>>,
}

impl<V> Freezing<V> {
    fn open(mut node: DenseNode<V>, sparse: bool) -> Self {
        let convert = sparse && node.should_convert();
        let slots = mem::take(&mut node.slots);
        Freezing {
            value: node.value.take(),
            base: node.base,
            convert,
            done: Vec::with_capacity(slots.len()),
            pending: slots.into_iter(),
        }
    }

    fn close(self, sparse_nodes: &mut usize) -> Node<V> {
        let Freezing { value, base, convert, done, .. } = self;
        if convert {
            *sparse_nodes += 1;
            let children = done
                .into_iter()
                .enumerate()
                .filter_map(|(offset, slot)| Some((char_at(base, offset)?, slot?)))
                .collect();
            return Node::Sparse { value, children };
        }
        Node::Dense { value, base, slots: done.into_boxed_slice() }
    }
}

impl<V> Drop for DenseNode<V> {
    fn drop(&mut self) {
        let mut stack: Vec<DenseNode<V>> = self.slots.drain(..).flatten().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.slots.drain(..).flatten());
        }
    }
}

impl<V: Clone> Clone for DenseNode<V> {
    fn clone(&self) -> Self {
        copy_subtree(self, |src, children| DenseNode {
            value: src.value.clone(),
            base: src.base,
            slots: dense_slots(src.base, src.slots.len(), children),
        })
    }
}

impl<V: fmt::Debug> fmt::Debug for DenseNode<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DenseNode")
            .field("value", &self.value)
            .field("base", &self.base)
            .field("children", &self.child_count())
            .finish()
    }
}

impl<V> TrieNode for DenseNode<V> {
    type Value = V;

    fn value(&self) -> Option<&V> {
        self.value.as_ref()
    }

    fn child(&self, c: char) -> Option<&Self> {
        self.slots[slot_of(self.base, self.slots.len(), c)?].as_ref()
    }

    fn child_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    fn children(&self) -> Vec<(char, &Self)> {
        dense_pairs(self.base, &self.slots)
    }

    fn is_leaf(&self) -> bool {
        self.slots.is_empty()
    }
}

// --- Frozen phase ------------------------------------------------------------

/// Immutable node of a frozen [`Trie`](super::Trie).
pub enum Node<V> {
    /// Slot array anchored at `base`, O(1) child access.
    Dense { value: Option<V>, base: char, slots: Box<[Option<Node<V>>]> },
    /// Hash map of children for nodes whose slot array would be mostly empty.
    Sparse { value: Option<V>, children: HashMap<char, Node<V>> },
}

impl<V> Node<V> {
    pub fn is_sparse(&self) -> bool {
        matches!(self, Node::Sparse { .. })
    }

    fn detach_children(&mut self, out: &mut Vec<Node<V>>) {
        match self {
            Node::Dense { slots, .. } => out.extend(Vec::from(mem::take(slots)).into_iter().flatten()),
            Node::Sparse { children, .. } => out.extend(children.drain().map(|(_, child)| child)),
        }
    }
}

impl<V> Drop for Node<V> {
    fn drop(&mut self) {
        let mut stack = Vec::new();
        self.detach_children(&mut stack);
        while let Some(mut node) = stack.pop() {
            node.detach_children(&mut stack);
        }
    }
}

impl<V: Clone> Clone for Node<V> {
    fn clone(&self) -> Self {
        copy_subtree(self, |src, children| match src {
            Node::Dense { value, base, slots } => Node::Dense {
                value: value.clone(),
                base: *base,
                slots: dense_slots(*base, slots.len(), children).into_boxed_slice(),
            },
            Node::Sparse { value, .. } => Node::Sparse { value: value.clone(), children: children.into_iter().collect() },
        })
    }
}

impl<V: fmt::Debug> fmt::Debug for Node<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (kind, value) = match self {
            Node::Dense { value, .. } => ("Dense", value),
            Node::Sparse { value, .. } => ("Sparse", value),
        };
        f.debug_struct(kind).field("value", value).field("children", &self.child_count()).finish()
    }
}

impl<V> TrieNode for Node<V> {
    type Value = V;

    fn value(&self) -> Option<&V> {
        match self {
            Node::Dense { value, .. } | Node::Sparse { value, .. } => value.as_ref(),
        }
    }

    fn child(&self, c: char) -> Option<&Self> {
        match self {
            Node::Dense { base, slots, .. } => slots[slot_of(*base, slots.len(), c)?].as_ref(),
            Node::Sparse { children, .. } => children.get(&c),
        }
    }

    fn child_count(&self) -> usize {
        match self {
            Node::Dense { slots, .. } => slots.iter().filter(|slot| slot.is_some()).count(),
            Node::Sparse { children, .. } => children.len(),
        }
    }

    fn children(&self) -> Vec<(char, &Self)> {
        match self {
            Node::Dense { base, slots, .. } => dense_pairs(*base, slots),
            Node::Sparse { children, .. } => {
                let mut pairs: Vec<(char, &Self)> = children.iter().map(|(c, child)| (*c, child)).collect();
                pairs.sort_unstable_by_key(|(c, _)| *c);
                pairs
            }
        }
    }

    fn is_leaf(&self) -> bool {
        match self {
            Node::Dense { slots, .. } => slots.is_empty(),
            Node::Sparse { children, .. } => children.is_empty(),
        }
    }
}
