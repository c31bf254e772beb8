//! Depth-first enumeration over trie nodes.
//!
//! Both iterators walk pre-order with an explicit stack, visiting children in
//! ascending char order, and only yield nodes that carry a value.

use super::node::TrieNode;

/// Valued nodes below (and including) a starting node.
pub struct Nodes<'a, N> {
    stack: Vec<&'a N>,
}

impl<'a, N: TrieNode> Nodes<'a, N> {
    pub(crate) fn new(start: Option<&'a N>) -> Self {
        Nodes { stack: start.into_iter().collect() }
    }
}

impl<'a, N: TrieNode> Iterator for Nodes<'a, N> {
    type Item = &'a N;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.stack.pop() {
            // Reverse so the smallest char is popped first.
            self.stack.extend(node.children().into_iter().rev().map(|(_, child)| child));
            if node.value().is_some() {
                return Some(node);
            }
        }
        None
    }
}

/// `(key, value)` pairs below (and including) a starting node.
pub struct Iter<'a, N> {
    stack: Vec<(String, &'a N)>,
}

impl<'a, N: TrieNode> Iter<'a, N> {
    pub(crate) fn new(prefix: &str, start: Option<&'a N>) -> Self {
        Iter { stack: start.into_iter().map(|node| (prefix.to_string(), node)).collect() }
    }
}

impl<'a, N: TrieNode> Iterator for Iter<'a, N> {
    type Item = (String, &'a N::Value);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((key, node)) = self.stack.pop() {
            for (c, child) in node.children().into_iter().rev() {
                let mut child_key = String::with_capacity(key.len() + c.len_utf8());
                child_key.push_str(&key);
                child_key.push(c);
                self.stack.push((child_key, child));
            }
            if let Some(value) = node.value() {
                return Some((key, value));
            }
        }
        None
    }
}
