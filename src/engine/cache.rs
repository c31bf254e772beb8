//! Result memoization.
//!
//! Every stemmer owns one cache keyed by the *normalized* input word. The
//! policy is pluggable:
//!
//! - [`TrieCache`]: unbounded, backed by a [`TrieBuilder`]; the default.
//! - [`LruCache`]: holds at most `capacity` entries and evicts the least
//!   recently used one. Access recency is a monotonic tick, so eviction is
//!   deterministic.
//! - [`NoCache`]: stores nothing.
//!
//! A cache never changes what the stemmer returns; it only skips work.

use std::collections::{BTreeMap, HashMap};

use crate::trie::{PrefixTree, TrieBuilder};

pub trait StemCache {
    fn get(&mut self, word: &str) -> Option<String>;
    fn insert(&mut self, word: &str, stem: &str);
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<C: StemCache + ?Sized> StemCache for Box<C> {
    fn get(&mut self, word: &str) -> Option<String> {
        (**self).get(word)
    }

    fn insert(&mut self, word: &str, stem: &str) {
        (**self).insert(word, stem)
    }

    fn len(&self) -> usize {
        (**self).len()
    }
}

// --- Trie --------------------------------------------------------------------

#[derive(Debug, Default)]
pub struct TrieCache {
    entries: TrieBuilder<String>,
}

impl TrieCache {
    pub fn new() -> Self {
        TrieCache::default()
    }
}

impl StemCache for TrieCache {
    fn get(&mut self, word: &str) -> Option<String> {
        self.entries.get(word).cloned()
    }

    fn insert(&mut self, word: &str, stem: &str) {
        self.entries.insert(word, stem.to_string());
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}

// --- LRU ---------------------------------------------------------------------

#[derive(Debug)]
pub struct LruCache {
    capacity: usize,
    entries: HashMap<String, (String, u64)>,
    /// Last-access tick -> word, oldest first.
    recency: BTreeMap<u64, String>,
    tick: u64,
}

impl LruCache {
    pub fn new(capacity: usize) -> Self {
        LruCache { capacity, entries: HashMap::new(), recency: BTreeMap::new(), tick: 0 }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    fn next_tick(&mut self) -> u64 {
        self.tick += 1;
        self.tick
    }

    fn evict_oldest(&mut self) {
        if let Some((_, word)) = self.recency.pop_first() {
            self.entries.remove(&word);
        }
    }
}

impl StemCache for LruCache {
    fn get(&mut self, word: &str) -> Option<String> {
        let tick = self.next_tick();
        let (stem, last) = self.entries.get_mut(word)?;
        let previous = std::mem::replace(last, tick);
        let stem = stem.clone();
        self.recency.remove(&previous);
        self.recency.insert(tick, word.to_string());
        Some(stem)
    }

    fn insert(&mut self, word: &str, stem: &str) {
        if self.capacity == 0 {
            return;
        }
        let tick = self.next_tick();
        if let Some((_, previous)) = self.entries.insert(word.to_string(), (stem.to_string(), tick)) {
            self.recency.remove(&previous);
        } else if self.entries.len() > self.capacity {
            self.evict_oldest();
        }
        self.recency.insert(tick, word.to_string());
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}

// --- None --------------------------------------------------------------------

#[derive(Debug, Default, Clone, Copy)]
pub struct NoCache;

impl StemCache for NoCache {
    fn get(&mut self, _word: &str) -> Option<String> {
        None
    }

    fn insert(&mut self, _word: &str, _stem: &str) {}

    fn len(&self) -> usize {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trie_cache_remembers_everything() {
        let mut cache = TrieCache::new();
        assert!(cache.is_empty());
        cache.insert("کتابها", "کتاب");
        cache.insert("کتابم", "کتاب");
        assert_eq!(cache.get("کتابها").as_deref(), Some("کتاب"));
        assert_eq!(cache.get("کتاب"), None);
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn lru_evicts_least_recently_used() {
        let mut cache = LruCache::new(2);
        cache.insert("a", "1");
        cache.insert("b", "2");
        assert_eq!(cache.get("a").as_deref(), Some("1"));
        cache.insert("c", "3");

        assert_eq!(cache.len(), 2);
        assert_eq!(cache.get("b"), None);
        assert_eq!(cache.get("a").as_deref(), Some("1"));
        assert_eq!(cache.get("c").as_deref(), Some("3"));
    }

    #[test]
    fn lru_overwrite_refreshes_entry() {
        let mut cache = LruCache::new(2);
        cache.insert("a", "1");
        cache.insert("b", "2");
        cache.insert("a", "9");
        cache.insert("c", "3");

        assert_eq!(cache.len(), 2);
        assert_eq!(cache.get("a").as_deref(), Some("9"));
        assert_eq!(cache.get("b"), None);
    }

    #[test]
    fn zero_capacity_and_no_cache_store_nothing() {
        let mut lru = LruCache::new(0);
        lru.insert("a", "1");
        assert!(lru.is_empty());
        assert_eq!(lru.get("a"), None);

        let mut none = NoCache;
        none.insert("a", "1");
        assert_eq!(none.get("a"), None);
    }

    #[test]
    fn boxed_caches_are_caches() {
        let mut cache: Box<dyn StemCache> = Box::new(LruCache::new(1));
        cache.insert("a", "1");
        assert_eq!(cache.get("a").as_deref(), Some("1"));
        assert_eq!(cache.len(), 1);
    }
}
