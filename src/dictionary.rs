//! The three read-only dictionaries consulted by the stemmer.
//!
//! All of them are frozen [`Trie`]s, so a single `Dictionaries` value can be
//! shared by reference between any number of stemmers (and threads).

use crate::rule::Verb;
use crate::trie::{PrefixTree, Trie, TrieBuilder};

#[derive(Debug, Clone, Default)]
pub struct Dictionaries {
    lexicon: Trie<()>,
    plurals: Trie<String>,
    verbs: Trie<Verb>,
}

impl Dictionaries {
    /// Wrap already-built tries.
    pub fn new(lexicon: Trie<()>, plurals: Trie<String>, verbs: Trie<Verb>) -> Self {
        Dictionaries { lexicon, plurals, verbs }
    }

    /// Build and optimize the tries from plain entries.
    ///
    /// - `words`: lexicon entries.
    /// - `plurals`: `(broken plural, singular)` pairs.
    /// - `verbs`: `(inflected form, verb)` pairs.
    pub fn from_entries<W, P, V, S, K1, K2>(words: W, plurals: P, verbs: V) -> Self
    where
        W: IntoIterator<Item = S>,
        S: AsRef<str>,
        P: IntoIterator<Item = (K1, String)>,
        K1: AsRef<str>,
        V: IntoIterator<Item = (K2, Verb)>,
        K2: AsRef<str>,
    {
        let lexicon: TrieBuilder<()> = words.into_iter().map(|w| (w, ())).collect();
        let plurals: TrieBuilder<String> = plurals.into_iter().collect();
        let verbs: TrieBuilder<Verb> = verbs.into_iter().collect();
        Dictionaries::new(lexicon.optimize(), plurals.optimize(), verbs.optimize())
    }

    pub fn lexicon(&self) -> &Trie<()> {
        &self.lexicon
    }

    pub fn plurals(&self) -> &Trie<String> {
        &self.plurals
    }

    pub fn verbs(&self) -> &Trie<Verb> {
        &self.verbs
    }

    /// Exact lexicon membership.
    pub fn is_word(&self, word: &str) -> bool {
        self.lexicon.contains_key(word)
    }

    /// Singular form of a broken plural. Empty singulars count as missing.
    pub fn singular_of(&self, plural: &str) -> Option<&str> {
        self.plurals.get(plural).map(String::as_str).filter(|s| !s.is_empty())
    }

    pub fn verb(&self, form: &str) -> Option<&Verb> {
        self.verbs.get(form)
    }
}
