//! The stemming pipeline.
//!
//! `Stemmer` ties the pieces of the engine together. It borrows the shared,
//! read-only dictionaries and rule table and owns its result cache, so many
//! stemmers (one per thread, say) can run against a single loaded resource set.
//!
//! ```text
//! input
//!   │ normalize
//!   ├─ empty ─────────────────────────────────────────────> ""
//!   ├─ not Persian / ≤ 2 chars ───────────────────────────> word
//!   ├─ cache hit ─────────────────────────────────────────> cached
//!   ├─ lexicon (no space repair) ─────────────────────────> word
//!   ├─ broken plural (word, single mask, compound mask) ──> singular
//!   │
//!   │ rule candidates (candidates.rs)
//!   │ verb override (verb.rs)
//!   ├─ no candidates, lexicon with space repair ──────────> word
//!   ├─ no candidates ─────────────────────────────────────> candidates = [word]
//!   │
//!   ├─ terminal rule and > 1 candidate ───────────────────> disambiguate_nouns
//!   └─ otherwise ─────────────────────────────────────────> select(pattern_count)
//! ```
//!
//! Everything from the lexicon step on is memoized under the normalized word.

use std::time::Instant;

use tracing::debug;

use super::cache::{StemCache, TrieCache};
use super::candidates::generate;
use super::metrics::RunMetrics;
use super::plural::broken_plural_stem;
use super::select::{disambiguate_nouns, select};
use super::validate::Validator;
use super::verb::verb_override;
use crate::api::{Options, Stage, StemTrace};
use crate::dictionary::Dictionaries;
use crate::normalize::{ScriptMask, normalize};
use crate::rule::Rule;

/// Words this short (in chars) are never stemmed.
const MIN_STEMMABLE_CHARS: usize = 3;

/// Outcome of the pipeline before it is wrapped into a trace.
struct Decision {
    stem: String,
    stage: Stage,
    candidates: Vec<String>,
    terminated: bool,
}

impl Decision {
    fn direct(stem: String, stage: Stage) -> Self {
        Decision { stem, stage, candidates: Vec::new(), terminated: false }
    }
}

#[derive(Debug)]
pub struct Stemmer<'r, C = TrieCache> {
    dictionaries: &'r Dictionaries,
    rules: &'r [Rule],
    cache: C,
    options: Options,
}

impl<'r> Stemmer<'r> {
    /// A stemmer with default options and an unbounded cache.
    pub fn new(dictionaries: &'r Dictionaries, rules: &'r [Rule]) -> Self {
        Stemmer::with_cache(dictionaries, rules, TrieCache::new(), Options::default())
    }
}

impl<'r, C: StemCache> Stemmer<'r, C> {
    pub fn with_cache(dictionaries: &'r Dictionaries, rules: &'r [Rule], cache: C, options: Options) -> Self {
        Stemmer { dictionaries, rules, cache, options }
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn cache(&self) -> &C {
        &self.cache
    }

    /// Stem a single word. Returns `""` only for empty or whitespace input.
    pub fn run(&mut self, word: &str) -> String {
        self.run_with_trace(word).stem
    }

    /// Stem a single word and report how the stem was reached.
    pub fn run_with_trace(&mut self, word: &str) -> StemTrace {
        let start = Instant::now();
        let mut metrics = RunMetrics::default();
        let normalized = normalize(word);
        let decision = self.decide(&normalized, &mut metrics);

        debug!(word = %normalized, stem = %decision.stem, stage = %decision.stage, "stemmed");

        metrics.total = start.elapsed();
        StemTrace {
            input: word.to_string(),
            normalized,
            stem: decision.stem,
            stage: decision.stage,
            candidates: decision.candidates,
            terminated: decision.terminated,
            elapsed: metrics.total,
            metrics,
        }
    }

    fn decide(&mut self, word: &str, metrics: &mut RunMetrics) -> Decision {
        if word.is_empty() {
            return Decision::direct(String::new(), Stage::Empty);
        }
        if ScriptMask::scan(word).is_passthrough() || word.chars().count() < MIN_STEMMABLE_CHARS {
            return Decision::direct(word.to_string(), Stage::Passthrough);
        }
        if let Some(stem) = self.cache.get(word) {
            return Decision::direct(stem, Stage::Cache);
        }

        let decision = self.resolve(word, metrics);
        self.cache.insert(word, &decision.stem);
        decision
    }

    fn resolve(&self, word: &str, metrics: &mut RunMetrics) -> Decision {
        let validator = Validator::new(self.dictionaries);

        if let Some(repair) = validator.validate(word, false) {
            debug!(word, ?repair, "lexicon word");
            return Decision::direct(word.to_string(), Stage::Lexicon);
        }
        if let Some(singular) = broken_plural_stem(self.dictionaries, word) {
            return Decision::direct(singular, Stage::BrokenPlural);
        }

        let found = generate(self.rules, self.dictionaries, word, metrics);
        let mut candidates = found.stems;
        let mut stage = Stage::Rules;

        if self.options.enable_verbs {
            if let Some(verb) = verb_override(self.dictionaries, word) {
                debug!(word, %verb, replaced = candidates.len(), "verb override");
                candidates = vec![verb];
                stage = Stage::Verb;
            }
        }

        if candidates.is_empty() {
            if validator.is_valid(word, true) {
                return Decision::direct(word.to_string(), Stage::Fallback);
            }
            candidates.push(word.to_string());
            stage = Stage::Unresolved;
        }

        let (picked, stage) = if found.terminated && candidates.len() > 1 {
            (disambiguate_nouns(candidates.clone()), Stage::Disambiguated)
        } else {
            (select(candidates.clone(), self.options.pattern_count), stage)
        };

        Decision {
            stem: picked.unwrap_or_else(|| word.to_string()),
            stage,
            candidates,
            terminated: found.terminated,
        }
    }
}
