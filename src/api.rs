use crate::engine::RunMetrics;
use std::fmt;
use std::time::Duration;

/// Options that affect stem selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    /// How candidates are ordered before the first one is returned.
    ///
    /// - `> 0`: sort ascending, keep the last `pattern_count`.
    /// - `< 0`: reverse discovery order, keep the last `|pattern_count|`.
    /// - `0`: keep discovery order untouched.
    pub pattern_count: i32,
    /// Consult the irregular-verb map after rule matching.
    pub enable_verbs: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self { pattern_count: 1, enable_verbs: true }
    }
}

/// The pipeline step that decided a word's stem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    /// Empty or whitespace-only input.
    Empty,
    /// Not Persian, or too short to stem; returned as normalized.
    Passthrough,
    /// Answered from the result cache.
    Cache,
    /// The word itself is (a repair of) a lexicon entry.
    Lexicon,
    /// The word is a known broken plural.
    BrokenPlural,
    /// Picked from rule candidates.
    Rules,
    /// Irregular verb map.
    Verb,
    /// Noun disambiguation after a terminal rule.
    Disambiguated,
    /// No candidates, but the word validates once spaces are removed.
    Fallback,
    /// Nothing matched; the word is its own stem.
    Unresolved,
}

impl Stage {
    pub fn as_str(self) -> &'static str {
        match self {
            Stage::Empty => "empty",
            Stage::Passthrough => "passthrough",
            Stage::Cache => "cache",
            Stage::Lexicon => "lexicon",
            Stage::BrokenPlural => "broken-plural",
            Stage::Rules => "rules",
            Stage::Verb => "verb",
            Stage::Disambiguated => "disambiguated",
            Stage::Fallback => "fallback",
            Stage::Unresolved => "unresolved",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of [`Stemmer::run_with_trace`](crate::Stemmer::run_with_trace).
#[derive(Debug, Clone)]
pub struct StemTrace {
    /// The word as given.
    pub input: String,
    /// The word after normalization; the cache key.
    pub normalized: String,
    pub stem: String,
    pub stage: Stage,
    /// Candidates in discovery order (after a verb override, just the verb
    /// stem). Empty unless rule matching ran.
    pub candidates: Vec<String>,
    /// Whether a terminal rule fired.
    pub terminated: bool,
    /// Total elapsed time (same as `metrics.total`).
    pub elapsed: Duration,
    pub metrics: RunMetrics,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options() {
        let options = Options::default();
        assert_eq!(options.pattern_count, 1);
        assert!(options.enable_verbs);
    }

    #[test]
    fn stage_names() {
        assert_eq!(Stage::BrokenPlural.to_string(), "broken-plural");
        assert_eq!(Stage::Unresolved.as_str(), "unresolved");
    }
}
