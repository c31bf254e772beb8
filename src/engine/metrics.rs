//! Per-run counters.
//!
//! `Stemmer::run` does not surface these; `Stemmer::run_with_trace` returns
//! them inside a [`StemTrace`](crate::StemTrace) for profiling and for finding
//! out why a rule table behaves the way it does.

use std::time::Duration;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunMetrics {
    /// Total elapsed time for the run.
    pub total: Duration,
    /// Rules whose pattern was tested against the word.
    pub rules_considered: usize,
    /// Rules whose pattern matched.
    pub rules_matched: usize,
    /// Substitution alternatives produced (accepted or not).
    pub alternatives_tried: usize,
}
