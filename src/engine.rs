//! Stemming engine.
//!
//! This module is the entry point for turning an inflected Persian word into
//! its stem. The work is split into focused submodules under `src/engine/`;
//! [`Stemmer`] is the only type most callers need.
//!
//! ## How the parts work together
//!
//! ```text
//! word ── normalize (normalize.rs) ──┐
//!                                    v
//!                      Stemmer::run (stemmer.rs)
//!                        - cache (cache.rs)
//!                        - lexicon shortcut (validate.rs)
//!                        - broken plurals (plural.rs)
//!                                    │
//!                                    v
//!                      generate (candidates.rs)
//!                        - scan rules in table order
//!                        - K: plural / validation
//!                        - V: affix templates (verb.rs)
//!                        - default: validation, terminal rules stop
//!                                    │
//!                                    v
//!                      verb override (verb.rs)
//!                                    │
//!                                    v
//!                      disambiguate_nouns / select (select.rs)
//!                                    │
//!                                    v
//!                                  stem
//! ```
//!
//! ## Responsibilities by module
//!
//! - `validate.rs`: decides whether a string is a lexicon word, allowing a
//!   fixed list of orthographic repairs (hamza forms, spacing, derivational
//!   affixes).
//! - `plural.rs`: broken-plural lookups, including the suffix masks.
//! - `verb.rs`: verb affix templates and the irregular-verb override.
//! - `candidates.rs`: applies the rule table to produce candidate stems.
//! - `select.rs`: reduces candidates to a single stem.
//! - `cache.rs`: the `StemCache` policies.
//! - `metrics.rs`: counters returned by `Stemmer::run_with_trace`.
//!
//! ## Debugging
//!
//! Every decision is logged with `tracing` at `debug` level and every accepted
//! rule candidate at `trace` level, e.g. `RUST_LOG=parsstem=trace`.

#[path = "engine/cache.rs"]
mod cache;
#[path = "engine/candidates.rs"]
mod candidates;
#[path = "engine/metrics.rs"]
mod metrics;
#[path = "engine/plural.rs"]
mod plural;
#[path = "engine/select.rs"]
mod select;
#[path = "engine/stemmer.rs"]
mod stemmer;
#[path = "engine/validate.rs"]
mod validate;
#[path = "engine/verb.rs"]
mod verb;

pub use cache::{LruCache, NoCache, StemCache, TrieCache};
pub use metrics::RunMetrics;
pub use stemmer::Stemmer;
pub use validate::Repair;

#[cfg(test)]
#[path = "engine/tests.rs"]
mod tests;
