//! A rule-driven stemmer for Persian.
//!
//! The stemmer reduces an inflected word (کتاب‌هایشان, پدران, زیباست) to its
//! stem (کتاب, پدر, زیبا) using three dictionaries and an ordered rule table:
//!
//! - a lexicon of known words,
//! - a broken-plural map (کتب -> کتاب),
//! - an irregular-verb map (رفتم -> رفت / رو),
//! - rules: regex pattern, substitution alternatives, tag, minimum length,
//!   terminal flag.
//!
//! All dictionaries are [`trie::Trie`]s whose nodes switch from a dense array
//! to a sparse map when that saves space.
//!
//! ```no_run
//! use parsstem::Resources;
//!
//! let resources = Resources::load("Resources")?;
//! let mut stemmer = resources.stemmer();
//! assert_eq!(stemmer.run("پدران"), "پدر");
//! # Ok::<(), parsstem::Error>(())
//! ```

#[macro_use]
mod macros;
mod api;
mod dictionary;
mod engine;
mod error;
mod normalize;
mod resources;
mod rule;
pub mod trie;

pub use api::{Options, Stage, StemTrace};
pub use dictionary::Dictionaries;
pub use engine::{LruCache, NoCache, Repair, RunMetrics, StemCache, Stemmer, TrieCache};
pub use error::{Error, Result};
pub use normalize::{ScriptMask, normalize};
pub use resources::{
    DICTIONARY_FILE, PATTERNS_FILE, PLURALS_FILE, Resources, VERBS_FILE, read_lexicon, read_plurals, read_rules,
    read_verbs,
};
pub use rule::{Rule, Tag, Verb};
