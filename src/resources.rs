//! Loading the stemmer's data files.
//!
//! A resource directory holds four UTF-8 text files:
//!
//! ```text
//! Patterns.fa     pattern,substitutions,tag,min_length,terminal   (one rule per line, in order)
//! Dictionary.fa   word                                            (one per line)
//! Mokassar.fa     plural<TAB>singular
//! VerbList.fa     form<TAB>past<TAB>present
//! ```
//!
//! Lines are trimmed and blank lines skipped. A malformed rule or plural row is
//! an error; a malformed verb row is logged and skipped.

use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind, Read};
use std::path::Path;

use tracing::{debug, info, warn};

use crate::api::Options;
use crate::dictionary::Dictionaries;
use crate::engine::{StemCache, Stemmer};
use crate::error::{Error, Result};
use crate::rule::{Rule, Verb};
use crate::trie::{PrefixTree, TrieBuilder};

pub const PATTERNS_FILE: &str = "Patterns.fa";
pub const DICTIONARY_FILE: &str = "Dictionary.fa";
pub const PLURALS_FILE: &str = "Mokassar.fa";
pub const VERBS_FILE: &str = "VerbList.fa";

/// Everything a [`Stemmer`] borrows.
#[derive(Debug, Clone, Default)]
pub struct Resources {
    pub dictionaries: Dictionaries,
    pub rules: Vec<Rule>,
}

impl Resources {
    /// Load and optimize all four files from `dir`.
    pub fn load(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        let rules = read_rules(open(dir, PATTERNS_FILE)?)?;
        let lexicon = read_lexicon(open(dir, DICTIONARY_FILE)?)?;
        let plurals = read_plurals(open(dir, PLURALS_FILE)?)?;
        let verbs = read_verbs(open(dir, VERBS_FILE)?)?;

        info!(
            dir = %dir.display(),
            rules = rules.len(),
            words = lexicon.len(),
            plurals = plurals.len(),
            verbs = verbs.len(),
            "resources loaded"
        );

        let dictionaries = Dictionaries::new(lexicon.optimize(), plurals.optimize(), verbs.optimize());
        Ok(Resources { dictionaries, rules })
    }

    /// A stemmer with default options and an unbounded cache.
    pub fn stemmer(&self) -> Stemmer<'_> {
        Stemmer::new(&self.dictionaries, &self.rules)
    }

    pub fn stemmer_with<C: StemCache>(&self, cache: C, options: Options) -> Stemmer<'_, C> {
        Stemmer::with_cache(&self.dictionaries, &self.rules, cache, options)
    }
}

fn open(dir: &Path, file: &str) -> Result<File> {
    let path = dir.join(file);
    debug!(path = %path.display(), "opening resource");
    File::open(&path).map_err(|err| match err.kind() {
        ErrorKind::NotFound => Error::Resource { file: path.display().to_string(), line: 0, reason: "not found".into() },
        _ => Error::Io(err),
    })
}

/// Trimmed, non-blank lines with their 1-based line numbers.
fn rows<R: Read>(rdr: R) -> Result<Vec<(usize, String)>> {
    let reader = BufReader::new(rdr);
    let mut rows = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim_start_matches('\u{FEFF}').trim();
        if !line.is_empty() {
            rows.push((idx + 1, line.to_string()));
        }
    }
    Ok(rows)
}

/// Parse a rule table; rule order is preserved. Malformed rows are reported
/// against [`PATTERNS_FILE`]; a bad pattern stays [`Error::Pattern`].
pub fn read_rules<R: Read>(rdr: R) -> Result<Vec<Rule>> {
    rows(rdr)?
        .iter()
        .map(|(line, row)| {
            Rule::from_row(*line, row).map_err(|err| match err {
                Error::RuleRow { line, reason } => Error::Resource { file: PATTERNS_FILE.to_string(), line, reason },
                other => other,
            })
        })
        .collect()
}

pub fn read_lexicon<R: Read>(rdr: R) -> Result<TrieBuilder<()>> {
    Ok(rows(rdr)?.into_iter().map(|(_, word)| (word, ())).collect())
}

pub fn read_plurals<R: Read>(rdr: R) -> Result<TrieBuilder<String>> {
    let mut plurals = TrieBuilder::new();
    for (line, row) in rows(rdr)? {
        let Some((plural, singular)) = row.split_once('\t') else {
            return Err(Error::Resource {
                file: PLURALS_FILE.to_string(),
                line,
                reason: "expected `plural<TAB>singular`".into(),
            });
        };
        plurals.insert(plural.trim(), singular.trim().to_string());
    }
    Ok(plurals)
}

pub fn read_verbs<R: Read>(rdr: R) -> Result<TrieBuilder<Verb>> {
    let mut verbs = TrieBuilder::new();
    for (line, row) in rows(rdr)? {
        let mut fields = row.split('\t').map(str::trim);
        match (fields.next(), fields.next(), fields.next()) {
            (Some(form), Some(past), Some(present)) => {
                verbs.insert(form, Verb::new(past, present));
            }
            _ => warn!(file = VERBS_FILE, line, "skipping malformed verb row"),
        }
    }
    Ok(verbs)
}
