//! Rewrite rules and verb entries.
//!
//! A rule is pure data interpreted by the `regex` crate: when `pattern` matches
//! a word, each substitution alternative is applied in turn (as a
//! `Regex::replace_all` replacement) to propose a stem. Substitutions normally
//! refer to the named capture `stem`:
//!
//! ```text
//! pattern       ^(?<stem>.+?)(ها|های)$
//! substitutions ${stem};${stem}ه
//! tag           K
//! min_length    2
//! terminal      false
//! ```
//!
//! Patterns must be valid `regex` syntax. Look-around is not supported; a
//! look-behind such as `(?<=ا)ی$` is written as `(?<ctx>ا)ی$` with `${ctx}`
//! kept in the substitution.

use regex::Regex;

use crate::error::{Error, Result};

/// Part-of-speech tag carried by a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    /// Plain suffix stripping; the result must validate against the lexicon.
    Default,
    /// `K`: ezafe / construct state; may resolve through the broken-plural map.
    Ezafe,
    /// `V`: verb stem; validated by re-attaching verb affixes.
    Verb,
}

impl Tag {
    pub fn from_char(c: char) -> Self {
        match c {
            'K' => Tag::Ezafe,
            'V' => Tag::Verb,
            _ => Tag::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Rule {
    pattern: Regex,
    substitutions: Vec<String>,
    tag: Tag,
    min_length: usize,
    terminal: bool,
}

impl Rule {
    /// Build a rule. `substitutions` holds `;`-separated alternatives.
    pub fn new(pattern: &str, substitutions: &str, tag: char, min_length: usize, terminal: bool) -> Result<Self> {
        let compiled = Regex::new(pattern)
            .map_err(|source| Error::Pattern { pattern: pattern.to_string(), source: Box::new(source) })?;
        Ok(Rule {
            pattern: compiled,
            substitutions: substitutions.split(';').map(str::to_string).collect(),
            tag: Tag::from_char(tag),
            min_length,
            terminal,
        })
    }

    /// Parse a `pattern,substitutions,tag,min_length,terminal` row.
    ///
    /// `line` is only used for error reporting.
    pub fn from_row(line: usize, row: &str) -> Result<Self> {
        let malformed = |reason: String| Error::RuleRow { line, reason };

        let fields: Vec<&str> = row.split(',').collect();
        if fields.len() < 5 {
            return Err(malformed(format!("expected 5 comma-separated fields, found {}", fields.len())));
        }

        let tag = fields[2].chars().next().ok_or_else(|| malformed("empty tag".to_string()))?;
        let min_length = fields[3]
            .trim()
            .parse::<u8>()
            .map_err(|err| malformed(format!("invalid minimum length `{}`: {err}", fields[3])))?;
        let terminal = match fields[4].trim().to_ascii_lowercase().as_str() {
            "true" => true,
            "false" => false,
            other => return Err(malformed(format!("invalid terminal flag `{other}`"))),
        };

        Rule::new(fields[0], fields[1], tag, min_length as usize, terminal)
    }

    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    pub fn substitutions(&self) -> &[String] {
        &self.substitutions
    }

    pub fn tag(&self) -> Tag {
        self.tag
    }

    pub fn min_length(&self) -> usize {
        self.min_length
    }

    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    pub fn is_match(&self, word: &str) -> bool {
        self.pattern.is_match(word)
    }

    /// Apply one substitution alternative to every match in `word`, then trim.
    pub fn substitute(&self, word: &str, alternative: &str) -> String {
        self.pattern.replace_all(word, alternative).trim().to_string()
    }
}

/// Past and present stems of an irregular verb.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verb {
    past: String,
    present: String,
}

impl Verb {
    pub fn new(past: impl Into<String>, present: impl Into<String>) -> Self {
        Verb { past: past.into(), present: present.into() }
    }

    pub fn past(&self) -> &str {
        &self.past
    }

    pub fn present(&self) -> &str {
        &self.present
    }
}
