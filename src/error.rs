//! Error types for parsstem.
//!
//! Lookups never fail: a missing key is `None`. Errors only come from building
//! rules and loading resources.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid rule pattern `{pattern}`: {source}{}", lookaround_hint(.pattern))]
    Pattern {
        pattern: String,
        #[source]
        source: Box<regex::Error>,
    },

    #[error("malformed rule row {line}: {reason}")]
    RuleRow { line: usize, reason: String },

    #[error("{file}:{line}: {reason}")]
    /// A resource file is missing or has a malformed row. `line` is 1-based;
    /// 0 refers to the file as a whole.
    Resource { file: String, line: usize, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

const LOOKAROUND: [&str; 4] = ["(?=", "(?!", "(?<=", "(?<!"];

fn lookaround_hint(pattern: &str) -> &'static str {
    if LOOKAROUND.iter().any(|group| pattern.contains(group)) {
        "\nhint: look-around is not supported; capture the context in a group and repeat it in the substitution"
    } else {
        ""
    }
}
