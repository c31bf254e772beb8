//! Picking one stem out of several candidates.
//!
//! Sorting is ordinal (by code point), not by Persian collation: letters
//! added for Persian (پ چ ژ گ ک ی) sort after every basic Arabic letter, so
//! `ت` < `پ` here.

/// Possessive pronoun suffixes (my, your, his/her).
pub(crate) const POSSESSIVE_SUFFIXES: &[&str] = &["م", "ت", "ش"];

/// Choose between candidates produced when a terminal rule fired.
///
/// After sorting, a last candidate ending in `ان` wins outright. Otherwise, if
/// the second candidate (spaces removed) is the first plus a possessive suffix,
/// the shorter first one wins. The last candidate is the fallback. Sorting is
/// ordinal.
pub(crate) fn disambiguate_nouns(mut stems: Vec<String>) -> Option<String> {
    stems.sort();
    let last = stems.last()?.clone();
    if last.ends_with("ان") {
        return Some(last);
    }
    if let [first, second, ..] = stems.as_slice() {
        let second = second.replace(' ', "");
        if POSSESSIVE_SUFFIXES.iter().any(|suffix| second.strip_prefix(first.as_str()) == Some(*suffix)) {
            return Some(first.clone());
        }
    }
    Some(last)
}

/// Order candidates by `pattern_count` and return the first survivor.
///
/// ```text
/// pattern_count > 0   sort ascending
/// pattern_count < 0   reverse discovery order
/// pattern_count = 0   keep discovery order, keep everything
/// ```
///
/// Candidates are then dropped from the front until at most `|pattern_count|`
/// remain. The ascending sort compares code points, not Persian alphabet
/// order.
pub(crate) fn select(mut stems: Vec<String>, pattern_count: i32) -> Option<String> {
    if pattern_count != 0 {
        if pattern_count < 0 {
            stems.reverse();
        } else {
            stems.sort();
        }
        let keep = pattern_count.unsigned_abs() as usize;
        let excess = stems.len().saturating_sub(keep);
        stems.drain(..excess);
    }
    stems.into_iter().next()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned(stems: &[&str]) -> Vec<String> {
        stems.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn plural_an_candidate_wins() {
        assert_eq!(disambiguate_nouns(owned(&["درخت", "درختان"])).as_deref(), Some("درختان"));
    }

    #[test]
    fn possessive_form_defers_to_base() {
        assert_eq!(disambiguate_nouns(owned(&["کتابم", "کتاب"])).as_deref(), Some("کتاب"));
        assert_eq!(disambiguate_nouns(owned(&["کتاب ش", "کتاب"])).as_deref(), Some("کتاب"));
    }

    #[test]
    fn otherwise_last_sorted_wins() {
        assert_eq!(disambiguate_nouns(owned(&["دفتر", "کتاب"])).as_deref(), Some("کتاب"));
        assert_eq!(disambiguate_nouns(owned(&["کتاب", "کتابها"])).as_deref(), Some("کتابها"));
        assert_eq!(disambiguate_nouns(Vec::new()), None);
    }

    #[test]
    fn positive_count_sorts_and_drops_from_front() {
        let stems = owned(&["ج", "ب", "الف"]);
        assert_eq!(select(stems.clone(), 1).as_deref(), Some("ج"));
        assert_eq!(select(stems.clone(), 2).as_deref(), Some("ب"));
        assert_eq!(select(stems, 5).as_deref(), Some("الف"));
    }

    #[test]
    fn ascending_order_is_by_code_point() {
        // U+062A sorts before U+067E even though پ precedes ت in the alphabet.
        assert_eq!(select(owned(&["پ", "ت"]), 1).as_deref(), Some("پ"));
    }

    #[test]
    fn negative_count_reverses() {
        let stems = owned(&["a", "b", "c"]);
        assert_eq!(select(stems.clone(), -1).as_deref(), Some("a"));
        assert_eq!(select(stems, -3).as_deref(), Some("c"));
    }

    #[test]
    fn zero_count_keeps_discovery_order() {
        assert_eq!(select(owned(&["c", "a", "b"]), 0).as_deref(), Some("c"));
        assert_eq!(select(Vec::new(), 0), None);
    }
}
