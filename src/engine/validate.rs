//! Heuristic lexicon validation.
//!
//! A proposed stem is accepted when it, or one orthographic repair of it, is a
//! lexicon entry. Repairs are tried in a fixed order and each one starts from
//! the original word; the first hit wins.
//!
//! ```text
//! Exact                   کتاب
//! LeadingAlefMadda        ا… -> آ…
//! AlefHamzaAbove          …ا… -> …أ…        (interior ا, every occurrence)
//! AlefHamzaBelow          …ا… -> …إ…
//! WawHamza                …ئو… -> …ؤ…
//! TrailingHamza           …ء -> …
//! YehHamza                …ئ… -> …ی…
//! SpaceRemoved            "کتاب خانه" -> "کتابخانه"  (only when allowed)
//! SuffixSeparated         دیندار -> دین دار, ثروتمند -> ثروته مند
//! PrefixToggled           بیکار <-> بی کار
//! PrefixExceptionRemoved  غیرقانونی -> قانونی
//! ```
//!
//! "Interior" means the first occurrence starts at char index `1..=len-2`.

use crate::dictionary::Dictionaries;

/// Derivational suffixes that may be written joined or separated.
pub(crate) const SUFFIXES: &[&str] = &[
    "كار", "ناك", "وار", "آسا", "آگین", "بار", "بان", "دان", "زار", "سار", "سان", "لاخ", "مند", "دار", "مرد", "کننده",
    "گرا", "نما", "متر",
];

/// Derivational prefixes that may be written joined or separated.
pub(crate) const PREFIXES: &[&str] = &["بی", "با", "پیش", "غیر", "فرو", "هم", "نا", "یک"];

/// Prefixes that are dropped entirely when looking for the base word.
pub(crate) const PREFIX_EXCEPTIONS: &[&str] = &["غیر"];

/// The repair that made a word validate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Repair {
    Exact,
    LeadingAlefMadda,
    AlefHamzaAbove,
    AlefHamzaBelow,
    WawHamza,
    TrailingHamza,
    YehHamza,
    SpaceRemoved,
    SuffixSeparated,
    PrefixToggled,
    PrefixExceptionRemoved,
}

/// Char index of the first occurrence of `needle`.
fn char_index(word: &str, needle: &str) -> Option<usize> {
    word.find(needle).map(|byte| word[..byte].chars().count())
}

fn replace_first(word: &str, from: &str, to: &str) -> String {
    word.replacen(from, to, 1)
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct Validator<'d> {
    dictionaries: &'d Dictionaries,
}

impl<'d> Validator<'d> {
    pub(crate) fn new(dictionaries: &'d Dictionaries) -> Self {
        Validator { dictionaries }
    }

    pub(crate) fn is_valid(&self, word: &str, remove_space: bool) -> bool {
        self.validate(word, remove_space).is_some()
    }

    /// Find the first repair under which `word` is a lexicon entry.
    pub(crate) fn validate(&self, word: &str, remove_space: bool) -> Option<Repair> {
        let word = word.trim();
        let last = word.chars().count() as isize - 2;
        let interior = |needle: &str| char_index(word, needle).is_some_and(|i| i >= 1 && i as isize <= last);
        let is_word = |candidate: &str| self.dictionaries.is_word(candidate);

        if is_word(word) {
            return Some(Repair::Exact);
        }
        if word.starts_with('ا') && is_word(&replace_first(word, "ا", "آ")) {
            return Some(Repair::LeadingAlefMadda);
        }
        if interior("ا") && is_word(&word.replace('ا', "أ")) {
            return Some(Repair::AlefHamzaAbove);
        }
        if interior("ا") && is_word(&word.replace('ا', "إ")) {
            return Some(Repair::AlefHamzaBelow);
        }
        if interior("ئو") && is_word(&word.replace("ئو", "ؤ")) {
            return Some(Repair::WawHamza);
        }
        if word.ends_with('ء') && is_word(&word.replace('ء', "")) {
            return Some(Repair::TrailingHamza);
        }
        if interior("ئ") && is_word(&word.replace('ئ', "ی")) {
            return Some(Repair::YehHamza);
        }
        if remove_space && interior(" ") && is_word(&word.replace(' ', "")) {
            return Some(Repair::SpaceRemoved);
        }

        if let Some(suffix) = SUFFIXES.iter().find(|suffix| word.ends_with(*suffix)) {
            // "مند" also takes back the silent heh: ثروتمند -> ثروته مند
            let separated = if *suffix == "مند" { format!("ه {suffix}") } else { format!(" {suffix}") };
            if is_word(&word.replace(suffix, &separated)) {
                return Some(Repair::SuffixSeparated);
            }
        }

        if let Some(prefix) = PREFIXES.iter().find(|prefix| word.starts_with(*prefix)) {
            let spaced = format!("{prefix} ");
            let toggled =
                if word.starts_with(&spaced) { word.replace(&spaced, prefix) } else { word.replace(prefix, &spaced) };
            if is_word(&toggled) {
                return Some(Repair::PrefixToggled);
            }
        }

        if let Some(prefix) = PREFIX_EXCEPTIONS.iter().find(|prefix| word.starts_with(*prefix)) {
            let spaced = format!("{prefix} ");
            let stripped =
                if word.starts_with(&spaced) { replace_first(word, &spaced, "") } else { replace_first(word, prefix, "") };
            if is_word(&stripped) {
                return Some(Repair::PrefixExceptionRemoved);
            }
        }

        None
    }
}
