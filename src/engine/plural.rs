//! Broken-plural resolution.
//!
//! Irregular plurals (کتب -> کتاب) live in the plural map. Inflected forms of
//! them (کتبم, کتب‌شان, …) are found by masking possessive and plural suffixes
//! off the end of the word before the lookup. Two masks exist:
//!
//! ```text
//! stem  [ی after ا/و]  [ها]  [ی]  suffix
//!
//! SingleSuffix    suffix = ات | ی | م | ت | ش | (space)تان | (space)مان | (space)شان | ء
//! CompoundSuffix  suffix = [ات](space?)تان|مان|شان | ی | م | ت | ش | ء
//! ```
//!
//! The stem is the *shortest* prefix after which the rest of the word matches
//! the tail. The glide `ی` is only accepted right after `ا` or `و`; instead of
//! a look-behind, each candidate stem is checked for that ending and the tail
//! is tried with and without a leading `ی`.

use regex::Regex;

use crate::dictionary::Dictionaries;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PluralMask {
    SingleSuffix,
    CompoundSuffix,
}

impl PluralMask {
    /// `(tail, tail after a glide ی)` patterns, both anchored at both ends.
    fn tails(self) -> (&'static Regex, &'static Regex) {
        match self {
            PluralMask::SingleSuffix => (
                regex!(r"^(?:ها)?(?:ی)?(?:ات|ی|م|ت|ش| تان|تان| مان|مان| شان|شان|ء)$"),
                regex!(r"^ی(?:ها)?(?:ی)?(?:ات|ی|م|ت|ش| تان|تان| مان|مان| شان|شان|ء)$"),
            ),
            PluralMask::CompoundSuffix => (
                regex!(r"^(?:ها)?(?:ی)?(?:(?:ات)?(?: تان|تان| مان|مان| شان|شان)|ی|م|ت|ش|ء)$"),
                regex!(r"^ی(?:ها)?(?:ی)?(?:(?:ات)?(?: تان|تان| مان|مان| شان|شان)|ی|م|ت|ش|ء)$"),
            ),
        }
    }

    /// Strip the masked suffix from `word`; the trimmed word when nothing matches.
    pub(crate) fn apply(self, word: &str) -> String {
        let (tail, glide_tail) = self.tails();
        for (idx, c) in word.char_indices() {
            if c == '\n' {
                break;
            }
            let (stem, rest) = word.split_at(idx + c.len_utf8());
            if rest.is_empty() {
                break;
            }
            let after_vowel = stem.ends_with(['ا', 'و']);
            if (after_vowel && glide_tail.is_match(rest)) || tail.is_match(rest) {
                return stem.trim().to_string();
            }
        }
        word.trim().to_string()
    }
}

/// Singular form for `word` or one of its masked forms, in that order.
pub(crate) fn broken_plural_stem(dictionaries: &Dictionaries, word: &str) -> Option<String> {
    dictionaries
        .singular_of(word)
        .or_else(|| dictionaries.singular_of(&PluralMask::SingleSuffix.apply(word)))
        .or_else(|| dictionaries.singular_of(&PluralMask::CompoundSuffix.apply(word)))
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::Verb;

    #[test]
    fn masks_possessive_suffixes() {
        assert_eq!(PluralMask::SingleSuffix.apply("کتبم"), "کتب");
        assert_eq!(PluralMask::SingleSuffix.apply("کتب شان"), "کتب");
        assert_eq!(PluralMask::SingleSuffix.apply("کتبهای"), "کتب");
        assert_eq!(PluralMask::CompoundSuffix.apply("کتبتان"), "کتب");
    }

    #[test]
    fn compound_mask_takes_ات_with_pronoun() {
        // A lone ات is only a suffix for the single-suffix mask.
        assert_eq!(PluralMask::SingleSuffix.apply("علماتشان"), "علمات");
        assert_eq!(PluralMask::CompoundSuffix.apply("علماتشان"), "علم");
    }

    #[test]
    fn glide_only_after_alef_or_waw() {
        assert_eq!(PluralMask::SingleSuffix.apply("علمایم"), "علما");
        assert_eq!(PluralMask::SingleSuffix.apply("علماییم"), "علما");
        // No glide after ب, so the first ی stays with the stem.
        assert_eq!(PluralMask::SingleSuffix.apply("کتبییم"), "کتبی");
    }

    #[test]
    fn unmatched_words_are_returned_trimmed() {
        assert_eq!(PluralMask::SingleSuffix.apply("کتاب"), "کتاب");
        assert_eq!(PluralMask::CompoundSuffix.apply(""), "");
    }

    #[test]
    fn resolves_through_plural_map() {
        let dicts = Dictionaries::from_entries(
            Vec::<&str>::new(),
            vec![("کتب", "کتاب".to_string()), ("علما", "عالم".to_string())],
            Vec::<(&str, Verb)>::new(),
        );
        assert_eq!(broken_plural_stem(&dicts, "کتب").as_deref(), Some("کتاب"));
        assert_eq!(broken_plural_stem(&dicts, "کتبم").as_deref(), Some("کتاب"));
        assert_eq!(broken_plural_stem(&dicts, "علمایشان").as_deref(), Some("عالم"));
        assert_eq!(broken_plural_stem(&dicts, "دفترم"), None);
    }
}
