//! Verb stems.
//!
//! A rule tagged `V` proposes a bare verb stem. The stem is accepted when
//! wrapping it in one of the affix templates below (`*` marks the stem) yields
//! a lexicon word. Irregular verbs bypass all of that through the verb map.

use super::validate::Validator;
use crate::dictionary::Dictionaries;

/// Templates tried in order. The first one inserts a glide `ی` after stems
/// ending in `ا` or `و` (خوا -> خوایش).
pub(crate) const VERB_AFFIXES: &[&str] =
    &["*ش", "*نده", "*ا", "*ار", "وا*", "اثر*", "فرو*", "پیش*", "گرو*", "*ه", "*گار", "*ن"];

/// The first affix template under which `stem` validates.
pub(crate) fn matching_affix(validator: &Validator<'_>, stem: &str) -> Option<&'static str> {
    if stem.is_empty() || stem.contains(' ') {
        return None;
    }
    let glide = stem.ends_with(['ا', 'و']);
    VERB_AFFIXES.iter().enumerate().find_map(|(idx, template)| {
        let filled = if idx == 0 && glide { template.replace('*', &format!("{stem}ی")) } else { template.replace('*', stem) };
        validator.is_valid(&filled, true).then_some(*template)
    })
}

/// Stem of an irregular verb form: the present stem when it is itself a word,
/// the past stem otherwise.
pub(crate) fn verb_override(dictionaries: &Dictionaries, input: &str) -> Option<String> {
    let verb = dictionaries.verb(input)?;
    let stem = if dictionaries.is_word(verb.present()) { verb.present() } else { verb.past() };
    (!stem.is_empty()).then(|| stem.to_string())
}
