//! Script normalization and input classification.
//!
//! Every word goes through [`normalize`] before any lookup, so dictionary keys
//! and rule patterns only ever see the canonical letter forms:
//!
//! ```text
//! ي (Arabic yeh)        -> ی
//! ك (Arabic kaf)        -> ک
//! ۀ (heh with yeh)      -> ه
//! ؤ (waw with hamza)    -> و
//! إ أ (alef with hamza) -> ا
//! ZWNJ, RLM             -> ' '
//! U+064B..=U+0652       -> (dropped)
//! ```
//!
//! [`ScriptMask::scan`] then classifies the normalized word so the stemmer can
//! pass through Latin words and numerals untouched.

/// Canonicalize letter variants, turn joiners into spaces, drop diacritics,
/// and trim.
pub fn normalize(word: &str) -> String {
    let mut out = String::with_capacity(word.len());
    for c in word.chars() {
        match c {
            'ي' => out.push('ی'),
            'ۀ' => out.push('ه'),
            '\u{200C}' | '\u{200F}' => out.push(' '),
            'ك' => out.push('ک'),
            'ؤ' => out.push('و'),
            'إ' | 'أ' => out.push('ا'),
            // fathatan, dammatan, kasratan, fatha, damma, kasra, shadda, sukun
            '\u{064B}'..='\u{0652}' => {}
            _ => out.push(c),
        }
    }
    out.trim().to_string()
}

bitflags::bitflags! {
    /// Coarse character classes present in a word.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ScriptMask: u8 {
        /// Letters of the Arabic script block (Persian letters included).
        const ARABIC_LETTERS = 1 << 0;
        /// ASCII letters.
        const LATIN          = 1 << 1;
        /// ASCII, Arabic-Indic or extended Arabic-Indic (Persian) digits.
        const DIGITS         = 1 << 2;
        /// Whitespace.
        const SPACE          = 1 << 3;
        /// Anything else (punctuation, other scripts).
        const OTHER          = 1 << 4;
    }
}

impl ScriptMask {
    pub fn scan(word: &str) -> Self {
        let mut mask = ScriptMask::empty();
        for c in word.chars() {
            mask |= match c {
                '0'..='9' | '\u{0660}'..='\u{0669}' | '\u{06F0}'..='\u{06F9}' => ScriptMask::DIGITS,
                'a'..='z' | 'A'..='Z' => ScriptMask::LATIN,
                '\u{0621}'..='\u{064A}' | '\u{0671}'..='\u{06D3}' | '\u{06FA}'..='\u{06FF}' => {
                    ScriptMask::ARABIC_LETTERS
                }
                c if c.is_whitespace() => ScriptMask::SPACE,
                _ => ScriptMask::OTHER,
            };
        }
        mask
    }

    /// Words without a single Persian letter (English words, numerals) are
    /// never stemmed.
    pub fn is_passthrough(self) -> bool {
        !self.contains(ScriptMask::ARABIC_LETTERS)
    }
}
