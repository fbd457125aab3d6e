// src/config.rs
// Normalization policy for a palindrome check. Built once, read by every check.

use phf::{Set, phf_set};
use smallvec::SmallVec;

/// The POSIX `[:punct:]` class, in ASCII order.
pub const POSIX_PUNCTUATION: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

static POSIX_PUNCT_SET: Set<char> = phf_set! {
    '!', '"', '#', '$', '%', '&', '\'', '(', ')', '*', '+', ',', '-', '.', '/',
    ':', ';', '<', '=', '>', '?', '@', '[', '\\', ']', '^', '_', '`', '{', '|',
    '}', '~',
};

/// The alphabet of characters treated as punctuation.
///
/// Membership is a plain set lookup; it is **not** a Unicode general-category
/// test. The default is the POSIX class, served from a compile-time perfect
/// hash. Custom alphabets are kept sorted and deduplicated inline (no heap for
/// up to 32 marks) and looked up by binary search.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PunctuationMarks {
    #[default]
    Posix,
    Custom(SmallVec<[char; 32]>),
}

impl PunctuationMarks {
    #[inline(always)]
    pub const fn posix() -> Self {
        Self::Posix
    }

    /// An empty alphabet. Combined with `remove_punctuation` it removes nothing.
    #[inline(always)]
    pub fn none() -> Self {
        Self::Custom(SmallVec::new())
    }

    pub fn from_chars(marks: &str) -> Self {
        marks.chars().collect()
    }

    #[inline(always)]
    pub fn contains(&self, c: char) -> bool {
        match self {
            Self::Posix => POSIX_PUNCT_SET.contains(&c),
            Self::Custom(marks) => marks.binary_search(&c).is_ok(),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Posix => POSIX_PUNCT_SET.len(),
            Self::Custom(marks) => marks.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl FromIterator<char> for PunctuationMarks {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        let mut marks: SmallVec<[char; 32]> = iter.into_iter().collect();
        marks.sort_unstable();
        marks.dedup();
        Self::Custom(marks)
    }
}

impl From<&str> for PunctuationMarks {
    fn from(marks: &str) -> Self {
        Self::from_chars(marks)
    }
}

/// Which normalization steps a check applies, and what counts as punctuation.
///
/// Every flag defaults to `true`; `punctuation_marks` defaults to
/// [`POSIX_PUNCTUATION`]. No combination of values is invalid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Step over whitespace when looking for the next character to compare.
    pub skip_whitespace: bool,
    /// Compare letters without their accent marks (`ó` == `o`).
    pub remove_diacritics: bool,
    /// Compare letters by their lowercase form.
    pub case_insensitive: bool,
    /// Step over every character in `punctuation_marks`.
    pub remove_punctuation: bool,
    pub punctuation_marks: PunctuationMarks,
    /// Absent input counts as a palindrome.
    pub null_okay: bool,
    /// Empty input counts as a palindrome without scanning.
    pub blank_string_okay: bool,
}

impl Default for Config {
    #[inline(always)]
    fn default() -> Self {
        Self {
            skip_whitespace: true,
            remove_diacritics: true,
            case_insensitive: true,
            remove_punctuation: true,
            punctuation_marks: PunctuationMarks::Posix,
            null_okay: true,
            blank_string_okay: true,
        }
    }
}

impl Config {
    /// Every normalization step disabled: characters are compared verbatim.
    pub fn strict() -> Self {
        Self {
            skip_whitespace: false,
            remove_diacritics: false,
            case_insensitive: false,
            remove_punctuation: false,
            ..Self::default()
        }
    }

    pub fn with_skip_whitespace(mut self, on: bool) -> Self {
        self.skip_whitespace = on;
        self
    }

    pub fn with_remove_diacritics(mut self, on: bool) -> Self {
        self.remove_diacritics = on;
        self
    }

    pub fn with_case_insensitive(mut self, on: bool) -> Self {
        self.case_insensitive = on;
        self
    }

    pub fn with_remove_punctuation(mut self, on: bool) -> Self {
        self.remove_punctuation = on;
        self
    }

    pub fn with_punctuation_marks(mut self, marks: impl Into<PunctuationMarks>) -> Self {
        self.punctuation_marks = marks.into();
        self
    }

    pub fn with_null_okay(mut self, on: bool) -> Self {
        self.null_okay = on;
        self
    }

    pub fn with_blank_string_okay(mut self, on: bool) -> Self {
        self.blank_string_okay = on;
        self
    }

    /// True when the scanner may step over characters at all.
    #[inline(always)]
    pub fn skips_anything(&self) -> bool {
        self.skip_whitespace || (self.remove_punctuation && !self.punctuation_marks.is_empty())
    }

    /// True when characters are compared verbatim after skipping.
    #[inline(always)]
    pub fn is_verbatim_compare(&self) -> bool {
        !self.remove_diacritics && !self.case_insensitive
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_enable_everything() {
        let c = Config::default();
        assert!(c.skip_whitespace);
        assert!(c.remove_diacritics);
        assert!(c.case_insensitive);
        assert!(c.remove_punctuation);
        assert!(c.null_okay);
        assert!(c.blank_string_okay);
        assert_eq!(c.punctuation_marks, PunctuationMarks::Posix);
    }

    #[test]
    fn posix_set_matches_posix_string() {
        let posix = PunctuationMarks::posix();
        assert_eq!(posix.len(), POSIX_PUNCTUATION.chars().count());
        for c in POSIX_PUNCTUATION.chars() {
            assert!(posix.contains(c), "missing {c:?}");
        }
        for c in ['a', 'Z', '0', ' ', '\t', '¿', '—', '«'] {
            assert!(!posix.contains(c), "unexpected {c:?}");
        }
    }

    #[test]
    fn custom_marks_are_sorted_and_deduplicated() {
        let marks = PunctuationMarks::from_chars("..,!,¿");
        assert_eq!(marks.len(), 4);
        assert!(marks.contains('¿'));
        assert!(marks.contains(','));
        assert!(!marks.contains('?'));
        assert_eq!(PunctuationMarks::from_chars("!,."), PunctuationMarks::from(".,!"));
    }

    #[test]
    fn empty_marks_are_legal() {
        let c = Config::default()
            .with_skip_whitespace(false)
            .with_punctuation_marks(PunctuationMarks::none());
        assert!(c.remove_punctuation);
        assert!(c.punctuation_marks.is_empty());
        assert!(!c.skips_anything());
    }

    #[test]
    fn strict_keeps_input_policy() {
        let c = Config::strict();
        assert!(c.is_verbatim_compare());
        assert!(!c.skips_anything());
        assert!(c.null_okay);
        assert!(c.blank_string_okay);
    }
}
