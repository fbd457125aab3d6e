//! src/classify.rs
//!
//! Per-character predicates used by the scanner. Every function here is pure
//! and works on a single Unicode scalar value.

use crate::config::Config;
use phf::{Map, phf_map};
use smallvec::SmallVec;
use unicode_normalization::char::{compose, decompose_canonical};

/// Letters whose "accent" is part of the glyph and therefore has no canonical
/// decomposition to strip.
static STROKE_TO_BASE: Map<char, char> = phf_map! {
    'Ł' => 'L',
    'ł' => 'l',
};

/// Unicode `White_Space`: ASCII space, tab, LF, CR, VT, FF plus NEL, NBSP,
/// the U+2000 block, line/paragraph separators and the ideographic space.
#[inline(always)]
pub fn is_whitespace(c: char) -> bool {
    c.is_whitespace()
}

#[inline(always)]
pub fn is_punctuation(c: char, config: &Config) -> bool {
    config.punctuation_marks.contains(c)
}

/// Whether the scanner steps over `c` instead of comparing it.
#[inline(always)]
pub fn is_skippable(c: char, config: &Config) -> bool {
    (config.skip_whitespace && is_whitespace(c))
        || (config.remove_punctuation && is_punctuation(c, config))
}

/// The form of `c` that takes part in a comparison.
///
/// Diacritics are stripped first, then the result is lowercased. Always yields
/// exactly one character.
#[inline]
pub fn normalize(c: char, config: &Config) -> char {
    if config.is_verbatim_compare() {
        return c;
    }
    let mut out = c;
    if config.remove_diacritics && !out.is_ascii() {
        out = strip_diacritics(out);
    }
    if config.case_insensitive {
        out = lowercase(out);
    }
    out
}

/// The Combining Diacritical Marks block. Marks outside it (nukta, Arabic
/// maddah and hamza, Hebrew points) are part of the letter and are kept.
#[inline(always)]
pub const fn is_combining_diacritical(c: char) -> bool {
    matches!(c, '\u{0300}'..='\u{036F}')
}

/// `c` without its combining diacritical marks.
///
/// The canonical decomposition is filtered and the remainder recomposed. When
/// nothing remains (a standalone mark) or the remainder does not recompose to
/// a single character (`क़` keeps its nukta, which has no composed form), `c`
/// is returned unchanged.
pub fn strip_diacritics(c: char) -> char {
    if let Some(&base) = STROKE_TO_BASE.get(&c) {
        return base;
    }
    let mut kept: SmallVec<[char; 4]> = SmallVec::new();
    decompose_canonical(c, |d| {
        if !is_combining_diacritical(d) {
            kept.push(d);
        }
    });
    let mut rest = kept.into_iter();
    let Some(first) = rest.next() else {
        return c;
    };
    rest.try_fold(first, compose).unwrap_or(c)
}

/// Simple lowercase mapping: first scalar of the full Unicode mapping.
#[inline(always)]
pub fn lowercase(c: char) -> char {
    if c.is_ascii() {
        return c.to_ascii_lowercase();
    }
    c.to_lowercase().next().unwrap_or(c)
}
