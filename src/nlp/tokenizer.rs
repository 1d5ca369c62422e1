//! Tokenization and symbol normalization
//!
//! Review text arrives with currency symbols and glued digit-unit
//! compounds ("2hrs", "30mins"). This module rewrites those surface
//! forms, then segments the text into lowercase alphabetic tokens using
//! Unicode word boundaries.

use regex::Regex;
use std::sync::LazyLock;
use unicode_segmentation::UnicodeSegmentation;

/// A digit immediately followed by a letter, the seam of a glued
/// digit-unit compound.
static DIGIT_LETTER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d)(\p{Alphabetic})").expect("DIGIT_LETTER: invalid pattern")
});

/// Rewrites symbol-level noise ahead of tokenization.
///
/// Two rewrites, applied in order:
/// 1. every `$` becomes the literal word ` money `;
/// 2. a space is inserted between a digit and a letter that follows it,
///    so `2hrs` splits into `2 hrs`.
///
/// The output is stable under re-application.
pub fn normalize_symbols(text: &str) -> String {
    let monetized = text.replace('$', " money ");
    DIGIT_LETTER
        .replace_all(&monetized, "${1} ${2}")
        .into_owned()
}

/// Segments text into lowercase alphabetic tokens.
///
/// Word boundaries follow Unicode segmentation rules. A word survives
/// only if every character is alphabetic; numerals, punctuation runs,
/// and mixed words (including contractions such as `don't`) are
/// discarded. Survivors are lowercased.
pub fn tokenize(text: &str) -> Vec<String> {
    text.unicode_words()
        .filter(|w| w.chars().all(char::is_alphabetic))
        .map(str::to_lowercase)
        .collect()
}
