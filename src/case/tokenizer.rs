//! Word tokenizer for mixed-convention identifiers.
//!
//! The grammar runs as a fixed pipeline of small passes so each rule can be
//! tested on its own:
//!
//! 1. [`fold_all_caps`] lower-cases inputs that are entirely upper case.
//! 2. [`split_acronyms`] marks the boundary after an acronym (`HTTPServer`).
//! 3. [`split_case_changes`] marks lower/digit to upper transitions (`camelCase`).
//! 4. [`scan_words`] picks raw words out of the marked string.
//! 5. [`split_digit_runs`] cuts every raw word into letter and digit runs.

use lazy_static::lazy_static;
use regex::Regex;
use std::borrow::Cow;
use tracing::trace;

/// Glyphs that separate words in kebab-case, snake_case and dot.case input.
pub const SEPARATORS: [char; 3] = ['-', '_', '.'];

/// Rejoins both capture groups with a `-` boundary between them.
const BOUNDARY_REPLACEMENT: &str = "${1}-${2}";

lazy_static! {
    // Uppercase run followed by a capitalized word or a digit: `HTTPServer`, `ID3`
    static ref ACRONYM_BOUNDARY: Regex = Regex::new(r"([A-Z]+)([A-Z][a-z]|[0-9])").unwrap();
    // Lowercase letter or digit followed by an uppercase letter: `camelCase`, `v2Beta`
    static ref CASE_BOUNDARY: Regex = Regex::new(r"([a-z0-9])([A-Z])").unwrap();
    static ref RAW_WORD: Regex =
        Regex::new(r"[A-Z]+[a-z0-9]*|[a-z][a-z0-9]*|[0-9][a-z0-9]*|[-_.][a-z0-9]*").unwrap();
    static ref WORD_PART: Regex = Regex::new(r"[A-Za-z]+|[0-9]+").unwrap();
}

/// Split `input` into its words.
///
/// Tokens keep the casing they had in the input (after all-caps folding), are
/// never empty and never contain a separator glyph. Characters outside ASCII
/// letters, digits and the separators are dropped.
pub fn tokenize(input: &str) -> Vec<String> {
    let folded = fold_all_caps(input);
    let acronyms = split_acronyms(&folded);
    let marked = split_case_changes(&acronyms);

    let words: Vec<String> = scan_words(&marked)
        .into_iter()
        .flat_map(split_digit_runs)
        .collect();

    trace!(input, marked = %marked, ?words, "tokenized");
    words
}

/// ASCII-lower-case `input` when it contains no ASCII lowercase letter.
///
/// `WHAT_DOES_IT_DO` carries no case information, so only its separators can
/// drive splitting. Non-ASCII characters are left as they are, matching the
/// ASCII-only word grammar.
pub fn fold_all_caps(input: &str) -> Cow<'_, str> {
    if !input.bytes().any(|b| b.is_ascii_lowercase()) {
        Cow::Owned(input.to_ascii_lowercase())
    } else {
        Cow::Borrowed(input)
    }
}

/// Insert a boundary between an uppercase run and a following capitalized
/// word or digit, keeping the acronym in one piece.
pub fn split_acronyms(input: &str) -> Cow<'_, str> {
    ACRONYM_BOUNDARY.replace_all(input, BOUNDARY_REPLACEMENT)
}

/// Insert a boundary between a lowercase letter or digit and the uppercase
/// letter right after it.
pub fn split_case_changes(input: &str) -> Cow<'_, str> {
    CASE_BOUNDARY.replace_all(input, BOUNDARY_REPLACEMENT)
}

/// Scan raw words left to right.
///
/// A raw word starts with an uppercase run, a lowercase letter, a digit or a
/// separator glyph and continues with lowercase letters and digits. Leading
/// separators are stripped and matches left empty are dropped.
pub fn scan_words(input: &str) -> Vec<&str> {
    RAW_WORD
        .find_iter(input)
        .map(|m| m.as_str().trim_start_matches(&SEPARATORS[..]))
        .filter(|word| !word.is_empty())
        .collect()
}

/// Cut a raw word into pure letter runs and pure digit runs.
pub fn split_digit_runs(raw: &str) -> Vec<String> {
    WORD_PART
        .find_iter(raw)
        .map(|m| m.as_str().to_string())
        .collect()
}
