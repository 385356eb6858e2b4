// src/core/classifier.rs

/// Returns true if `input` contains at least one code point in the
/// Devanagari block (U+0900..=U+097F).
///
/// This is detection, not validation: a string mixing Latin and
/// Devanagari classifies as Devanagari, because the Devanagari part is
/// what the catalog scan can match against.
pub fn is_devanagari(input: &str) -> bool {
    input.chars().any(|c| ('\u{0900}'..='\u{097F}').contains(&c))
}
