// src/core/types.rs
use serde::{Deserialize, Serialize};

/// One verse as it appears in the catalog file.
///
/// `text` is the full Devanagari verse, possibly spanning several lines.
/// `next_char` is the glyph that conventionally follows the verse in
/// antakshari-style recitation. It is stored metadata, never derived
/// from `text`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShlokaRecord {
    pub text: String,
    pub next_char: String,
}

/// A single search hit, owned by the caller that requested it.
///
/// `index` is the verse's position in the catalog, stable for the
/// process lifetime, and doubles as the handle for detail lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    pub text: String,
    pub next_char: String,
    pub index: usize,
}
