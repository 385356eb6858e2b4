// src/core/engine.rs
use crate::core::catalog::Catalog;
use crate::core::classifier::is_devanagari;
use crate::core::normalizer::normalize_phonetic;
use crate::core::translit::{
    to_devanagari_or_raw, to_devanagari_preview, ItransEngine, Transliterator,
};
use crate::core::types::SearchResult;
use std::collections::HashSet;

/// Default cap on results per search call.
pub const DEFAULT_RESULT_LIMIT: usize = 50;

/// Prefix search over the frozen catalog.
///
/// Owns the catalog and the transliteration capability; every method
/// takes `&self`, so one engine serves any number of readers.
pub struct SearchEngine {
    catalog: Catalog,
    translit: Box<dyn Transliterator>,
}

impl SearchEngine {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            translit: Box::new(ItransEngine::new()),
        }
    }

    /// Substitutes the transliteration engine, mainly for tests.
    pub fn with_transliterator(catalog: Catalog, translit: Box<dyn Transliterator>) -> Self {
        Self { catalog, translit }
    }

    /// Returns the verses whose text starts with the query, in catalog
    /// order, capped at `limit` across all candidate search terms.
    ///
    /// Devanagari input searches as-is. Latin input searches its
    /// normalized-and-transliterated form first, then the raw lowercase
    /// input as a fallback term (it only matters if the catalog itself
    /// carries romanized entries). A verse matched by an earlier term
    /// is never repeated by a later one.
    pub fn search(&self, input: &str, limit: usize) -> Vec<SearchResult> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Vec::new();
        }

        let terms = self.search_terms(trimmed);
        let mut seen: HashSet<usize> = HashSet::new();
        let mut results = Vec::new();

        for term in &terms {
            if results.len() >= limit {
                break;
            }
            for (index, record, text_lower) in self.catalog.scan() {
                if results.len() >= limit {
                    break;
                }
                if text_lower.starts_with(term.as_str()) && seen.insert(index) {
                    results.push(SearchResult {
                        text: record.text.clone(),
                        next_char: record.next_char.clone(),
                        index,
                    });
                }
            }
        }
        results
    }

    /// Candidate search terms, highest priority first.
    fn search_terms(&self, trimmed: &str) -> Vec<String> {
        if is_devanagari(trimmed) {
            return vec![trimmed.to_lowercase()];
        }
        let normalized = normalize_phonetic(trimmed);
        let primary = to_devanagari_or_raw(self.translit.as_ref(), &normalized).to_lowercase();
        let fallback = trimmed.to_lowercase();
        if primary == fallback {
            vec![primary]
        } else {
            vec![primary, fallback]
        }
    }

    /// Point lookup by catalog position. Out of range is `None`, never
    /// a panic.
    pub fn get_by_index(&self, index: usize) -> Option<SearchResult> {
        self.catalog.get(index).map(|record| SearchResult {
            text: record.text.clone(),
            next_char: record.next_char.clone(),
            index,
        })
    }

    pub fn total_count(&self) -> usize {
        self.catalog.len()
    }

    /// Devanagari rendering of a Latin query, for display under the
    /// search box. Empty for blank or already-Devanagari input, and
    /// empty when the transliterator fails.
    pub fn preview(&self, input: &str) -> String {
        let trimmed = input.trim();
        if trimmed.is_empty() || is_devanagari(trimmed) {
            return String::new();
        }
        to_devanagari_preview(self.translit.as_ref(), &normalize_phonetic(trimmed))
    }
}
