// src/core/catalog.rs
use crate::core::types::ShlokaRecord;
use serde::{Deserialize, Serialize};

#[derive(Clone, Serialize, Deserialize)]
struct CatalogEntry {
    record: ShlokaRecord,
    /// Lowercased copy of `record.text`, computed once at load so the
    /// per-keystroke scan never re-lowercases the whole collection.
    text_lower: String,
}

/// The frozen, ordered verse collection.
///
/// Built once at startup and never mutated: a record's position is its
/// identity, and every downstream lookup relies on that stability.
#[derive(Clone, Serialize, Deserialize)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    pub fn from_records(records: Vec<ShlokaRecord>) -> Self {
        let entries = records
            .into_iter()
            .map(|record| CatalogEntry {
                text_lower: record.text.to_lowercase(),
                record,
            })
            .collect();
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&ShlokaRecord> {
        self.entries.get(index).map(|e| &e.record)
    }

    pub fn records(&self) -> impl Iterator<Item = &ShlokaRecord> {
        self.entries.iter().map(|e| &e.record)
    }

    /// Iterates `(index, record, lowercased text)` in catalog order.
    pub(crate) fn scan(&self) -> impl Iterator<Item = (usize, &ShlokaRecord, &str)> {
        self.entries
            .iter()
            .enumerate()
            .map(|(i, e)| (i, &e.record, e.text_lower.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(text: &str, next_char: &str) -> ShlokaRecord {
        ShlokaRecord {
            text: text.to_string(),
            next_char: next_char.to_string(),
        }
    }

    #[test]
    fn preserves_insertion_order() {
        let catalog = Catalog::from_records(vec![record("अ", "क"), record("आ", "ख")]);
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get(0).unwrap().text, "अ");
        assert_eq!(catalog.get(1).unwrap().text, "आ");
        assert!(catalog.get(2).is_none());
    }

    #[test]
    fn lowercase_cache_follows_text() {
        let catalog = Catalog::from_records(vec![record("RaghuVamsha", "क")]);
        let (_, _, lower) = catalog.scan().next().unwrap();
        assert_eq!(lower, "raghuvamsha");
    }

    #[test]
    fn empty_catalog_is_valid() {
        let catalog = Catalog::from_records(vec![]);
        assert!(catalog.is_empty());
        assert_eq!(catalog.len(), 0);
        assert_eq!(catalog.records().count(), 0);
    }
}
