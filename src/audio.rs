// src/audio.rs
use std::collections::HashMap;

/// Maps verse text to a playable media URL.
///
/// A display-layer concern: the search core never consults this. Keys
/// are either a full verse or its first line, matching however the
/// recording archive happened to label each clip.
#[derive(Debug, Default, Clone)]
pub struct AudioIndex {
    entries: HashMap<String, String>,
}

impl AudioIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    pub fn insert(&mut self, text: impl Into<String>, url: impl Into<String>) {
        self.entries.insert(text.into(), url.into());
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Finds a recording for a verse: exact text first, then the
    /// verse's first line, then partial containment in either
    /// direction. `None` simply means no recording exists.
    pub fn url_for(&self, text: &str) -> Option<&str> {
        if let Some(url) = self.entries.get(text) {
            return Some(url.as_str());
        }

        let first_line = text.lines().next().unwrap_or("").trim();
        if let Some(url) = self.entries.get(first_line) {
            return Some(url.as_str());
        }

        self.entries
            .iter()
            .find(|(key, _)| {
                text.contains(key.as_str())
                    || (!first_line.is_empty() && key.contains(first_line))
            })
            .map(|(_, url)| url.as_str())
    }
}
