use std::collections::HashMap;

/// Translations keyed by exact source text.
///
/// Unbounded and never invalidated; one cache lives for one file's import.
/// Failed translations are stored too (as the original text) so a failing
/// input is not retried within the same file.
#[derive(Debug, Default)]
pub struct TranslationCache {
    entries: HashMap<String, String>,
    hits: u64,
    misses: u64,
}

impl TranslationCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up `source`, counting the hit or miss.
    pub fn get(&mut self, source: &str) -> Option<String> {
        match self.entries.get(source) {
            Some(translated) => {
                self.hits += 1;
                Some(translated.clone())
            }
            None => {
                self.misses += 1;
                None
            }
        }
    }

    pub fn insert(&mut self, source: String, translated: String) {
        self.entries.insert(source, translated);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn misses(&self) -> u64 {
        self.misses
    }
}
