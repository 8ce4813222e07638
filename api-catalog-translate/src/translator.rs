use crate::backend::TranslationBackend;
use crate::cache::TranslationCache;

/// Caching, failure-tolerant front end over a [`TranslationBackend`].
///
/// Create one per file import. `translate` never fails: empty input comes
/// back empty without touching the backend, repeated input is served from
/// the cache, and a backend error yields the original text.
pub struct Translator<'a> {
    backend: &'a dyn TranslationBackend,
    cache: TranslationCache,
}

impl<'a> Translator<'a> {
    pub fn new(backend: &'a dyn TranslationBackend) -> Self {
        Self {
            backend,
            cache: TranslationCache::new(),
        }
    }

    pub fn translate(&mut self, text: &str) -> String {
        if text.is_empty() {
            return String::new();
        }
        if let Some(cached) = self.cache.get(text) {
            return cached;
        }

        let translated = match self.backend.translate(text) {
            Ok(t) => t,
            Err(e) => {
                log::debug!(
                    "{} failed for {:?}: {e}; keeping original",
                    self.backend.name(),
                    preview(text)
                );
                text.to_string()
            }
        };
        self.cache.insert(text.to_string(), translated.clone());
        translated
    }

    pub fn cache(&self) -> &TranslationCache {
        &self.cache
    }
}

/// First few characters of `text`, for log lines.
fn preview(text: &str) -> String {
    const MAX: usize = 40;
    match text.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &text[..idx]),
        None => text.to_string(),
    }
}

#[cfg(test)]
#[path = "tests/translator_tests.rs"]
mod tests;
