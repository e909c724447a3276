//! Per-language compiled-formatter cache.
//!
//! Compiling a message pattern is the expensive step of translation, so it
//! happens at most once per `(language, pattern)` pair for the life of the
//! process. Patterns are content-addressed: a changed translation is a new
//! key, never an update, so nothing here is ever invalidated — not even by
//! [`TranslationStore::clear_translations`](crate::TranslationStore::clear_translations).

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use crate::error::Result;
use crate::format::{FormatterBackend, FormatterInstance};

/// Compiled-pattern type of a backend.
pub type Compiled<B> =
    <<B as FormatterBackend>::Instance as FormatterInstance>::Compiled;

/// Memoizing cache over a formatter backend.
///
/// Two levels: language tag → formatter instance, then pattern string →
/// compiled pattern. Both grow monotonically with no eviction; the key space
/// is bounded by the message patterns the application actually ships, not by
/// user input.
pub struct FormatterCache<B: FormatterBackend> {
    backend: B,
    languages: Mutex<HashMap<String, LanguageFormatters<B>>>,
}

struct LanguageFormatters<B: FormatterBackend> {
    instance: B::Instance,
    compiled: HashMap<String, Arc<Compiled<B>>>,
}

impl<B: FormatterBackend> FormatterCache<B> {
    /// Create an empty cache over `backend`.
    pub fn new(backend: B) -> Self {
        Self { backend, languages: Mutex::new(HashMap::new()) }
    }

    /// Look up or compile the formatter for `(pattern, language)`.
    ///
    /// The same `Arc` is returned for the same pair on every call, so callers
    /// may treat compilation as a pure, cached function. A pattern the
    /// backend rejects is not cached; the error propagates and a later call
    /// will attempt compilation again.
    pub fn get_compiled(&self, pattern: &str, language: &str) -> Result<Arc<Compiled<B>>> {
        let mut languages = self.languages.lock().unwrap_or_else(PoisonError::into_inner);

        let entry = languages.entry(language.to_string()).or_insert_with(|| {
            LanguageFormatters {
                instance: self.backend.create_instance(language),
                compiled: HashMap::new(),
            }
        });

        if let Some(compiled) = entry.compiled.get(pattern) {
            return Ok(Arc::clone(compiled));
        }

        tracing::debug!(language, "compiling message pattern");
        let compiled = Arc::new(entry.instance.compile(pattern)?);
        entry.compiled.insert(pattern.to_string(), Arc::clone(&compiled));
        Ok(compiled)
    }
}

impl<B: FormatterBackend> std::fmt::Debug for FormatterCache<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let languages = self.languages.lock().unwrap_or_else(PoisonError::into_inner);
        f.debug_struct("FormatterCache").field("languages", &languages.len()).finish()
    }
}
