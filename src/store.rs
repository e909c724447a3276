//! Translation table and resolution.
//!
//! The table is three levels deep: language tag → category → source message
//! pattern → translated pattern. The source message doubles as both the
//! lookup key and the fallback pattern, so a missing translation always
//! resolves to the source-language text rather than an error.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::cache::FormatterCache;
use crate::config::Config;
use crate::error::Result;
use crate::format::{CompiledPattern, FormatterBackend, Params};

/// Source message pattern → translated pattern.
pub type MessageMap = HashMap<String, String>;

/// Category name → messages.
pub type CategoryMap = HashMap<String, MessageMap>;

/// Language tag → categories. Language tags are opaque mapping keys; they
/// are never parsed here.
pub type TranslationTable = HashMap<String, CategoryMap>;

/// Default source (and initial target) language.
pub const DEFAULT_LANGUAGE: &str = "en-US";

struct State {
    source_language: String,
    language: String,
    translations: TranslationTable,
}

/// Locale-aware translation store.
///
/// Owns the translation table and a [`FormatterCache`]; resolution picks the
/// translated pattern for the requested language, falling back to the source
/// message formatted in the source language.
///
/// All operations take `&self`: the table sits behind a read-mostly `RwLock`
/// and the cache behind its own lock, so a store can be shared across
/// threads when the backend's types are `Send + Sync`.
///
/// # Example
///
/// ```
/// use msgcat::{Config, Params, TranslationStore};
/// use msgcat::format::simple::SimpleBackend;
///
/// let config = Config::from_json(r#"{
///     "translations": {
///         "fr-FR": { "greeting": { "Hello, {name}!": "Bonjour, {name} !" } }
///     }
/// }"#).unwrap();
/// let store = TranslationStore::with_config(SimpleBackend, config);
///
/// let params = Params::new().with("name", "Ana");
/// let text = store.translate_to("fr-FR", "greeting", "Hello, {name}!", &params).unwrap();
/// assert_eq!(text, "Bonjour, Ana !");
/// ```
pub struct TranslationStore<B: FormatterBackend> {
    state: RwLock<State>,
    formatters: FormatterCache<B>,
}

impl<B: FormatterBackend> TranslationStore<B> {
    /// Create a store with default settings and an empty table.
    pub fn new(backend: B) -> Self {
        Self::with_config(backend, Config::default())
    }

    /// Create a store and apply an initial configuration.
    pub fn with_config(backend: B, config: Config) -> Self {
        let store = Self {
            state: RwLock::new(State {
                source_language: DEFAULT_LANGUAGE.to_string(),
                language: DEFAULT_LANGUAGE.to_string(),
                translations: TranslationTable::new(),
            }),
            formatters: FormatterCache::new(backend),
        };
        store.configure(config);
        store
    }

    /// Apply a configuration. Absent fields leave the current state alone,
    /// so a default config is a no-op. Supplied translations are merged via
    /// [`add_translations`](Self::add_translations) semantics.
    pub fn configure(&self, config: Config) {
        let mut state = self.write_state();
        if let Some(language) = config.language {
            state.language = language;
        }
        if let Some(source_language) = config.source_language {
            state.source_language = source_language;
        }
        if let Some(translations) = config.translations {
            state.translations = merged(&state.translations, translations);
        }
    }

    /// Merge a table fragment into the stored translations.
    ///
    /// Overlay semantics at per-category granularity: within each
    /// `(language, category)` the fragment mentions, new message keys win and
    /// existing keys not in the fragment are retained. Languages and
    /// categories the fragment does not mention carry over unchanged. The
    /// table is replaced atomically; readers never observe a partial merge.
    pub fn add_translations(&self, fragment: TranslationTable) {
        let mut state = self.write_state();
        state.translations = merged(&state.translations, fragment);
    }

    /// Remove all translations.
    ///
    /// The default and source languages keep their values, and compiled
    /// formatters stay warm in the cache.
    pub fn clear_translations(&self) {
        self.write_state().translations = TranslationTable::new();
    }

    /// Current default target language.
    pub fn language(&self) -> String {
        self.read_state().language.clone()
    }

    /// Current source (fallback) language.
    pub fn source_language(&self) -> String {
        self.read_state().source_language.clone()
    }

    /// Translate `message` under `category` into the store's default
    /// target language.
    pub fn translate(&self, category: &str, message: &str, params: &Params) -> Result<String> {
        let language = self.read_state().language.clone();
        self.translate_to(&language, category, message, params)
    }

    /// Shorthand alias for [`translate`](Self::translate).
    #[inline]
    pub fn t(&self, category: &str, message: &str, params: &Params) -> Result<String> {
        self.translate(category, message, params)
    }

    /// Translate `message` under `category` into `language`.
    ///
    /// Resolution order, exactly two tiers:
    ///
    /// 1. `translations[language][category][message]`, formatted in
    ///    `language`;
    /// 2. otherwise `message` itself, formatted in the *source* language —
    ///    the requested language plays no further part.
    ///
    /// A missing translation is the expected common case, never an error;
    /// an empty translation string is treated as missing. Compilation and
    /// formatting failures from the backend propagate.
    pub fn translate_to(
        &self,
        language: &str,
        category: &str,
        message: &str,
        params: &Params,
    ) -> Result<String> {
        let state = self.read_state();
        let translation = state
            .translations
            .get(language)
            .and_then(|categories| categories.get(category))
            .and_then(|messages| messages.get(message))
            // An empty translation counts as missing.
            .filter(|translation| !translation.is_empty());

        let compiled = match translation {
            Some(pattern) => self.formatters.get_compiled(pattern, language)?,
            None => {
                tracing::trace!(category, message, language, "falling back to source language");
                self.formatters.get_compiled(message, &state.source_language)?
            }
        };
        drop(state);

        compiled.format(params)
    }

    fn read_state(&self) -> std::sync::RwLockReadGuard<'_, State> {
        self.state.read().unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    fn write_state(&self) -> std::sync::RwLockWriteGuard<'_, State> {
        self.state.write().unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

/// Overlay `fragment` onto `existing`, producing a new table.
///
/// Per-category merge: unmentioned languages and categories are carried over
/// unchanged; within a mentioned category, fragment keys overwrite and the
/// rest of the existing keys survive.
fn merged(existing: &TranslationTable, fragment: TranslationTable) -> TranslationTable {
    let mut result = existing.clone();
    for (language, categories) in fragment {
        let merged_language = result.entry(language).or_default();
        for (category, messages) in categories {
            merged_language.entry(category).or_default().extend(messages);
        }
    }
    result
}
