//! Store configuration.
//!
//! The host application supplies a [`Config`] to the store constructor (or
//! later through [`TranslationStore::configure`]); there is no ambient
//! process-wide settings object to discover. All fields are optional and a
//! default config is a no-op.
//!
//! [`TranslationStore::configure`]: crate::TranslationStore::configure

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::store::TranslationTable;

/// Translation store configuration.
///
/// # Example
///
/// ```
/// use msgcat::Config;
///
/// let config = Config::from_json(r#"{
///     "language": "fr-FR",
///     "translations": {
///         "fr-FR": { "greeting": { "Hello!": "Bonjour !" } }
///     }
/// }"#).unwrap();
/// assert_eq!(config.language.as_deref(), Some("fr-FR"));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Default target language for `translate` calls.
    #[serde(default)]
    pub language: Option<String>,

    /// Language message patterns are authored in; the ultimate fallback.
    #[serde(default, alias = "sourceLanguage")]
    pub source_language: Option<String>,

    /// Translation table fragment to merge in.
    #[serde(default)]
    pub translations: Option<TranslationTable>,
}

impl Config {
    /// Parse a configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| Error::config(format!("failed to parse config JSON: {e}")))
    }
}
