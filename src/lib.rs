//! msgcat — locale-aware message translation.
//!
//! Resolves a `(category, message, language)` triple into a formatted string
//! using a two-level translation table and a per-language compiled-formatter
//! cache. The source message is both the lookup key and the fallback text,
//! so untranslated messages render as-is in the source language instead of
//! failing.
//!
//! ## Usage
//!
//! ```
//! use msgcat::{Config, Params, TranslationStore};
//! use msgcat::format::fluent::FluentBackend;
//!
//! let config = Config::from_json(r#"{
//!     "translations": {
//!         "fr-FR": { "greeting": { "Hello, { $name }!": "Bonjour, { $name } !" } }
//!     }
//! }"#).unwrap();
//!
//! let store = TranslationStore::with_config(FluentBackend, config);
//! let params = Params::new().with("name", "Ana");
//!
//! assert_eq!(
//!     store.translate_to("fr-FR", "greeting", "Hello, { $name }!", &params).unwrap(),
//!     "Bonjour, Ana !"
//! );
//! // No German translation: falls back to the source message.
//! assert_eq!(
//!     store.translate_to("de-DE", "greeting", "Hello, { $name }!", &params).unwrap(),
//!     "Hello, Ana!"
//! );
//! ```
//!
//! ## Global instance
//!
//! For applications that want a process-wide store, [`init`] installs one
//! (Fluent-backed) behind a `OnceLock` and the [`t!`] macro translates
//! through it:
//!
//! ```
//! use msgcat::{t, Config};
//!
//! msgcat::init(Config::default());
//! let msg = t!("greeting", "Hello, { $name }!", "name" => "Ana").unwrap();
//! assert_eq!(msg, "Hello, Ana!");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cache;
pub mod config;
pub mod error;
pub mod format;
pub mod store;

pub use cache::FormatterCache;
pub use config::Config;
pub use error::{Error, Result};
pub use format::{Params, Value};
pub use store::{CategoryMap, MessageMap, TranslationStore, TranslationTable};

use std::sync::OnceLock;

use format::fluent::FluentBackend;

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The store type used by the global instance.
pub type DefaultStore = TranslationStore<FluentBackend>;

/// Global store, installed once at startup by [`init`].
static STORE: OnceLock<DefaultStore> = OnceLock::new();

/// Install the global translation store with an initial configuration.
///
/// # Panics
///
/// Panics if called more than once.
pub fn init(config: Config) {
    let store = TranslationStore::with_config(FluentBackend, config);
    assert!(STORE.set(store).is_ok(), "msgcat::init() called more than once");
}

/// Get the global store.
///
/// # Panics
///
/// Panics if [`init`] has not been called.
pub fn get() -> &'static DefaultStore {
    STORE.get().expect("msgcat not initialized - call msgcat::init() first")
}

/// Try to get the global store without panicking.
pub fn try_get() -> Option<&'static DefaultStore> {
    STORE.get()
}

/// Translate through the global store.
///
/// Prefer the [`t!`] macro for ergonomic access.
pub fn translate(category: &str, message: &str, params: &Params) -> Result<String> {
    get().translate(category, message, params)
}

/// Build a [`Params`] set inline.
///
/// ```
/// use msgcat::params;
///
/// let p = params!("name" => "Ana", "count" => 3);
/// assert_eq!(p.len(), 2);
/// ```
#[macro_export]
macro_rules! params {
    () => {
        $crate::Params::new()
    };
    ($($name:expr => $value:expr),+ $(,)?) => {{
        let mut params = $crate::Params::new();
        $(params.set($name, $value);)+
        params
    }};
}

/// Translate through the global store.
///
/// ```rust,ignore
/// let msg = t!("greeting", "Hello!")?;
/// let msg = t!("greeting", "Hello, { $name }!", "name" => "Ana")?;
/// ```
#[macro_export]
macro_rules! t {
    ($category:expr, $message:expr) => {
        $crate::translate($category, $message, &$crate::Params::new())
    };
    ($category:expr, $message:expr, $($name:expr => $value:expr),+ $(,)?) => {
        $crate::translate($category, $message, &$crate::params!($($name => $value),+))
    };
}
