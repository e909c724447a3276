//! Error types for msgcat.
//!
//! A missing translation is *not* an error anywhere in this crate — it is the
//! designed fallback trigger. Errors only come out of the formatter backend:
//! a pattern the backend cannot compile, or parameters that do not satisfy a
//! compiled pattern.

use thiserror::Error;

/// Crate error type.
#[derive(Debug, Error)]
pub enum Error {
    /// The formatter backend rejected a message pattern.
    #[error("failed to compile pattern for language '{language}': {reason}")]
    Compile {
        /// Language tag the pattern was compiled for.
        language: String,
        /// Backend-reported reason.
        reason: String,
    },

    /// A compiled pattern could not be formatted with the given parameters.
    #[error("failed to format pattern: {0}")]
    Format(String),

    /// Configuration error (invalid JSON, wrong shape).
    #[error("configuration error: {0}")]
    Config(String),
}

/// Convenient Result type alias for msgcat operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a compilation error.
    pub fn compile(language: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::Compile { language: language.into(), reason: reason.into() }
    }

    /// Create a formatting error.
    pub fn format(reason: impl Into<String>) -> Self {
        Error::Format(reason.into())
    }

    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Error::Config(msg.into())
    }
}
