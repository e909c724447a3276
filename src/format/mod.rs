//! The formatter backend seam.
//!
//! The store does not interpret message-template syntax itself. Plurals,
//! selectors, and placeholder substitution belong to a [`FormatterBackend`]:
//! one formatter instance per language tag, each instance compiling pattern
//! strings into reusable [`CompiledPattern`] values. The
//! [`FormatterCache`](crate::cache::FormatterCache) memoizes both levels.
//!
//! Two backends ship with the crate:
//!
//! - [`fluent::FluentBackend`] — Project Fluent syntax (`{ $name }`,
//!   select expressions), the full-featured choice.
//! - [`simple::SimpleBackend`] — bare `{name}` placeholder substitution,
//!   handy for tests and plain interpolation.

pub mod fluent;
pub mod simple;

use std::collections::HashMap;

use crate::error::Result;

/// Factory for per-language formatter instances.
///
/// Created once per distinct language tag by the cache; the tag is treated
/// as an opaque key and backends decide how (or whether) to interpret it.
pub trait FormatterBackend {
    /// Per-language formatter, holding whatever locale state compilation needs.
    type Instance: FormatterInstance;

    /// Create the formatter instance for `language`.
    fn create_instance(&self, language: &str) -> Self::Instance;
}

/// A per-language pattern compiler.
pub trait FormatterInstance {
    /// The compiled, reusable form of a pattern.
    type Compiled: CompiledPattern;

    /// Compile a message pattern.
    ///
    /// A syntactically invalid pattern is an [`Error::Compile`] and is never
    /// cached by the caller.
    ///
    /// [`Error::Compile`]: crate::Error::Compile
    fn compile(&self, pattern: &str) -> Result<Self::Compiled>;
}

/// The executable form of a message pattern.
pub trait CompiledPattern {
    /// Resolve the pattern against `params`.
    ///
    /// Parameters that do not satisfy the pattern's placeholder requirements
    /// are an [`Error::Format`]; there is no degraded-string fallback.
    ///
    /// [`Error::Format`]: crate::Error::Format
    fn format(&self, params: &Params) -> Result<String>;
}

/// A parameter value supplied to a compiled pattern.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Text, substituted verbatim.
    String(String),
    /// Integer, available to plural/select rules.
    Int(i64),
    /// Float.
    Float(f64),
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::String(s) => f.write_str(s),
            Value::Int(n) => write!(f, "{n}"),
            Value::Float(n) => write!(f, "{n}"),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Int(i64::from(n))
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::Int(i64::from(n))
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

/// Named parameters for a formatting call.
///
/// # Example
///
/// ```
/// use msgcat::Params;
///
/// let params = Params::new().with("name", "Ana").with("count", 3);
/// assert!(params.get("name").is_some());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Params {
    values: HashMap<String, Value>,
}

impl Params {
    /// Create an empty parameter set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a parameter.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.values.insert(name.into(), value.into());
    }

    /// Builder-style insert.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(name, value);
        self
    }

    /// Look up a parameter by placeholder name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    /// Iterate over all parameters.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of parameters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self { values: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect() }
    }
}
