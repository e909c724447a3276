//! Project Fluent backend.
//!
//! Each compiled pattern is a self-contained concurrent [`FluentBundle`]
//! holding a single message built from the pattern string. That keeps the
//! compiled callable free of lifetimes into a shared resource and makes it
//! `Send + Sync`, so the cache can hand out `Arc`s across threads.

use fluent_bundle::concurrent::FluentBundle;
use fluent_bundle::{FluentArgs, FluentResource, FluentValue};
use unic_langid::LanguageIdentifier;

use crate::error::{Error, Result};
use crate::format::{CompiledPattern, FormatterBackend, FormatterInstance, Params, Value};

/// Message id used for the synthesized single-message resource.
const MESSAGE_ID: &str = "pattern";

/// Backend producing Fluent-syntax formatters.
#[derive(Debug, Clone, Copy, Default)]
pub struct FluentBackend;

/// Per-language Fluent compiler.
#[derive(Debug, Clone)]
pub struct FluentInstance {
    langid: LanguageIdentifier,
}

/// A compiled Fluent pattern, ready to format.
pub struct FluentPattern {
    bundle: FluentBundle<FluentResource>,
}

impl FormatterBackend for FluentBackend {
    type Instance = FluentInstance;

    fn create_instance(&self, language: &str) -> FluentInstance {
        // Unparseable tags fall back to en-US locale data, same as an
        // unknown-but-valid tag would.
        let langid: LanguageIdentifier = language
            .parse()
            .unwrap_or_else(|_| "en-US".parse().expect("en-US is a valid language identifier"));
        FluentInstance { langid }
    }
}

impl FormatterInstance for FluentInstance {
    type Compiled = FluentPattern;

    fn compile(&self, pattern: &str) -> Result<FluentPattern> {
        let resource = FluentResource::try_new(to_resource(pattern)).map_err(|(_, errors)| {
            Error::compile(self.langid.to_string(), format!("{errors:?}"))
        })?;

        let mut bundle = FluentBundle::new_concurrent(vec![self.langid.clone()]);
        // Bidi isolation marks make output unpredictable byte-wise; callers
        // that need them can wrap values themselves.
        bundle.set_use_isolating(false);
        bundle
            .add_resource(resource)
            .map_err(|errors| Error::compile(self.langid.to_string(), format!("{errors:?}")))?;

        Ok(FluentPattern { bundle })
    }
}

impl CompiledPattern for FluentPattern {
    fn format(&self, params: &Params) -> Result<String> {
        let value = self
            .bundle
            .get_message(MESSAGE_ID)
            .and_then(|message| message.value())
            .ok_or_else(|| Error::format("pattern has no value"))?;

        let mut args = FluentArgs::new();
        for (name, param) in params.iter() {
            args.set(name, to_fluent_value(param));
        }

        let mut errors = Vec::new();
        let result = self.bundle.format_pattern(value, Some(&args), &mut errors);
        if let Some(first) = errors.first() {
            return Err(Error::format(first.to_string()));
        }
        Ok(result.into_owned())
    }
}

impl std::fmt::Debug for FluentPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FluentPattern").finish()
    }
}

fn to_fluent_value(value: &Value) -> FluentValue<'_> {
    match value {
        Value::String(s) => FluentValue::from(s.as_str()),
        Value::Int(n) => FluentValue::from(*n),
        Value::Float(n) => FluentValue::from(*n),
    }
}

/// Wrap a bare pattern string into a one-message FTL resource.
///
/// Continuation lines must be indented in Fluent syntax, so every newline in
/// the pattern gets an indent appended.
fn to_resource(pattern: &str) -> String {
    let body = pattern.replace('\n', "\n    ");
    format!("{MESSAGE_ID} = {body}\n")
}
