//! Minimal `{name}` placeholder backend.
//!
//! Compiles a pattern into a literal/placeholder segment list once, so
//! formatting is a single concatenation pass with no re-parsing. The syntax
//! is deliberately tiny: `{name}` substitutes the parameter `name`, braces
//! always delimit a placeholder, and there is no plural or select support
//! (use [`FluentBackend`](super::fluent::FluentBackend) for that).

use crate::error::{Error, Result};
use crate::format::{CompiledPattern, FormatterBackend, FormatterInstance, Params};

/// Backend for plain `{name}` interpolation.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleBackend;

/// Per-language compiler. The language tag only appears in error messages;
/// the syntax itself is locale-independent.
#[derive(Debug, Clone)]
pub struct SimpleInstance {
    language: String,
}

/// A pattern split into literal and placeholder segments.
#[derive(Debug, Clone)]
pub struct SimplePattern {
    segments: Vec<Segment>,
}

#[derive(Debug, Clone)]
enum Segment {
    Literal(String),
    Placeholder(String),
}

impl FormatterBackend for SimpleBackend {
    type Instance = SimpleInstance;

    fn create_instance(&self, language: &str) -> SimpleInstance {
        SimpleInstance { language: language.to_string() }
    }
}

impl FormatterInstance for SimpleInstance {
    type Compiled = SimplePattern;

    fn compile(&self, pattern: &str) -> Result<SimplePattern> {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut chars = pattern.chars();

        while let Some(ch) = chars.next() {
            if ch != '{' {
                if ch == '}' {
                    return Err(Error::compile(&self.language, "unmatched '}'"));
                }
                literal.push(ch);
                continue;
            }

            let mut name = String::new();
            let mut closed = false;
            for c in chars.by_ref() {
                if c == '}' {
                    closed = true;
                    break;
                }
                name.push(c);
            }
            if !closed {
                return Err(Error::compile(&self.language, "unclosed '{'"));
            }
            if name.is_empty() || !name.chars().all(|c| c.is_alphanumeric() || c == '_') {
                return Err(Error::compile(
                    &self.language,
                    format!("invalid placeholder name '{name}'"),
                ));
            }

            if !literal.is_empty() {
                segments.push(Segment::Literal(std::mem::take(&mut literal)));
            }
            segments.push(Segment::Placeholder(name));
        }

        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Ok(SimplePattern { segments })
    }
}

impl CompiledPattern for SimplePattern {
    fn format(&self, params: &Params) -> Result<String> {
        let mut result = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => result.push_str(text),
                Segment::Placeholder(name) => {
                    let value = params
                        .get(name)
                        .ok_or_else(|| Error::format(format!("missing parameter '{name}'")))?;
                    result.push_str(&value.to_string());
                }
            }
        }
        Ok(result)
    }
}
