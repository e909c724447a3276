//! Common test utilities.

#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use msgcat::error::Result;
use msgcat::format::simple::{SimpleBackend, SimpleInstance};
use msgcat::format::{FormatterBackend, FormatterInstance};
use msgcat::{TranslationStore, TranslationTable};

/// A `SimpleBackend` wrapper that counts instance creations and pattern
/// compilations, so tests can observe cache behavior from the outside.
#[derive(Clone, Default)]
pub struct CountingBackend {
    pub instances: Arc<AtomicUsize>,
    pub compilations: Arc<AtomicUsize>,
}

pub struct CountingInstance {
    inner: SimpleInstance,
    compilations: Arc<AtomicUsize>,
}

impl CountingBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn instances_created(&self) -> usize {
        self.instances.load(Ordering::SeqCst)
    }

    pub fn patterns_compiled(&self) -> usize {
        self.compilations.load(Ordering::SeqCst)
    }
}

impl FormatterBackend for CountingBackend {
    type Instance = CountingInstance;

    fn create_instance(&self, language: &str) -> CountingInstance {
        self.instances.fetch_add(1, Ordering::SeqCst);
        CountingInstance {
            inner: SimpleBackend.create_instance(language),
            compilations: Arc::clone(&self.compilations),
        }
    }
}

impl FormatterInstance for CountingInstance {
    type Compiled = <SimpleInstance as FormatterInstance>::Compiled;

    fn compile(&self, pattern: &str) -> Result<Self::Compiled> {
        self.compilations.fetch_add(1, Ordering::SeqCst);
        self.inner.compile(pattern)
    }
}

/// Build a one-language, one-category table fragment.
pub fn table(language: &str, category: &str, entries: &[(&str, &str)]) -> TranslationTable {
    let messages = entries.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect();
    let categories = [(category.to_string(), messages)].into_iter().collect();
    [(language.to_string(), categories)].into_iter().collect()
}

/// A store over a fresh counting backend, returned alongside its probe.
pub fn counting_store() -> (TranslationStore<CountingBackend>, CountingBackend) {
    let backend = CountingBackend::new();
    let store = TranslationStore::new(backend.clone());
    (store, backend)
}
