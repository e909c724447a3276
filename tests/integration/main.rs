//! Integration tests for the msgcat translation store.

#![allow(clippy::unwrap_used)] // Tests can use unwrap for cleaner assertions

mod common;

use common::{counting_store, table, CountingBackend};
use msgcat::format::fluent::FluentBackend;
use msgcat::format::simple::SimpleBackend;
use msgcat::format::CompiledPattern;
use msgcat::{params, Config, FormatterCache, Params, TranslationStore};

/// Fallback: an untranslated message formats exactly as the source message
/// would through the formatter cache directly.
#[test]
fn test_fallback_matches_direct_source_formatting() {
    let (store, _) = counting_store();
    let params = params!("name" => "Ana");

    let via_store = store.translate_to("de-DE", "greeting", "Hello, {name}!", &params).unwrap();

    let cache = FormatterCache::new(CountingBackend::new());
    let direct = cache.get_compiled("Hello, {name}!", "en-US").unwrap();
    assert_eq!(via_store, direct.format(&params).unwrap());
}

/// Override: a stored translation wins over whatever the source message
/// would have produced.
#[test]
fn test_override_property() {
    let (store, _) = counting_store();
    store.add_translations(table("fr-FR", "greeting", &[("Hello, {name}!", "Salut, {name} !")]));

    let params = params!("name" => "Ana");
    let text = store.translate_to("fr-FR", "greeting", "Hello, {name}!", &params).unwrap();
    assert_eq!(text, "Salut, Ana !");
}

/// Merge non-destructiveness: keys from an earlier batch survive a later
/// batch that does not mention them; mentioned keys take the new value.
#[test]
fn test_merge_non_destructiveness() {
    let (store, _) = counting_store();
    store.add_translations(table("fr-FR", "ui", &[("Open", "Ouvrir"), ("Close", "Fermer")]));
    store.add_translations(table("fr-FR", "ui", &[("Close", "Fermer !")]));

    let params = Params::new();
    assert_eq!(store.translate_to("fr-FR", "ui", "Open", &params).unwrap(), "Ouvrir");
    assert_eq!(store.translate_to("fr-FR", "ui", "Close", &params).unwrap(), "Fermer !");
}

/// Merge isolation: adding a category never disturbs sibling categories of
/// the same language, nor other languages.
#[test]
fn test_merge_isolation() {
    let (store, _) = counting_store();
    store.add_translations(table("fr-FR", "ui", &[("Open", "Ouvrir")]));
    store.add_translations(table("es-ES", "ui", &[("Open", "Abrir")]));
    store.add_translations(table("fr-FR", "errors", &[("Failed", "Échec")]));

    let params = Params::new();
    assert_eq!(store.translate_to("fr-FR", "ui", "Open", &params).unwrap(), "Ouvrir");
    assert_eq!(store.translate_to("es-ES", "ui", "Open", &params).unwrap(), "Abrir");
    assert_eq!(store.translate_to("fr-FR", "errors", "Failed", &params).unwrap(), "Échec");
}

/// Cache idempotence: a repeated translate call produces identical output
/// and does not recompile the pattern.
#[test]
fn test_cache_idempotence() {
    let (store, probe) = counting_store();
    store.add_translations(table("fr-FR", "greeting", &[("Hello, {name}!", "Bonjour, {name} !")]));

    let params = params!("name" => "Ana");
    let first = store.translate_to("fr-FR", "greeting", "Hello, {name}!", &params).unwrap();
    let compiled_after_first = probe.patterns_compiled();

    let second = store.translate_to("fr-FR", "greeting", "Hello, {name}!", &params).unwrap();

    assert_eq!(first, second);
    assert_eq!(probe.patterns_compiled(), compiled_after_first);
    assert_eq!(compiled_after_first, 1);
}

/// One formatter instance per language tag, created once.
#[test]
fn test_one_instance_per_language() {
    let (store, probe) = counting_store();
    let params = Params::new();

    store.translate_to("en-US", "ui", "One", &params).unwrap();
    store.translate_to("en-US", "ui", "Two", &params).unwrap();
    assert_eq!(probe.instances_created(), 1);

    // Untranslated fr-FR request formats under the source language, so no
    // fr-FR instance is created either.
    store.translate_to("fr-FR", "ui", "Three", &params).unwrap();
    assert_eq!(probe.instances_created(), 1);

    store.add_translations(table("fr-FR", "ui", &[("One", "Un")]));
    store.translate_to("fr-FR", "ui", "One", &params).unwrap();
    assert_eq!(probe.instances_created(), 2);
}

/// Clearing resets lookups to the fallback tier but leaves the formatter
/// cache warm.
#[test]
fn test_clear_resets_lookups_not_cache() {
    let (store, probe) = counting_store();
    let params = Params::new();

    // Warm the source-language formatter for the message itself.
    assert_eq!(store.translate_to("fr-FR", "ui", "Open", &params).unwrap(), "Open");

    store.add_translations(table("fr-FR", "ui", &[("Open", "Ouvrir")]));
    assert_eq!(store.translate_to("fr-FR", "ui", "Open", &params).unwrap(), "Ouvrir");

    let compiled_before_clear = probe.patterns_compiled();
    store.clear_translations();

    // Falls back again, and the warm source-language formatter is reused:
    // no new compilation happens.
    assert_eq!(store.translate_to("fr-FR", "ui", "Open", &params).unwrap(), "Open");
    assert_eq!(probe.patterns_compiled(), compiled_before_clear);
}

/// The concrete scenario from the crate's README, `{name}` syntax.
#[test]
fn test_greeting_scenario_simple_backend() {
    let store = TranslationStore::new(SimpleBackend);
    store.configure(Config {
        language: None,
        source_language: None,
        translations: Some(table(
            "fr-FR",
            "greeting",
            &[("Hello, {name}!", "Bonjour, {name} !")],
        )),
    });

    let params = params!("name" => "Ana");
    assert_eq!(
        store.translate_to("fr-FR", "greeting", "Hello, {name}!", &params).unwrap(),
        "Bonjour, Ana !"
    );
    assert_eq!(
        store.translate_to("de-DE", "greeting", "Hello, {name}!", &params).unwrap(),
        "Hello, Ana!"
    );
}

/// The same scenario end to end over the Fluent backend, including a plural
/// select expression.
#[test]
fn test_fluent_backend_end_to_end() {
    let store = TranslationStore::with_config(
        FluentBackend,
        Config::from_json(
            r#"{
                "language": "ru-RU",
                "translations": {
                    "ru-RU": { "app": { "Hello, { $name }!": "Привет, { $name }!" } }
                }
            }"#,
        )
        .unwrap(),
    );

    let params = params!("name" => "Ана");
    assert_eq!(store.translate("app", "Hello, { $name }!", &params).unwrap(), "Привет, Ана!");

    let plural = "{ $count ->\n    [one] { $count } file\n   *[other] { $count } files\n}";
    assert_eq!(
        store.translate_to("en-US", "app", plural, &params!("count" => 1)).unwrap(),
        "1 file"
    );
    assert_eq!(
        store.translate_to("en-US", "app", plural, &params!("count" => 7)).unwrap(),
        "7 files"
    );
}

/// An empty translation value is treated as missing: it falls into the
/// source-language tier instead of being compiled as an empty pattern.
#[test]
fn test_empty_translation_falls_back() {
    let store = TranslationStore::with_config(
        FluentBackend,
        Config::from_json(r#"{ "translations": { "fr-FR": { "ui": { "Hello, World!": "" } } } }"#)
            .unwrap(),
    );
    assert_eq!(
        store.translate_to("fr-FR", "ui", "Hello, World!", &Params::new()).unwrap(),
        "Hello, World!"
    );
}

/// Formatter failures propagate through translate; they are not swallowed
/// into a degraded string.
#[test]
fn test_formatter_errors_propagate() {
    let (store, _) = counting_store();

    // Malformed source pattern: compile error.
    let err = store.translate_to("en-US", "ui", "broken {", &Params::new()).unwrap_err();
    assert!(matches!(err, msgcat::Error::Compile { .. }));

    // Well-formed pattern, missing parameter: format error.
    let err = store.translate_to("en-US", "ui", "Hi {name}", &Params::new()).unwrap_err();
    assert!(matches!(err, msgcat::Error::Format(_)));

    // A malformed *translation* also propagates, even though the source
    // message itself is fine.
    store.add_translations(table("fr-FR", "ui", &[("Fine", "broken {")]));
    let err = store.translate_to("fr-FR", "ui", "Fine", &Params::new()).unwrap_err();
    assert!(matches!(err, msgcat::Error::Compile { .. }));
}
