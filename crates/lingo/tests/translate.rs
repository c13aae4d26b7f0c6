//! End-to-end tests for the translate orchestrator.

use lingo::{MemoryCatalog, MessageSource, Params, Translate, Value, params};

fn russian_context() -> Translate {
    let mut catalog = MemoryCatalog::new();
    catalog
        .add("ru", "app", "cucumber|cucumbers", "огурец|огурца|огурцов")
        .add("ru", "app", "Hello, {name}!", "Привет, {name}!")
        .add(
            "ru",
            "app",
            "{sign} {n} cucumber|{sign} {n} cucumbers",
            "{sign} {n} огурец|{sign} {n} огурца|{sign} {n} огурцов",
        )
        .add("ru", "app", "empty", "");

    let mut t = Translate::builder()
        .source_language("en_us")
        .language("ru")
        .build();
    t.add_source("messages", MessageSource::new(catalog, "en_us"));
    t
}

// =============================================================================
// Lookup and fallback
// =============================================================================

#[test]
fn translated_message_is_used() {
    let t = russian_context();
    assert_eq!(
        t.t("app", "Hello, {name}!", Params::Named(params! { "name" => "мир" })),
        "Привет, мир!"
    );
}

#[test]
fn missing_translation_falls_back_to_source() {
    let t = russian_context();
    assert_eq!(
        t.t("app", "Goodbye, {name}!", Params::Named(params! { "name" => "world" })),
        "Goodbye, world!"
    );
}

#[test]
fn empty_translation_counts_as_missing() {
    let t = russian_context();
    assert_eq!(t.t("app", "empty", Params::None), "empty");
}

#[test]
fn unknown_category_is_a_miss_not_an_error() {
    let t = russian_context();
    assert_eq!(t.t("nothing-here", "plain", Params::None), "plain");
}

#[test]
fn unknown_source_selector_skips_lookup() {
    let t = russian_context();
    let result = t.translate(
        "app",
        "Hello, {name}!",
        Params::Named(params! { "name" => "world" }),
        Some("missing-backend"),
        None,
    );
    assert_eq!(result, "Hello, world!");
}

#[test]
fn empty_message_stays_empty() {
    let t = russian_context();
    assert_eq!(t.t("app", "", Params::None), "");
}

// =============================================================================
// Language handling
// =============================================================================

#[test]
fn same_language_skips_lookup() {
    let mut catalog = MemoryCatalog::new();
    // A pathological table that "translates" English to noise; it must not
    // be consulted when source and target languages match.
    catalog.add("en_us", "app", "stay", "noise");
    let mut t = Translate::builder().source_language("en_us").build();
    t.add_source("messages", MessageSource::new(catalog, "en_us"));

    assert_eq!(t.t("app", "stay", Params::None), "stay");
}

#[test]
fn force_translation_consults_the_table_anyway() {
    let mut catalog = MemoryCatalog::new();
    catalog.add("en_us", "app", "color", "colour");
    let mut t = Translate::builder().source_language("en_us").build();
    t.add_source(
        "messages",
        MessageSource::new(catalog, "en_us").with_force_translation(true),
    );

    assert_eq!(t.t("app", "color", Params::None), "colour");
}

#[test]
fn per_call_language_override() {
    let t = russian_context();
    // Override back to the source language: no lookup, English text.
    let result = t.translate(
        "app",
        "cucumber|cucumbers",
        Params::Scalar(2.into()),
        None,
        Some("en_us"),
    );
    assert_eq!(result, "cucumbers");
}

#[test]
fn set_language_switches_target() {
    let mut t = russian_context();
    assert_eq!(t.language(), "ru");
    t.set_language(Some("en-US"));
    assert_eq!(t.language(), "en_us");
    t.set_language(None::<String>);
    assert_eq!(t.language(), "en_us");
    assert_eq!(t.source_language(), "en_us");
}

#[test]
fn source_accessor_is_typed() {
    let t = russian_context();
    assert!(t.source("messages").is_some());
    assert!(t.source("core_messages").is_none());
}

// =============================================================================
// Plural selection through translate
// =============================================================================

#[test]
fn quantity_selects_russian_branch() {
    let t = russian_context();
    assert_eq!(t.t("app", "cucumber|cucumbers", 1), "огурец");
    assert_eq!(t.t("app", "cucumber|cucumbers", 2), "огурца");
    assert_eq!(t.t("app", "cucumber|cucumbers", 5), "огурцов");
    assert_eq!(t.t("app", "cucumber|cucumbers", 0), "огурцов");
}

#[test]
fn quantity_with_named_overrides() {
    let t = russian_context();
    let result = t.t(
        "app",
        "{sign} {n} cucumber|{sign} {n} cucumbers",
        Params::Counted(5.into(), params! { "sign" => "+" }),
    );
    assert_eq!(result, "+ 5 огурцов");
}

#[test]
fn explicit_n_override_wins_but_quantity_drives_selection() {
    let t = russian_context();
    let result = t.t(
        "app",
        "{sign} {n} cucumber|{sign} {n} cucumbers",
        Params::Counted(5.into(), params! { "sign" => "+", "n" => "пять" }),
    );
    assert_eq!(result, "+ пять огурцов");
}

#[test]
fn named_params_without_quantity_skip_choice() {
    let t = russian_context();
    // No quantity: the pipes are left alone and only substitution runs.
    let result = t.t("app", "a {x}|b {x}", Params::Named(params! { "x" => "1" }));
    assert_eq!(result, "a 1|b 1");
}

#[test]
fn scalar_string_param_becomes_n() {
    let t = russian_context();
    assert_eq!(t.t("app", "value: {n}", "hello"), "value: hello");
}

#[test]
fn positional_list_params() {
    let t = russian_context();
    let result = t.t(
        "app",
        "{n} of {1}",
        Params::List(vec![Value::Number(3), Value::Number(10)]),
    );
    assert_eq!(result, "3 of 10");
}

#[test]
fn explicit_conditions_pass_through_translation() {
    let t = russian_context();
    let result = t.t("app", "n==1#one item|n>1#{n} items", 4);
    assert_eq!(result, "4 items");
}

#[test]
fn context_without_sources_still_translates() {
    let t = Translate::new();
    assert_eq!(t.t("app", "cucumber|cucumbers", 1), "cucumber");
    assert_eq!(
        t.t("app", "Hello, {name}!", Params::Named(params! { "name" => "World" })),
        "Hello, World!"
    );
}
