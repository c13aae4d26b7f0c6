//! Tests for file-backed message catalogs and source caching.

use std::fs;
use std::path::Path;

use lingo::{Catalog, FileCatalog, MessageSource};

fn write_catalog(dir: &Path, language: &str, category: &str, content: &str) {
    let lang_dir = dir.join(language);
    fs::create_dir_all(&lang_dir).unwrap();
    fs::write(lang_dir.join(format!("{category}.json")), content).unwrap();
}

#[test]
fn loads_flat_json_catalog() {
    let dir = tempfile::tempdir().unwrap();
    write_catalog(
        dir.path(),
        "ru",
        "app",
        r#"{
            "@metadata": { "authors": ["tests"] },
            "Hello": "Привет",
            "cucumber|cucumbers": "огурец|огурца|огурцов"
        }"#,
    );

    let catalog = FileCatalog::new(dir.path());
    let table = catalog.load("app", "ru").unwrap();
    assert_eq!(table.len(), 2);
    assert_eq!(table["Hello"], "Привет");
}

#[test]
fn metadata_and_non_string_values_are_skipped() {
    let dir = tempfile::tempdir().unwrap();
    write_catalog(
        dir.path(),
        "de",
        "app",
        r#"{ "@metadata": {}, "ok": "gut", "count": 3 }"#,
    );

    let table = FileCatalog::new(dir.path()).load("app", "de").unwrap();
    assert_eq!(table.len(), 1);
    assert_eq!(table["ok"], "gut");
}

#[test]
fn missing_file_is_an_empty_table() {
    let dir = tempfile::tempdir().unwrap();
    let table = FileCatalog::new(dir.path()).load("app", "fr").unwrap();
    assert!(table.is_empty());
}

#[test]
fn malformed_json_is_a_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    write_catalog(dir.path(), "ru", "app", "{ not json");

    let result = FileCatalog::new(dir.path()).load("app", "ru");
    assert!(result.is_err());
}

#[test]
fn non_object_root_is_a_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    write_catalog(dir.path(), "ru", "app", r#"["a", "b"]"#);

    assert!(FileCatalog::new(dir.path()).load("app", "ru").is_err());
}

#[test]
fn source_translates_from_files() {
    let dir = tempfile::tempdir().unwrap();
    write_catalog(dir.path(), "ru", "app", r#"{ "Hello": "Привет" }"#);

    let source = MessageSource::new(FileCatalog::new(dir.path()), "en_us");
    assert_eq!(source.translate("app", "Hello", "ru"), "Привет");
    assert_eq!(source.translate("app", "Absent", "ru"), "Absent");
}

#[test]
fn broken_catalog_degrades_to_source_text() {
    let dir = tempfile::tempdir().unwrap();
    write_catalog(dir.path(), "ru", "app", "{ broken");

    let source = MessageSource::new(FileCatalog::new(dir.path()), "en_us");
    // Rendering never fails on a broken catalog...
    assert_eq!(source.translate("app", "Hello", "ru"), "Hello");
    // ...but tooling can surface the error.
    assert!(source.preload("app", "ru").is_err());
}

#[test]
fn preload_reports_entry_count() {
    let dir = tempfile::tempdir().unwrap();
    write_catalog(dir.path(), "ru", "app", r#"{ "a": "1", "b": "2" }"#);

    let source = MessageSource::new(FileCatalog::new(dir.path()), "en_us");
    assert_eq!(source.preload("app", "ru").unwrap(), 2);
}

#[test]
fn tables_are_cached_per_language_and_category() {
    let dir = tempfile::tempdir().unwrap();
    write_catalog(dir.path(), "ru", "app", r#"{ "Hello": "Привет" }"#);

    let source = MessageSource::new(FileCatalog::new(dir.path()), "en_us");
    assert_eq!(source.translate("app", "Hello", "ru"), "Привет");

    // Rewrite the file; the cached table keeps serving the old value.
    write_catalog(dir.path(), "ru", "app", r#"{ "Hello": "Здравствуйте" }"#);
    assert_eq!(source.translate("app", "Hello", "ru"), "Привет");

    // A different category misses the cache and reads the disk.
    write_catalog(dir.path(), "ru", "other", r#"{ "Hello": "Здравствуйте" }"#);
    assert_eq!(source.translate("other", "Hello", "ru"), "Здравствуйте");
}

#[test]
fn language_identifiers_are_canonicalized() {
    let dir = tempfile::tempdir().unwrap();
    write_catalog(dir.path(), "pt_br", "app", r#"{ "Hello": "Oi" }"#);

    let source = MessageSource::new(FileCatalog::new(dir.path()), "en_us");
    assert_eq!(source.translate("app", "Hello", "pt-BR"), "Oi");
}
