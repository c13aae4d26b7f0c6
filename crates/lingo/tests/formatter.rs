//! Tests for the value formatter.

use lingo::{
    FormatType, Formatter, MemoryCatalog, MessageSource, Translate, Value,
};

fn plain() -> (Translate, Formatter) {
    (Translate::new(), Formatter::new())
}

#[test]
fn raw_passes_through() {
    let (t, f) = plain();
    assert_eq!(
        f.format(&t, &Value::String("<as is>".to_string()), FormatType::Raw),
        "<as is>"
    );
}

#[test]
fn boolean_labels() {
    let (t, f) = plain();
    assert_eq!(f.format(&t, &Value::Number(1), FormatType::Boolean), "Yes");
    assert_eq!(f.format(&t, &Value::Number(0), FormatType::Boolean), "No");
    assert_eq!(
        f.format(&t, &Value::String(String::new()), FormatType::Boolean),
        "No"
    );
}

#[test]
fn ntext_converts_newlines() {
    let (t, f) = plain();
    assert_eq!(
        f.format(
            &t,
            &Value::String("a\nb\r\nc".to_string()),
            FormatType::Ntext
        ),
        "a<br />b<br />c"
    );
}

#[test]
fn email_image_and_url_render_as_html() {
    let (t, f) = plain();
    insta::assert_snapshot!(
        f.format(&t, &Value::String("max@studio.example".to_string()), FormatType::Email),
        @r#"<a href="mailto:max@studio.example">max@studio.example</a>"#
    );
    insta::assert_snapshot!(
        f.format(&t, &Value::String("/img/logo.png".to_string()), FormatType::Image),
        @r#"<img src="/img/logo.png" alt="" />"#
    );
    insta::assert_snapshot!(
        f.format(&t, &Value::String("example.com/page".to_string()), FormatType::Url),
        @r#"<a href="http://example.com/page">example.com/page</a>"#
    );
}

#[test]
fn url_with_scheme_is_not_prefixed() {
    let (t, f) = plain();
    assert_eq!(
        f.format(
            &t,
            &Value::String("https://example.com".to_string()),
            FormatType::Url
        ),
        "<a href=\"https://example.com\">https://example.com</a>"
    );
}

#[test]
fn datetime_from_unix_timestamp() {
    let (t, f) = plain();
    assert_eq!(
        f.format(&t, &Value::Number(1413331200), FormatType::Datetime),
        "2014/10/15 12:00:00 AM"
    );
}

#[test]
fn date_from_string() {
    let (t, f) = plain();
    assert_eq!(
        f.format(
            &t,
            &Value::String("2014-10-15 18:47:00".to_string()),
            FormatType::Date
        ),
        "2014/10/15"
    );
}

// =============================================================================
// Sizes go through the plural engine
// =============================================================================

#[test]
fn short_size_units() {
    let (t, f) = plain();
    assert_eq!(f.format_size(&t, 500.0, false), "500 B");
    assert_eq!(f.format_size(&t, 1024.0, false), "1 KB");
    assert_eq!(f.format_size(&t, 1024.0 * 1024.0, false), "1 MB");
}

#[test]
fn verbose_sizes_pluralize() {
    let (t, f) = plain();
    assert_eq!(f.format_size(&t, 1.0, true), "1 byte");
    assert_eq!(f.format_size(&t, 2.0, true), "2 bytes");
    assert_eq!(f.format_size(&t, 1536.0, true), "1.5 kilobytes");
}

#[test]
fn verbose_sizes_translate_through_core_messages() {
    let mut catalog = MemoryCatalog::new();
    catalog.add(
        "ru",
        "core",
        "{n} kilobyte|{n} kilobytes",
        "{n} килобайт|{n} килобайта|{n} килобайтов",
    );
    let mut t = Translate::builder().language("ru").build();
    t.add_source("core_messages", MessageSource::new(catalog, "en_us"));
    let f = Formatter::new();

    assert_eq!(f.format_size(&t, 2048.0, true), "2 килобайта");
    assert_eq!(f.format_size(&t, 5.0 * 1024.0, true), "5 килобайтов");
}

#[test]
fn size_rounding_respects_decimals() {
    let (t, f) = plain();
    // 1.5 MB plus a bit rounds to two decimals.
    let bytes = 1024.0 * 1024.0 * 1.526;
    assert_eq!(f.format_size(&t, bytes, false), "1.53 MB");
}
