//! Commonly used data formatting.
//!
//! [`Formatter`] renders values as dates, numbers, booleans, links, and
//! human-readable sizes. Each format is a variant of the closed
//! [`FormatType`] enum dispatched through a match; string tags resolve via
//! `FromStr`, and an unknown tag is the one formatter error.
//!
//! Formatting never panics on bad content: an unparseable date or a
//! non-numeric number renders as the raw input text.

use std::str::FromStr;

use bon::Builder;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::error::FormatError;
use crate::params;
use crate::translate::{CORE_CATEGORY, Translate};
use crate::types::{Params, Value};

/// The closed set of formats a [`Formatter`] can apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatType {
    /// The value as-is.
    Raw,
    /// HTML-encoded plain text.
    Text,
    /// HTML-encoded text with newlines as `<br />`.
    Ntext,
    /// A date.
    Date,
    /// A time of day.
    Time,
    /// A date with time.
    Datetime,
    /// A yes/no label.
    Boolean,
    /// A number with grouping and decimal configuration.
    Number,
    /// A `mailto:` link.
    Email,
    /// An image tag.
    Image,
    /// A hyperlink.
    Url,
    /// A byte count in human-readable form.
    Size,
}

impl FromStr for FormatType {
    type Err = FormatError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag.to_ascii_lowercase().as_str() {
            "raw" => Ok(FormatType::Raw),
            "text" => Ok(FormatType::Text),
            "ntext" => Ok(FormatType::Ntext),
            "date" => Ok(FormatType::Date),
            "time" => Ok(FormatType::Time),
            "datetime" => Ok(FormatType::Datetime),
            "boolean" => Ok(FormatType::Boolean),
            "number" => Ok(FormatType::Number),
            "email" => Ok(FormatType::Email),
            "image" => Ok(FormatType::Image),
            "url" => Ok(FormatType::Url),
            "size" => Ok(FormatType::Size),
            _ => Err(FormatError::UnknownType {
                name: tag.to_string(),
            }),
        }
    }
}

/// Number display configuration: decimal digits and separators.
#[derive(Debug, Clone)]
pub struct NumberFormat {
    pub decimals: u32,
    pub decimal_separator: char,
    pub thousand_separator: char,
}

impl Default for NumberFormat {
    fn default() -> Self {
        NumberFormat {
            decimals: 0,
            decimal_separator: '.',
            thousand_separator: ',',
        }
    }
}

/// Labels for boolean display, false label first.
#[derive(Debug, Clone)]
pub struct BooleanFormat {
    pub false_label: String,
    pub true_label: String,
}

impl Default for BooleanFormat {
    fn default() -> Self {
        BooleanFormat {
            false_label: "No".to_string(),
            true_label: "Yes".to_string(),
        }
    }
}

/// Size display configuration: bytes per kilobyte and decimal digits.
#[derive(Debug, Clone)]
pub struct SizeFormat {
    pub base: f64,
    pub decimals: u32,
}

impl Default for SizeFormat {
    fn default() -> Self {
        SizeFormat {
            base: 1024.0,
            decimals: 2,
        }
    }
}

/// A set of commonly used data formatting methods.
///
/// # Example
///
/// ```
/// use lingo::{FormatType, Formatter, Translate, Value};
///
/// let t = Translate::new();
/// let formatter = Formatter::builder().build();
///
/// assert_eq!(
///     formatter.format(&t, &Value::Number(1), FormatType::Boolean),
///     "Yes"
/// );
/// assert_eq!(
///     formatter.format(&t, &Value::Number(1234567), FormatType::Number),
///     "1,234,567"
/// );
/// ```
#[derive(Builder)]
#[builder(on(String, into))]
pub struct Formatter {
    /// chrono format string for dates.
    #[builder(default = "%Y/%m/%d".to_string())]
    pub date_format: String,

    /// chrono format string for times.
    #[builder(default = "%I:%M:%S %p".to_string())]
    pub time_format: String,

    /// chrono format string for date-times.
    #[builder(default = "%Y/%m/%d %I:%M:%S %p".to_string())]
    pub datetime_format: String,

    #[builder(default)]
    pub number_format: NumberFormat,

    #[builder(default)]
    pub boolean_format: BooleanFormat,

    #[builder(default)]
    pub size_format: SizeFormat,
}

impl Default for Formatter {
    fn default() -> Self {
        Formatter::builder().build()
    }
}

impl Formatter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Format a value by string tag.
    ///
    /// The typed entry point behind tags like `"date"` or `"number"`;
    /// an unknown tag is a caller error, not data content.
    pub fn format_tag(
        &self,
        t: &Translate,
        value: &Value,
        tag: &str,
    ) -> Result<String, FormatError> {
        let kind = tag.parse::<FormatType>()?;
        Ok(self.format(t, value, kind))
    }

    /// Format a value by [`FormatType`].
    ///
    /// `t` supplies translations for the texts the formatter itself emits
    /// (size units); everything else is locale-independent.
    pub fn format(&self, t: &Translate, value: &Value, kind: FormatType) -> String {
        match kind {
            FormatType::Raw => value.to_string(),
            FormatType::Text => encode(&value.to_string()),
            FormatType::Ntext => newlines_to_breaks(&encode(&value.to_string())),
            FormatType::Date => self.format_timestamp(value, &self.date_format),
            FormatType::Time => self.format_timestamp(value, &self.time_format),
            FormatType::Datetime => self.format_timestamp(value, &self.datetime_format),
            FormatType::Boolean => self.format_boolean(value),
            FormatType::Number => self.format_number(value),
            FormatType::Email => format_email(&value.to_string()),
            FormatType::Image => format_image(&value.to_string()),
            FormatType::Url => format_url(&value.to_string()),
            FormatType::Size => self.format_size(t, value.as_quantity().unwrap_or(0.0), false),
        }
    }

    /// Format a timestamp value, or return the raw text when it cannot be
    /// read as one.
    fn format_timestamp(&self, value: &Value, pattern: &str) -> String {
        match normalize_timestamp(value) {
            Some(moment) => moment.format(pattern).to_string(),
            None => value.to_string(),
        }
    }

    fn format_boolean(&self, value: &Value) -> String {
        if value.is_truthy() {
            self.boolean_format.true_label.clone()
        } else {
            self.boolean_format.false_label.clone()
        }
    }

    /// Format a number with grouping; non-numeric values render raw.
    fn format_number(&self, value: &Value) -> String {
        let Some(number) = value.as_quantity() else {
            return value.to_string();
        };
        let config = &self.number_format;
        let rendered = format!("{:.*}", config.decimals as usize, number.abs());
        let (int_part, frac_part) = rendered.split_once('.').unwrap_or((rendered.as_str(), ""));

        let mut out = String::new();
        if number < 0.0 {
            out.push('-');
        }
        for (i, digit) in int_part.chars().enumerate() {
            if i > 0 && (int_part.len() - i) % 3 == 0 {
                out.push(config.thousand_separator);
            }
            out.push(digit);
        }
        if !frac_part.is_empty() {
            out.push(config.decimal_separator);
            out.push_str(frac_part);
        }
        out
    }

    /// Format a byte count as a human-readable size.
    ///
    /// The unit texts go through the translate engine as plural messages
    /// with a pre-formatted `{n}` override, so an embedder can localize
    /// them by registering a `core_messages` source.
    pub fn format_size(&self, t: &Translate, bytes: f64, verbose: bool) -> String {
        let base = self.size_format.base;
        let mut value = bytes;
        let mut unit = 0;
        while value >= base && unit < 4 {
            value /= base;
            unit += 1;
        }

        let factor = 10f64.powi(self.size_format.decimals as i32);
        let rounded = (value * factor).round() / factor;

        let message = match (unit, verbose) {
            (0, false) => "{n} B",
            (0, true) => "{n} byte|{n} bytes",
            (1, false) => "{n} KB",
            (1, true) => "{n} kilobyte|{n} kilobytes",
            (2, false) => "{n} MB",
            (2, true) => "{n} megabyte|{n} megabytes",
            (3, false) => "{n} GB",
            (3, true) => "{n} gigabyte|{n} gigabytes",
            (_, false) => "{n} TB",
            (_, true) => "{n} terabyte|{n} terabytes",
        };

        let params = Params::Counted(
            Value::Float(rounded),
            params! { "n" => rounded.to_string() },
        );
        t.translate(CORE_CATEGORY, message, params, None, None)
    }
}

/// HTML-encode the characters that matter in text content.
fn encode(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            other => out.push(other),
        }
    }
    out
}

/// Convert newlines (in any of the three conventions) to `<br />` tags.
fn newlines_to_breaks(text: &str) -> String {
    text.replace("\r\n", "<br />")
        .replace(['\n', '\r'], "<br />")
}

fn format_email(address: &str) -> String {
    let encoded = encode(address);
    format!("<a href=\"mailto:{encoded}\">{encoded}</a>")
}

fn format_image(url: &str) -> String {
    format!("<img src=\"{}\" alt=\"\" />", encode(url))
}

fn format_url(url: &str) -> String {
    let href = if url.contains("://") {
        url.to_string()
    } else {
        format!("http://{url}")
    };
    format!("<a href=\"{}\">{}</a>", encode(&href), encode(url))
}

/// Read a value as a point in time: unix seconds, or one of the common
/// datetime string shapes.
fn normalize_timestamp(value: &Value) -> Option<DateTime<Utc>> {
    match value {
        Value::Number(seconds) => DateTime::from_timestamp(*seconds, 0),
        Value::Float(seconds) => DateTime::from_timestamp(*seconds as i64, 0),
        Value::String(text) => {
            let text = text.trim();
            if let Ok(seconds) = text.parse::<i64>() {
                return DateTime::from_timestamp(seconds, 0);
            }
            if let Ok(moment) = DateTime::parse_from_rfc3339(text) {
                return Some(moment.with_timezone(&Utc));
            }
            if let Ok(naive) = NaiveDateTime::parse_from_str(text, "%Y-%m-%d %H:%M:%S") {
                return Some(naive.and_utc());
            }
            if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
                return date.and_hms_opt(0, 0, 0).map(|naive| naive.and_utc());
            }
            None
        }
    }
}
