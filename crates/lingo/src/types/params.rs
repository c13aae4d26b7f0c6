//! Caller-supplied parameter shapes and their normalized form.
//!
//! Callers hand the translator one of a few raw shapes ([`Params`]): nothing,
//! a bare scalar, a positional list, a named map, or a quantity plus named
//! overrides. Before substitution these are normalized into a [`ParamBag`]:
//! a distinguished plural quantity plus a token-to-replacement map in which
//! every token is stored wrapped as `{token}`.

use std::collections::HashMap;

use crate::error::ParamsError;
use crate::types::Value;

/// Raw parameters accepted by the translate entry point.
///
/// # Example
///
/// ```
/// use lingo::{Params, params};
///
/// // A bare number is the plural quantity (and `{n}`).
/// let bag = Params::from(5).into_bag();
/// assert_eq!(bag.replacement("{n}"), Some("5"));
///
/// // A quantity with named overrides: quantity still drives plural
/// // selection while an explicit `{n}` wins in the output.
/// let bag = Params::Counted(1200.into(), params! { "n" => "1,200" }).into_bag();
/// assert_eq!(bag.numeric_quantity(), Some(1200.0));
/// assert_eq!(bag.replacement("{n}"), Some("1,200"));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Params {
    /// No substitutions at all.
    #[default]
    None,

    /// A single bare value: the plural quantity, exposed as `{n}`.
    Scalar(Value),

    /// A positional list. Entry 0 is the plural quantity; remaining entries
    /// become `{1}`, `{2}`, … tokens.
    List(Vec<Value>),

    /// Named placeholder substitutions only; no plural quantity.
    Named(HashMap<String, Value>),

    /// A plural quantity plus named placeholder overrides.
    Counted(Value, HashMap<String, Value>),
}

impl Params {
    /// Normalize into a [`ParamBag`].
    ///
    /// The quantity-derived `{n}` entry is written first and named entries
    /// are layered on top, so an explicit `{n}` key always wins while the
    /// raw quantity keeps driving plural-branch selection.
    pub fn into_bag(self) -> ParamBag {
        let mut bag = ParamBag::default();
        match self {
            Params::None => {}
            Params::Scalar(value) => bag.set_quantity(value),
            Params::List(values) => {
                for (index, value) in values.into_iter().enumerate() {
                    if index == 0 {
                        bag.set_quantity(value);
                    } else {
                        bag.insert(index.to_string(), value.to_string());
                    }
                }
            }
            Params::Named(map) => bag.layer(map),
            Params::Counted(value, map) => {
                bag.set_quantity(value);
                bag.layer(map);
            }
        }
        bag
    }
}

impl From<i32> for Params {
    fn from(n: i32) -> Self {
        Params::Scalar(n.into())
    }
}

impl From<i64> for Params {
    fn from(n: i64) -> Self {
        Params::Scalar(n.into())
    }
}

impl From<u64> for Params {
    fn from(n: u64) -> Self {
        Params::Scalar(n.into())
    }
}

impl From<usize> for Params {
    fn from(n: usize) -> Self {
        Params::Scalar(n.into())
    }
}

impl From<f64> for Params {
    fn from(n: f64) -> Self {
        Params::Scalar(n.into())
    }
}

impl From<&str> for Params {
    fn from(s: &str) -> Self {
        Params::Scalar(s.into())
    }
}

impl From<String> for Params {
    fn from(s: String) -> Self {
        Params::Scalar(s.into())
    }
}

impl From<Value> for Params {
    fn from(value: Value) -> Self {
        Params::Scalar(value)
    }
}

impl From<Vec<Value>> for Params {
    fn from(values: Vec<Value>) -> Self {
        Params::List(values)
    }
}

impl From<HashMap<String, Value>> for Params {
    fn from(map: HashMap<String, Value>) -> Self {
        Params::Named(map)
    }
}

impl From<(Value, HashMap<String, Value>)> for Params {
    fn from((quantity, map): (Value, HashMap<String, Value>)) -> Self {
        Params::Counted(quantity, map)
    }
}

/// Convert an untyped JSON value into [`Params`].
///
/// This is the one dynamic boundary where an invalid parameter shape can
/// reach the engine; anything that is not a scalar, an array of scalars, or
/// an object with scalar values is rejected as a contract violation.
impl TryFrom<serde_json::Value> for Params {
    type Error = ParamsError;

    fn try_from(value: serde_json::Value) -> Result<Self, Self::Error> {
        match value {
            serde_json::Value::Null => Ok(Params::None),
            serde_json::Value::Array(items) => {
                let values = items
                    .into_iter()
                    .map(scalar_value)
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(Params::List(values))
            }
            serde_json::Value::Object(entries) => {
                let mut map = HashMap::new();
                for (key, value) in entries {
                    map.insert(key, scalar_value(value)?);
                }
                Ok(Params::Named(map))
            }
            scalar => Ok(Params::Scalar(scalar_value(scalar)?)),
        }
    }
}

/// Convert a scalar JSON value to a [`Value`], rejecting nested structures.
fn scalar_value(value: serde_json::Value) -> Result<Value, ParamsError> {
    match value {
        serde_json::Value::String(s) => Ok(Value::String(s)),
        serde_json::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(Value::Number(i))
            } else {
                Ok(Value::Float(n.as_f64().unwrap_or_default()))
            }
        }
        serde_json::Value::Bool(b) => Ok(Value::String(b.to_string())),
        other => Err(ParamsError::InvalidShape {
            found: json_kind(&other).to_string(),
        }),
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

/// Normalized parameters: the plural quantity plus a `{token}` replacement
/// map.
///
/// Tokens are always stored wrapped in braces; [`ParamBag::insert`] accepts
/// bare (`"sign"`) and pre-wrapped (`"{sign}"`) keys alike.
#[derive(Debug, Clone, Default)]
pub struct ParamBag {
    quantity: Option<Value>,
    replacements: HashMap<String, String>,
}

impl ParamBag {
    /// The raw quantity value, if one was supplied.
    pub fn quantity(&self) -> Option<&Value> {
        self.quantity.as_ref()
    }

    /// The quantity coerced to a number, for plural-rule evaluation.
    pub fn numeric_quantity(&self) -> Option<f64> {
        self.quantity.as_ref().and_then(Value::as_quantity)
    }

    /// Look up a replacement for a wrapped token such as `"{sign}"`.
    pub fn replacement(&self, token: &str) -> Option<&str> {
        self.replacements.get(token).map(String::as_str)
    }

    /// True when the bag holds no replacements.
    pub fn is_empty(&self) -> bool {
        self.replacements.is_empty()
    }

    /// Insert a replacement, wrapping the token in braces when needed.
    pub fn insert(&mut self, token: impl AsRef<str>, replacement: String) {
        self.replacements
            .insert(wrap_token(token.as_ref()), replacement);
    }

    /// Record the plural quantity and pre-populate `{n}` with its display
    /// form. Later [`ParamBag::layer`] calls may override `{n}`.
    fn set_quantity(&mut self, value: Value) {
        self.insert("n", value.to_string());
        self.quantity = Some(value);
    }

    /// Layer named entries on top of the current replacements.
    fn layer(&mut self, map: HashMap<String, Value>) {
        let mut entries: Vec<(String, Value)> = map.into_iter().collect();
        entries.sort_by(|a, b| a.0.cmp(&b.0));
        for (token, value) in entries {
            self.insert(token, value.to_string());
        }
    }
}

/// Wrap a bare token in braces; already-wrapped tokens pass through.
fn wrap_token(token: &str) -> String {
    if token.starts_with('{') && token.ends_with('}') {
        token.to_string()
    } else {
        format!("{{{token}}}")
    }
}
