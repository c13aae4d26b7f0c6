pub mod choice;
pub mod error;
pub mod expr;
pub mod format;
pub mod plural;
pub mod source;
pub mod substitute;
pub mod translate;
pub mod types;

pub use choice::{ChoiceClause, choose, split_variants};
pub use error::{FormatError, ParamsError, SourceError};
pub use expr::{ChoiceExpr, ExprError, evaluate};
pub use format::{FormatType, Formatter};
pub use plural::{PluralRule, canonical_id, matching_rule, plural_rules};
pub use source::{Catalog, FileCatalog, MemoryCatalog, MessageSource};
pub use substitute::substitute;
pub use translate::Translate;
pub use types::{ParamBag, Params, Value};

/// Creates a `HashMap<String, Value>` from key-value pairs.
///
/// Values are automatically converted via `Into<Value>`, so you can pass
/// integers, floats, or strings directly. The result is the named-parameter
/// map accepted by [`Params::Named`] and [`Params::Counted`].
///
/// # Example
///
/// ```
/// use lingo::{params, Value};
///
/// let p = params! { "sign" => "+", "count" => 3 };
/// assert_eq!(p.len(), 2);
/// assert_eq!(p["sign"].as_str(), Some("+"));
/// assert_eq!(p["count"].as_number(), Some(3));
/// ```
#[macro_export]
macro_rules! params {
    {} => {
        ::std::collections::HashMap::<String, $crate::Value>::new()
    };
    { $($key:expr => $value:expr),+ $(,)? } => {
        {
            let mut map = ::std::collections::HashMap::<String, $crate::Value>::new();
            $(
                map.insert($key.to_string(), ::std::convert::Into::<$crate::Value>::into($value));
            )+
            map
        }
    };
}
