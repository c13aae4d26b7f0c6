//! Placeholder substitution.
//!
//! Replaces `{token}` markers with values from a [`ParamBag`] in a single
//! left-to-right pass. Replacement text is never rescanned, so a value
//! containing `{other}` cannot trigger further substitution, and tokens
//! without a bag entry are left verbatim.

use crate::types::ParamBag;

/// Substitute every known `{token}` in `text` with its bag value.
///
/// # Example
///
/// ```
/// use lingo::{Params, params, substitute};
///
/// let bag = Params::Named(params! { "name" => "World" }).into_bag();
/// assert_eq!(substitute("Hello, {name}!", &bag), "Hello, World!");
/// assert_eq!(substitute("Hello, {nobody}!", &bag), "Hello, {nobody}!");
/// ```
pub fn substitute(text: &str, bag: &ParamBag) -> String {
    if bag.is_empty() {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let tail = &rest[open..];
        let Some(close) = tail.find('}') else {
            // No closing brace anywhere: the remainder is literal text.
            out.push_str(tail);
            return out;
        };
        let token = &tail[..=close];
        if let Some(value) = bag.replacement(token) {
            out.push_str(value);
            rest = &tail[close + 1..];
        } else {
            // Unknown token: emit the brace and let any nested `{` that
            // follows get its own chance.
            out.push('{');
            rest = &tail[1..];
        }
    }
    out.push_str(rest);
    out
}
