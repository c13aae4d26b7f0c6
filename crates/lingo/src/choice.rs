//! Plural-variant splitting and choice selection.
//!
//! A translatable message can pack several grammatical-number variants into
//! one string, separated by `|`. A variant may carry its own condition as
//! `condition#text`; a message whose variants carry no conditions is zipped
//! against the locale's plural-rule list instead.
//!
//! There is no escaping syntax: a literal `|` inside a variant is not
//! representable. That is a documented limitation of the format, not
//! something this module tries to repair.

use crate::expr::evaluate;
use crate::plural::PluralRule;

/// One `condition#text` clause of a plural message.
///
/// `condition` is `None` when the variant has no embedded `#`; such a
/// variant is either zipped positionally against the locale rules or, in an
/// explicit-condition message, reachable only as the trailing default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChoiceClause<'a> {
    pub condition: Option<&'a str>,
    pub text: &'a str,
}

impl<'a> ChoiceClause<'a> {
    /// Split a variant at its first `#` into condition and display text.
    pub fn parse(variant: &'a str) -> Self {
        match variant.split_once('#') {
            Some((condition, text)) => ChoiceClause {
                condition: Some(condition),
                text,
            },
            None => ChoiceClause {
                condition: None,
                text: variant,
            },
        }
    }
}

/// Split a message into its plural variants.
///
/// Splitting is strict on `|`; a non-empty message always yields at least
/// one variant (`split_variants("x")` is `["x"]`).
pub fn split_variants(message: &str) -> Vec<&str> {
    message.split('|').collect()
}

/// Select the variant of `message` for quantity `n` under the locale's
/// plural `rules`.
///
/// Follows the resolution policy:
/// - a message without `|` is returned whole;
/// - if no variant embeds a condition, `min(variants, rules)` clauses are
///   zipped in order against the rule list — surplus variants and surplus
///   rules are both silently ignored;
/// - if any variant embeds a condition, conditions are taken as written and
///   the rule list is not consulted;
/// - the first matching clause wins; when nothing matches the last
///   considered clause serves as the default. Selection never fails.
///
/// `n` is `None` when the caller's quantity was not numeric; no condition
/// can match then, so the default clause is chosen.
pub fn choose<'a>(message: &'a str, n: Option<f64>, rules: &[PluralRule]) -> &'a str {
    if !message.contains('|') {
        return message;
    }

    let clauses: Vec<ChoiceClause<'a>> = split_variants(message)
        .into_iter()
        .map(ChoiceClause::parse)
        .collect();

    if clauses.iter().any(|clause| clause.condition.is_some()) {
        choose_explicit(&clauses, n)
    } else {
        choose_zipped(&clauses, n, rules)
    }
}

/// Selection for messages that embed their own conditions.
fn choose_explicit<'a>(clauses: &[ChoiceClause<'a>], n: Option<f64>) -> &'a str {
    if let Some(n) = n {
        for clause in clauses {
            if let Some(condition) = clause.condition
                && evaluate(condition, n)
            {
                return clause.text;
            }
        }
    }
    // No condition matched (or the quantity was not numeric): the last
    // clause is the default bucket.
    clauses.last().map(|clause| clause.text).unwrap_or_default()
}

/// Selection for plain variant lists zipped against the locale rules.
fn choose_zipped<'a>(clauses: &[ChoiceClause<'a>], n: Option<f64>, rules: &[PluralRule]) -> &'a str {
    let count = clauses.len().min(rules.len());
    if count == 0 {
        return clauses.first().map(|clause| clause.text).unwrap_or_default();
    }
    if let Some(n) = n {
        for (clause, rule) in clauses.iter().zip(rules.iter()).take(count) {
            if rule.matches(n) {
                return clause.text;
            }
        }
    }
    // The last zipped clause doubles as the default, regardless of which
    // rule it nominally belongs to.
    clauses[count - 1].text
}
