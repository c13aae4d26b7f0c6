//! The choice-expression mini-language.
//!
//! Plural selection is driven by boolean expressions over a numeric quantity
//! `n`, e.g. `n == 1`, `n > 1`, or full CLDR-style rules such as
//! `n % 10 == 1 && n % 100 != 11`. The same evaluator serves both the rule
//! lists shipped with the locale data and conditions embedded directly in
//! messages by authors, so the two never disagree on syntax.
//!
//! Evaluation is total: a malformed expression is `false`, never an error.
//! Translation must not fail because localized content is bad; the worst
//! case is that a message falls through to its default variant.

mod ast;
mod error;
mod parser;

pub use error::ExprError;

use ast::Expr;

/// A compiled choice expression.
///
/// Parsing once and reusing the tree is how the locale rule lists avoid
/// re-parsing on every call; one-shot callers can use [`evaluate`] instead.
///
/// # Example
///
/// ```
/// use lingo::ChoiceExpr;
///
/// let one = ChoiceExpr::parse("n % 10 == 1 && n % 100 != 11").unwrap();
/// assert!(one.matches(21.0));
/// assert!(!one.matches(11.0));
/// ```
#[derive(Debug, Clone)]
pub struct ChoiceExpr {
    source: Box<str>,
    root: Expr,
}

impl ChoiceExpr {
    /// Parse an expression, keeping its source text for display.
    pub fn parse(source: &str) -> Result<Self, ExprError> {
        let root = parser::parse_expr(source)?;
        Ok(ChoiceExpr {
            source: source.into(),
            root,
        })
    }

    /// Evaluate the expression against a concrete quantity.
    pub fn matches(&self, n: f64) -> bool {
        self.root.matches(n)
    }

    /// The original expression text.
    pub fn as_str(&self) -> &str {
        &self.source
    }
}

impl std::fmt::Display for ChoiceExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.source)
    }
}

/// Evaluate `expression` against `n`.
///
/// A bare integer literal (`"1"`) means `n == 1`. Anything that does not
/// parse evaluates to `false`.
///
/// # Example
///
/// ```
/// use lingo::evaluate;
///
/// assert!(evaluate("n > 1", 2.0));
/// assert!(evaluate("1", 1.0));
/// assert!(!evaluate("definitely not an expression", 1.0));
/// ```
pub fn evaluate(expression: &str, n: f64) -> bool {
    ChoiceExpr::parse(expression).is_ok_and(|expr| expr.matches(n))
}
