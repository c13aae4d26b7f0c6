//! Parse error for choice expressions.

use thiserror::Error;

/// An error that occurred while parsing a choice expression.
///
/// During plural selection these are swallowed (a malformed condition is
/// simply `false`); the type exists so tooling can show authors what went
/// wrong.
#[derive(Debug, Error)]
pub enum ExprError {
    /// A syntax error with column information.
    #[error("syntax error at column {column}: {message}")]
    Syntax { column: usize, message: String },
}
