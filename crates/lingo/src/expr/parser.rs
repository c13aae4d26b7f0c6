//! Choice-expression parser using winnow.
//!
//! Recursive descent over the grammar (whitespace-insensitive):
//!
//! ```text
//! expr       := and ( "||" and )*
//! and        := unary ( "&&" unary )*
//! unary      := "!" unary | comparison
//! comparison := modulo ( relop modulo | ["not"] "in" ranges )?
//! modulo     := atom ( "%" atom )*
//! atom       := number | "n" | "true" | "false" | "(" expr ")"
//! ranges     := range ( "," range )*
//! range      := number [ ".." number ]
//! ```

use winnow::combinator::{alt, delimited, opt, preceded, repeat, separated, terminated};
use winnow::prelude::*;
use winnow::token::take_while;

use super::ast::{CmpOp, Expr, NumberRange};
use super::error::ExprError;

/// Parse a complete expression string into an AST.
pub fn parse_expr(source: &str) -> Result<Expr, ExprError> {
    let mut remaining = source;
    match terminated(expr, ws).parse_next(&mut remaining) {
        Ok(node) => {
            if remaining.is_empty() {
                Ok(node)
            } else {
                Err(ExprError::Syntax {
                    column: column_of(source, remaining),
                    message: format!(
                        "unexpected character: '{}'",
                        remaining.chars().next().unwrap_or('?')
                    ),
                })
            }
        }
        Err(e) => Err(ExprError::Syntax {
            column: column_of(source, remaining),
            message: format!("parse error: {e}"),
        }),
    }
}

/// Calculate a 1-based column from original and remaining input.
fn column_of(original: &str, remaining: &str) -> usize {
    original.len() - remaining.len() + 1
}

/// Parse optional whitespace.
fn ws(input: &mut &str) -> ModalResult<()> {
    take_while(0.., |c: char| c.is_ascii_whitespace())
        .void()
        .parse_next(input)
}

/// Parse an `||`-separated disjunction.
fn expr(input: &mut &str) -> ModalResult<Expr> {
    let first = and_expr(input)?;
    let rest: Vec<Expr> = repeat(0.., preceded((ws, "||", ws), and_expr)).parse_next(input)?;
    if rest.is_empty() {
        Ok(first)
    } else {
        let mut terms = vec![first];
        terms.extend(rest);
        Ok(Expr::Or(terms))
    }
}

/// Parse an `&&`-separated conjunction.
fn and_expr(input: &mut &str) -> ModalResult<Expr> {
    let first = unary(input)?;
    let rest: Vec<Expr> = repeat(0.., preceded((ws, "&&", ws), unary)).parse_next(input)?;
    if rest.is_empty() {
        Ok(first)
    } else {
        let mut terms = vec![first];
        terms.extend(rest);
        Ok(Expr::And(terms))
    }
}

/// Parse an optionally `!`-negated comparison.
fn unary(input: &mut &str) -> ModalResult<Expr> {
    let _ = ws(input)?;
    if opt('!').parse_next(input)?.is_some() {
        let inner = unary(input)?;
        return Ok(Expr::Not(Box::new(inner)));
    }
    comparison(input)
}

/// Parse a comparison: `modulo relop modulo`, `modulo [not] in ranges`, or
/// a bare numeric term.
fn comparison(input: &mut &str) -> ModalResult<Expr> {
    let left = modulo(input)?;
    let _ = ws(input)?;

    if let Some(op) = opt(cmp_op).parse_next(input)? {
        let _ = ws(input)?;
        let right = modulo(input)?;
        return Ok(Expr::Cmp(Box::new(left), op, Box::new(right)));
    }

    let negated = opt(terminated(keyword("not"), ws))
        .parse_next(input)?
        .is_some();
    if opt(keyword("in")).parse_next(input)?.is_some() {
        let _ = ws(input)?;
        let ranges = ranges(input)?;
        return Ok(Expr::In {
            value: Box::new(left),
            ranges,
            negated,
        });
    }
    if negated {
        // "not" without a following "in"
        return Err(winnow::error::ErrMode::Backtrack(
            winnow::error::ContextError::new(),
        ));
    }

    Ok(left)
}

/// Parse a comparison operator. Two-character operators first.
fn cmp_op(input: &mut &str) -> ModalResult<CmpOp> {
    alt((
        "==".value(CmpOp::Eq),
        "!=".value(CmpOp::Ne),
        ">=".value(CmpOp::Ge),
        "<=".value(CmpOp::Le),
        ">".value(CmpOp::Gt),
        "<".value(CmpOp::Lt),
    ))
    .parse_next(input)
}

/// Parse a `%`-chain of atoms, folded left.
fn modulo(input: &mut &str) -> ModalResult<Expr> {
    let first = atom(input)?;
    let rest: Vec<Expr> = repeat(0.., preceded((ws, '%', ws), atom)).parse_next(input)?;
    Ok(rest
        .into_iter()
        .fold(first, |acc, rhs| Expr::Mod(Box::new(acc), Box::new(rhs))))
}

/// Parse an atom: number, `n`, boolean literal, or parenthesized expression.
fn atom(input: &mut &str) -> ModalResult<Expr> {
    let _ = ws(input)?;
    alt((
        number.map(Expr::Literal),
        delimited(('(', ws), expr, (ws, ')')),
        word_atom,
    ))
    .parse_next(input)
}

/// Parse the word atoms `n`, `true`, and `false`.
fn word_atom(input: &mut &str) -> ModalResult<Expr> {
    let start = *input;
    let w = word(input)?;
    match w {
        "n" => Ok(Expr::Quantity),
        "true" => Ok(Expr::Bool(true)),
        "false" => Ok(Expr::Bool(false)),
        _ => {
            *input = start;
            Err(winnow::error::ErrMode::Backtrack(
                winnow::error::ContextError::new(),
            ))
        }
    }
}

/// Parse a decimal number with an optional fraction part.
fn number(input: &mut &str) -> ModalResult<f64> {
    let whole: &str = take_while(1.., |c: char| c.is_ascii_digit()).parse_next(input)?;
    let frac: Option<(char, &str)> =
        opt(('.', take_while(1.., |c: char| c.is_ascii_digit()))).parse_next(input)?;
    let text = match frac {
        Some((_, digits)) => format!("{whole}.{digits}"),
        None => whole.to_string(),
    };
    text.parse::<f64>().map_err(|_| {
        winnow::error::ErrMode::Backtrack(winnow::error::ContextError::new())
    })
}

/// Parse a comma-separated list of ranges.
fn ranges(input: &mut &str) -> ModalResult<Vec<NumberRange>> {
    separated(1.., range, (ws, ',', ws)).parse_next(input)
}

/// Parse `lo..hi` or a single number.
fn range(input: &mut &str) -> ModalResult<NumberRange> {
    let lo = number(input)?;
    let hi: Option<f64> = opt(preceded("..", number)).parse_next(input)?;
    Ok(NumberRange {
        lo,
        hi: hi.unwrap_or(lo),
    })
}

/// Parse a run of letters.
fn word<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    take_while(1.., |c: char| c.is_ascii_alphabetic()).parse_next(input)
}

/// Parse a specific keyword, backtracking on any other word.
fn keyword(expected: &'static str) -> impl FnMut(&mut &str) -> ModalResult<&'static str> {
    move |input: &mut &str| {
        let start = *input;
        let w = word(input)?;
        if w == expected {
            Ok(expected)
        } else {
            *input = start;
            Err(winnow::error::ErrMode::Backtrack(
                winnow::error::ContextError::new(),
            ))
        }
    }
}
