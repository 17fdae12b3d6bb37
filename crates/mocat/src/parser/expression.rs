//! Plural-form expression parser using winnow.
//!
//! Grammar, loosest binding first:
//!
//! ```text
//! conditional := or ( "?" conditional ":" conditional )?
//! or          := and ( "||" and )*
//! and         := equality ( "&&" equality )*
//! equality    := relational ( ( "==" | "!=" ) relational )?
//! relational  := modulo ( ( "<=" | ">=" | "<" | ">" ) modulo )?
//! modulo      := primary ( "%" primary )*
//! primary     := "n" | "(" conditional ")" | digits
//! ```
//!
//! Only the space character is accepted between tokens. Equality and
//! relational operators do not chain; `a == b == c` leaves `== c` as
//! trailing input.

use std::str::from_utf8;

use super::ast::{BinaryOp, Expr};
use super::error::ExpressionError;
use winnow::ascii::digit1;
use winnow::combinator::{alt, cut_err, delimited, opt, preceded, terminated};
use winnow::error::{ContextError, ErrMode, StrContext, StrContextValue};
use winnow::prelude::*;
use winnow::token::take_while;

/// Longest expression source accepted, in bytes.
pub const MAX_EXPRESSION_LEN: usize = 1024;

/// Deepest parenthesis or conditional nesting accepted.
pub const MAX_NESTING: usize = 64;

/// Parse a plural-form expression into an AST.
///
/// The whole input must be consumed; trailing characters other than spaces
/// are an error.
pub fn parse_expression(input: &str) -> Result<Expr, ExpressionError> {
    check_complexity(input)?;

    let mut remaining = input;
    match terminated(conditional, spaces).parse_next(&mut remaining) {
        Ok(expr) => {
            if remaining.is_empty() {
                Ok(expr)
            } else {
                Err(ExpressionError::TrailingInput {
                    column: column(input, remaining),
                    remaining: remaining.to_string(),
                })
            }
        }
        Err(e) => Err(ExpressionError::Syntax {
            column: column(input, remaining),
            message: describe(e),
            remaining: remaining.to_string(),
        }),
    }
}

/// Parse a plural-form expression given as raw catalog bytes.
pub fn parse_expression_bytes(input: &[u8]) -> Result<Expr, ExpressionError> {
    let text = from_utf8(input).map_err(|_| ExpressionError::InvalidUtf8)?;
    parse_expression(text)
}

/// Reject inputs whose recursion depth could exhaust the stack.
fn check_complexity(input: &str) -> Result<(), ExpressionError> {
    if input.len() > MAX_EXPRESSION_LEN {
        return Err(ExpressionError::TooComplex {
            limit: MAX_EXPRESSION_LEN,
        });
    }

    let mut depth = 0usize;
    let mut deepest = 0usize;
    let mut conditionals = 0usize;
    for byte in input.bytes() {
        match byte {
            b'(' => {
                depth += 1;
                deepest = deepest.max(depth);
            }
            b')' => depth = depth.saturating_sub(1),
            b'?' => conditionals += 1,
            _ => {}
        }
    }

    if deepest > MAX_NESTING || conditionals > MAX_NESTING {
        return Err(ExpressionError::TooComplex { limit: MAX_NESTING });
    }
    Ok(())
}

/// One-based column of `remaining` within `original`.
fn column(original: &str, remaining: &str) -> usize {
    original.len() - remaining.len() + 1
}

/// Flatten a winnow error into a one-line message.
fn describe(error: ErrMode<ContextError>) -> String {
    let message = match error.into_inner() {
        Ok(inner) => inner.to_string(),
        Err(other) => other.to_string(),
    };
    let message = message.lines().collect::<Vec<_>>().join("; ");
    if message.is_empty() {
        "unexpected input".to_string()
    } else {
        message
    }
}

/// Skip spaces. Tabs and newlines are not whitespace in this grammar.
fn spaces(input: &mut &str) -> ModalResult<()> {
    take_while(0.., ' ').void().parse_next(input)
}

/// Match `literal` after optional spaces.
fn token<'i>(literal: &'static str) -> impl Parser<&'i str, &'i str, ErrMode<ContextError>> {
    preceded(spaces, literal)
}

/// Parse `cond ? then : otherwise`, right-associative.
fn conditional(input: &mut &str) -> ModalResult<Expr> {
    let condition = or_expr(input)?;
    if opt(token("?")).parse_next(input)?.is_none() {
        return Ok(condition);
    }

    let then = conditional(input)?;
    cut_err(token(":"))
        .context(StrContext::Expected(StrContextValue::CharLiteral(':')))
        .parse_next(input)?;
    let otherwise = conditional(input)?;
    Ok(Expr::conditional(condition, then, otherwise))
}

/// Parse a left-associative chain of one operator.
fn chain(
    input: &mut &str,
    operand: fn(&mut &str) -> ModalResult<Expr>,
    symbol: &'static str,
    op: BinaryOp,
) -> ModalResult<Expr> {
    let mut lhs = operand(input)?;
    while opt(token(symbol)).parse_next(input)?.is_some() {
        let rhs = operand(input)?;
        lhs = Expr::binary(op, lhs, rhs);
    }
    Ok(lhs)
}

fn or_expr(input: &mut &str) -> ModalResult<Expr> {
    chain(input, and_expr, "||", BinaryOp::Or)
}

fn and_expr(input: &mut &str) -> ModalResult<Expr> {
    chain(input, equality, "&&", BinaryOp::And)
}

/// Parse `a == b` or `a != b`. Does not chain.
fn equality(input: &mut &str) -> ModalResult<Expr> {
    let lhs = relational(input)?;
    let op = opt(preceded(
        spaces,
        alt((
            "==".value(BinaryOp::Equal),
            "!=".value(BinaryOp::NotEqual),
        )),
    ))
    .parse_next(input)?;

    match op {
        Some(op) => {
            let rhs = relational(input)?;
            Ok(Expr::binary(op, lhs, rhs))
        }
        None => Ok(lhs),
    }
}

/// Parse `a < b` and friends. Does not chain.
fn relational(input: &mut &str) -> ModalResult<Expr> {
    let lhs = modulo(input)?;
    // Two-character operators first so `<=` is not read as `<`.
    let op = opt(preceded(
        spaces,
        alt((
            "<=".value(BinaryOp::LessEqual),
            ">=".value(BinaryOp::GreaterEqual),
            "<".value(BinaryOp::Less),
            ">".value(BinaryOp::Greater),
        )),
    ))
    .parse_next(input)?;

    match op {
        Some(op) => {
            let rhs = modulo(input)?;
            Ok(Expr::binary(op, lhs, rhs))
        }
        None => Ok(lhs),
    }
}

fn modulo(input: &mut &str) -> ModalResult<Expr> {
    chain(input, primary, "%", BinaryOp::Modulo)
}

/// Parse `n`, a parenthesized expression, or a number.
fn primary(input: &mut &str) -> ModalResult<Expr> {
    preceded(spaces, alt(('n'.value(Expr::Count), parenthesized, literal)))
        .context(StrContext::Expected(StrContextValue::Description(
            "`n`, `(` or a number",
        )))
        .parse_next(input)
}

fn parenthesized(input: &mut &str) -> ModalResult<Expr> {
    delimited(
        '(',
        conditional,
        cut_err(token(")")).context(StrContext::Expected(StrContextValue::CharLiteral(')'))),
    )
    .parse_next(input)
}

/// Parse an unsigned decimal literal. Leading zeros are allowed.
fn literal(input: &mut &str) -> ModalResult<Expr> {
    digit1
        .try_map(str::parse::<u64>)
        .map(Expr::Literal)
        .context(StrContext::Label("number"))
        .parse_next(input)
}
