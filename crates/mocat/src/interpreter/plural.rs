//! Compiled plural selectors.
//!
//! A catalog's `Plural-Forms` header carries a C-like expression mapping a
//! count to the index of the translation variant to use. `PluralRule` holds
//! the parsed form of that expression.

use std::fmt;

use crate::interpreter::EvalError;
use crate::interpreter::evaluator::evaluate;
use crate::parser::{BinaryOp, Expr, ExpressionError, parse_expression, parse_expression_bytes};

/// A compiled plural selector: count in, variant index out.
///
/// The default rule is the two-form Germanic rule `n != 1`: index 0 for
/// exactly one, index 1 otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluralRule {
    expr: Expr,
}

impl Default for PluralRule {
    fn default() -> Self {
        Self {
            expr: Expr::binary(BinaryOp::NotEqual, Expr::Count, Expr::Literal(1)),
        }
    }
}

impl PluralRule {
    /// Compile an expression such as `n == 1 ? 0 : 1`.
    ///
    /// # Examples
    ///
    /// ```
    /// use mocat::PluralRule;
    ///
    /// let rule = PluralRule::compile("n % 10").unwrap();
    /// assert_eq!(rule.select(32).unwrap(), 2);
    /// ```
    pub fn compile(source: &str) -> Result<Self, ExpressionError> {
        Ok(Self {
            expr: parse_expression(source)?,
        })
    }

    /// Compile an expression taken directly from catalog bytes.
    pub fn compile_bytes(source: &[u8]) -> Result<Self, ExpressionError> {
        Ok(Self {
            expr: parse_expression_bytes(source)?,
        })
    }

    /// Wrap an already-built expression.
    pub fn from_expr(expr: Expr) -> Self {
        Self { expr }
    }

    /// The parsed expression.
    pub fn expression(&self) -> &Expr {
        &self.expr
    }

    /// Evaluate the rule for `n`, returning the raw selector output.
    pub fn select(&self, n: u64) -> Result<u64, EvalError> {
        evaluate(&self.expr, n)
    }

    /// Evaluate the rule for `n` and check the result against a variant
    /// list of length `available`.
    pub fn select_index(&self, n: u64, available: usize) -> Result<usize, EvalError> {
        let index = self.select(n)?;
        usize::try_from(index)
            .ok()
            .filter(|&i| i < available)
            .ok_or(EvalError::FormOutOfRange {
                n,
                index,
                available,
            })
    }
}

impl fmt::Display for PluralRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.expr.fmt(f)
    }
}
