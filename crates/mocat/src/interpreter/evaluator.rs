//! Tree-walking evaluator for plural-form expressions.

use crate::interpreter::EvalError;
use crate::parser::ast::{BinaryOp, Expr};

/// Evaluate `expr` with the count variable bound to `n`.
///
/// Comparison and logical operators yield 1 or 0; any non-zero value is
/// true. `&&`, `||` and `?:` only evaluate the operands they need.
pub fn evaluate(expr: &Expr, n: u64) -> Result<u64, EvalError> {
    match expr {
        Expr::Count => Ok(n),
        Expr::Literal(value) => Ok(*value),
        Expr::Conditional {
            condition,
            then,
            otherwise,
        } => {
            if evaluate(condition, n)? != 0 {
                evaluate(then, n)
            } else {
                evaluate(otherwise, n)
            }
        }
        Expr::Binary { op, lhs, rhs } => eval_binary(*op, lhs, rhs, n),
    }
}

fn eval_binary(op: BinaryOp, lhs: &Expr, rhs: &Expr, n: u64) -> Result<u64, EvalError> {
    let lhs = evaluate(lhs, n)?;
    let value = match op {
        BinaryOp::And => truth(lhs != 0 && evaluate(rhs, n)? != 0),
        BinaryOp::Or => truth(lhs != 0 || evaluate(rhs, n)? != 0),
        BinaryOp::Modulo => lhs
            .checked_rem(evaluate(rhs, n)?)
            .ok_or(EvalError::DivisionByZero { n })?,
        BinaryOp::Less => truth(lhs < evaluate(rhs, n)?),
        BinaryOp::Greater => truth(lhs > evaluate(rhs, n)?),
        BinaryOp::LessEqual => truth(lhs <= evaluate(rhs, n)?),
        BinaryOp::GreaterEqual => truth(lhs >= evaluate(rhs, n)?),
        BinaryOp::Equal => truth(lhs == evaluate(rhs, n)?),
        BinaryOp::NotEqual => truth(lhs != evaluate(rhs, n)?),
    };
    Ok(value)
}

fn truth(value: bool) -> u64 {
    u64::from(value)
}
