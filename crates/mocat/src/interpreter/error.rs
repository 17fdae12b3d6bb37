//! Error types for plural-rule evaluation.

use thiserror::Error;

/// An error raised while evaluating a compiled plural rule.
///
/// These are the only failures possible once a catalog has decoded
/// successfully. They indicate a catalog whose rule disagrees with its data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// A `%` operation had a zero right-hand side.
    #[error("modulo by zero evaluating plural rule for n = {n}")]
    DivisionByZero { n: u64 },

    /// The rule selected a form the message does not have.
    #[error("plural rule selected form {index} for n = {n}, but message has {available} form(s)")]
    FormOutOfRange {
        n: u64,
        index: u64,
        available: usize,
    },
}
