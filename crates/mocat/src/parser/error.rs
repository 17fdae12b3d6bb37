//! Parse error types for plural-form expressions.

use thiserror::Error;

/// An error that occurred while compiling a plural-form expression.
///
/// Every variant produced from input carries the unparsed remainder so the
/// offending text can be shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExpressionError {
    /// A token was missing or unrecognized.
    #[error("syntax error at column {column}: {message}; remaining: {remaining:?}")]
    Syntax {
        column: usize,
        message: String,
        remaining: String,
    },

    /// A complete expression parsed but input was left over.
    #[error("unexpected trailing input at column {column}: {remaining:?}")]
    TrailingInput { column: usize, remaining: String },

    /// The expression exceeds the length or nesting limit.
    #[error("expression too complex (limit {limit})")]
    TooComplex { limit: usize },

    /// Invalid UTF-8 in input.
    #[error("invalid UTF-8 in input")]
    InvalidUtf8,
}

impl ExpressionError {
    /// The unparsed input at the point of failure, if any.
    pub fn remaining(&self) -> Option<&str> {
        match self {
            ExpressionError::Syntax { remaining, .. }
            | ExpressionError::TrailingInput { remaining, .. } => Some(remaining),
            ExpressionError::TooComplex { .. } | ExpressionError::InvalidUtf8 => None,
        }
    }

    /// One-based column of the failure, if known.
    pub fn column(&self) -> Option<usize> {
        match self {
            ExpressionError::Syntax { column, .. }
            | ExpressionError::TrailingInput { column, .. } => Some(*column),
            ExpressionError::TooComplex { .. } | ExpressionError::InvalidUtf8 => None,
        }
    }
}
