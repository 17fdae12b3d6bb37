//! Miette diagnostic wrapper for plural-expression errors.
//!
//! Note: This module has an exception for `unused_assignments` because miette
//! derive macros read struct fields in generated code that rustc cannot track.
#![allow(unused_assignments)]

use miette::{Diagnostic, NamedSource, SourceSpan};
use mocat::ExpressionError;
use thiserror::Error;

/// A miette-compatible diagnostic for plural-expression errors.
///
/// Note: Fields are read by miette derive macros, not directly by code.
#[derive(Debug, Error, Diagnostic)]
#[error("invalid plural expression: {message}")]
#[diagnostic(code(mocat::expression))]
pub struct ExpressionDiagnostic {
    #[source_code]
    src: NamedSource<String>,

    #[label("error here")]
    span: SourceSpan,

    message: String,

    #[help]
    help: Option<String>,
}

impl ExpressionDiagnostic {
    /// Create a diagnostic pointing at the failing column of `expression`.
    pub fn from_expression_error(name: &str, expression: &str, err: &ExpressionError) -> Self {
        let message = match err {
            ExpressionError::Syntax { message, .. } => message.clone(),
            ExpressionError::TrailingInput { .. } => "unexpected trailing input".to_string(),
            other => other.to_string(),
        };

        // Columns are one-based; clamp so miette never sees an out-of-range span.
        let offset = err
            .column()
            .map_or(0, |column| column.saturating_sub(1))
            .min(expression.len());
        let length = usize::from(offset < expression.len());

        let help = match err {
            ExpressionError::TrailingInput { .. } => Some(
                "only n, integers, parentheses, %, comparisons, &&, || and ?: are supported"
                    .to_string(),
            ),
            ExpressionError::TooComplex { .. } => {
                Some("split the rule or remove redundant parentheses".to_string())
            }
            _ => None,
        };

        ExpressionDiagnostic {
            src: NamedSource::new(name, expression.to_string()),
            span: (offset, length).into(),
            message,
            help,
        }
    }
}
