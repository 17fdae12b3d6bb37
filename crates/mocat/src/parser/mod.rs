//! Plural-form expression parser.
//!
//! This module turns the C-like expression found in a catalog's
//! `Plural-Forms` header into an AST that the interpreter evaluates.

pub mod ast;
pub mod error;
mod expression;

pub use ast::*;
pub use error::ExpressionError;
pub use expression::{MAX_EXPRESSION_LEN, MAX_NESTING, parse_expression, parse_expression_bytes};
