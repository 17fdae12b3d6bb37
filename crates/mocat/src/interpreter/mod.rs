//! Plural-rule interpreter.
//!
//! This module evaluates parsed plural-form expressions and wraps them as
//! `PluralRule`, the selector each catalog uses to pick a translation variant.

mod error;
mod evaluator;
mod plural;

pub use error::EvalError;
pub use evaluator::evaluate;
pub use plural::PluralRule;
