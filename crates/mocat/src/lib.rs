//! Lookup of translated strings from binary gettext message catalogs.
//!
//! - [`parser`] compiles the plural-form expressions found in catalog headers.
//! - [`interpreter`] evaluates them as [`PluralRule`]s.
//! - [`catalog`] decodes `.mo` files into immutable [`Catalog`]s.
//! - [`registry`] caches catalogs per (domain, locale) and hands out
//!   [`Translator`]s.

pub mod catalog;
pub mod interpreter;
pub mod parser;
pub mod registry;

pub use catalog::{
    Catalog, DecodeError, FormatError, Header, LoadError, Message, catalog_path, fallback_plural,
    load_catalog,
};
pub use interpreter::{EvalError, PluralRule};
pub use parser::{Expr, ExpressionError, parse_expression};
pub use registry::{CatalogKey, CatalogLoader, MoFileLoader, Registry, RegistryConfig, Translator};
