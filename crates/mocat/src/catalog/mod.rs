//! Decoded message catalogs.
//!
//! A `Catalog` holds every message of one (domain, locale) pair together with
//! the plural rule from its header. It is immutable once decoded and can be
//! shared across threads without locking.
//!
//! Lookups never fail for unknown messages: the source text is returned
//! unchanged, which is how an untranslated program behaves.

mod decode;
mod error;
mod header;

use std::borrow::Cow;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

pub use error::{DecodeError, FormatError, LoadError};
pub use header::Header;

use crate::interpreter::{EvalError, PluralRule};

/// singular -> plural ("" for singular-only) -> variants.
pub(crate) type Messages = HashMap<Vec<u8>, HashMap<Vec<u8>, Vec<Vec<u8>>>>;

/// An immutable, decoded message catalog.
///
/// # Example
///
/// ```
/// use mocat::Catalog;
///
/// let catalog = Catalog::new();
/// assert_eq!(catalog.singular("Open"), "Open");
/// assert_eq!(catalog.plural("file", "files", 2).unwrap(), "files");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    messages: Messages,
    rule: PluralRule,
    header: Header,
}

/// One catalog entry, as yielded by [`Catalog::messages`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Message<'a> {
    pub singular: &'a [u8],
    /// Empty for singular-only entries.
    pub plural: &'a [u8],
    pub variants: &'a [Vec<u8>],
}

impl Catalog {
    /// Create an empty catalog. Every lookup falls back to the source text.
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode a catalog from the raw bytes of a `.mo` file.
    pub fn from_bytes(data: &[u8]) -> Result<Self, DecodeError> {
        decode::decode(data)
    }

    pub(crate) fn from_parts(messages: Messages, rule: PluralRule, header: Header) -> Self {
        Self {
            messages,
            rule,
            header,
        }
    }

    /// The plural rule used to select variants.
    pub fn plural_rule(&self) -> &PluralRule {
        &self.rule
    }

    /// The metadata header, empty if the catalog has none.
    pub fn header(&self) -> &Header {
        &self.header
    }

    /// Number of distinct message keys, including the header entry.
    pub fn len(&self) -> usize {
        self.messages.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Whether `(singular, plural)` has a translation. Use `""` as `plural`
    /// for singular-only messages.
    pub fn contains(&self, singular: &str, plural: &str) -> bool {
        self.variants(singular.as_bytes(), plural.as_bytes())
            .is_some()
    }

    /// All variants stored for a message key.
    pub fn variants(&self, singular: &[u8], plural: &[u8]) -> Option<&[Vec<u8>]> {
        self.messages
            .get(singular)
            .and_then(|plurals| plurals.get(plural))
            .map(Vec::as_slice)
    }

    /// Iterate over every entry in unspecified order.
    pub fn messages(&self) -> impl Iterator<Item = Message<'_>> {
        self.messages.iter().flat_map(|(singular, plurals)| {
            plurals.iter().map(move |(plural, variants)| Message {
                singular,
                plural,
                variants,
            })
        })
    }

    /// Translate a singular message as raw bytes.
    pub fn singular_bytes<'a>(&'a self, msg: &'a [u8]) -> &'a [u8] {
        self.variants(msg, b"")
            .and_then(<[Vec<u8>]>::first)
            .map_or(msg, Vec::as_slice)
    }

    /// Translate a plural message as raw bytes.
    ///
    /// Unknown keys fall back to `singular` when `n == 1` and `plural`
    /// otherwise. For known keys the plural rule picks the variant; a rule
    /// result outside the variant list is an error.
    pub fn plural_bytes<'a>(
        &'a self,
        singular: &'a [u8],
        plural: &'a [u8],
        n: u64,
    ) -> Result<&'a [u8], EvalError> {
        let Some(variants) = self.variants(singular, plural) else {
            return Ok(fallback_plural(singular, plural, n));
        };
        let index = self.rule.select_index(n, variants.len())?;
        Ok(&variants[index])
    }

    /// Translate a singular message. Non-UTF-8 bytes are replaced.
    pub fn singular<'a>(&'a self, msg: &'a str) -> Cow<'a, str> {
        String::from_utf8_lossy(self.singular_bytes(msg.as_bytes()))
    }

    /// Translate a plural message. Non-UTF-8 bytes are replaced.
    pub fn plural<'a>(
        &'a self,
        singular: &'a str,
        plural: &'a str,
        n: u64,
    ) -> Result<Cow<'a, str>, EvalError> {
        self.plural_bytes(singular.as_bytes(), plural.as_bytes(), n)
            .map(String::from_utf8_lossy)
    }
}

/// The untranslated plural choice: `singular` for exactly one, else `plural`.
pub fn fallback_plural<'a, T: ?Sized>(singular: &'a T, plural: &'a T, n: u64) -> &'a T {
    if n == 1 { singular } else { plural }
}

/// Resolve `<base_dir>/<locale>/LC_MESSAGES/<domain>.mo`.
pub fn catalog_path(base_dir: &Path, domain: &str, locale: &str) -> PathBuf {
    base_dir
        .join(locale)
        .join("LC_MESSAGES")
        .join(format!("{domain}.mo"))
}

/// Read and decode a catalog file.
pub fn load_catalog(path: impl AsRef<Path>) -> Result<Catalog, LoadError> {
    let path = path.as_ref();
    let data = fs::read(path).map_err(|e| LoadError::Access {
        path: path.to_path_buf(),
        source: e,
    })?;
    Catalog::from_bytes(&data).map_err(|e| LoadError::from_decode(path, e))
}
