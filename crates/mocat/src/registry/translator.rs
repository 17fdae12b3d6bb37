//! Lookups bound to one (domain, locale) pair.

use crate::interpreter::EvalError;
use crate::registry::{CatalogKey, Registry};

/// Translation functions returned by [`Registry::translator`].
///
/// `singular` and `plural` use the domain and locale resolved when the
/// translator was created. `domain_singular` and `domain_plural` keep the
/// locale but take the domain per call; that domain is not loaded by this
/// translator, so it must have been activated separately or lookups fall
/// back to the source text.
///
/// Each call reads the registry, so a catalog loaded after this translator
/// was created is picked up.
#[derive(Debug, Clone)]
pub struct Translator<'r> {
    registry: &'r Registry,
    key: CatalogKey,
}

impl<'r> Translator<'r> {
    pub(crate) fn new(registry: &'r Registry, key: CatalogKey) -> Self {
        Self { registry, key }
    }

    pub fn key(&self) -> &CatalogKey {
        &self.key
    }

    pub fn domain(&self) -> &str {
        self.key.domain()
    }

    pub fn locale(&self) -> &str {
        self.key.locale()
    }

    /// Translate `msg`, or return it unchanged.
    pub fn singular(&self, msg: &str) -> String {
        self.registry.singular(self.domain(), self.locale(), msg)
    }

    /// Translate a message with a plural form for count `n`.
    pub fn plural(&self, singular: &str, plural: &str, n: u64) -> Result<String, EvalError> {
        self.registry
            .plural(self.domain(), self.locale(), singular, plural, n)
    }

    /// Translate `msg` from another domain in this translator's locale.
    pub fn domain_singular(&self, domain: &str, msg: &str) -> String {
        self.registry.singular(domain, self.locale(), msg)
    }

    /// Translate a plural message from another domain in this translator's
    /// locale.
    pub fn domain_plural(
        &self,
        domain: &str,
        singular: &str,
        plural: &str,
        n: u64,
    ) -> Result<String, EvalError> {
        self.registry
            .plural(domain, self.locale(), singular, plural, n)
    }
}
