//! Concurrent catalog registry.
//!
//! The registry maps (domain, locale) pairs to decoded catalogs, loading each
//! one lazily on first use. Loads are serialized per key: two threads asking
//! for the same catalog decode it once, while loads of unrelated catalogs run
//! in parallel. A failed load caches nothing, so the next request retries.

mod config;
mod key;
mod loader;
mod translator;

use std::collections::HashMap;
use std::fmt;
use std::path::PathBuf;
use std::sync::{Arc, Mutex, OnceLock, PoisonError, RwLock};

use tracing::{info, warn};

use crate::catalog::{Catalog, LoadError, fallback_plural};
use crate::interpreter::EvalError;

pub use config::RegistryConfig;
pub use key::CatalogKey;
pub use loader::{CatalogLoader, MoFileLoader};
pub use translator::Translator;

/// Load state for one catalog key.
#[derive(Default)]
struct Slot {
    /// Held for the duration of a decode.
    loading: Mutex<()>,
    /// Set once, on the first successful decode.
    catalog: OnceLock<Arc<Catalog>>,
}

/// Thread-safe, lazily populated cache of catalogs.
///
/// # Example
///
/// ```
/// use mocat::{Registry, RegistryConfig};
///
/// let registry = Registry::new(
///     RegistryConfig::builder()
///         .base_dir("/nonexistent")
///         .domain("app")
///         .locale("de")
///         .build(),
/// );
///
/// // No catalog on disk: lookups return the source text.
/// let t = registry.translator("", "");
/// assert_eq!(t.singular("Save"), "Save");
/// assert_eq!(t.plural("file", "files", 1).unwrap(), "file");
/// ```
pub struct Registry {
    config: RwLock<RegistryConfig>,
    slots: RwLock<HashMap<CatalogKey, Arc<Slot>>>,
    loader: Box<dyn CatalogLoader>,
}

impl Registry {
    /// Create a registry that reads `.mo` files from disk.
    pub fn new(config: RegistryConfig) -> Self {
        Self::with_loader(config, MoFileLoader)
    }

    /// Create a registry with a custom catalog source.
    pub fn with_loader(config: RegistryConfig, loader: impl CatalogLoader + 'static) -> Self {
        Self {
            config: RwLock::new(config),
            slots: RwLock::new(HashMap::new()),
            loader: Box::new(loader),
        }
    }

    // =========================================================================
    // Defaults
    // =========================================================================

    /// A snapshot of the current defaults.
    pub fn config(&self) -> RegistryConfig {
        self.config
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Replace the defaults used for unset domain, locale and base directory.
    ///
    /// Catalogs that are already loaded stay cached.
    pub fn set_config(&self, config: RegistryConfig) {
        *self.config.write().unwrap_or_else(PoisonError::into_inner) = config;
    }

    /// Fill an empty `domain` or `locale` from the defaults.
    pub fn resolve(&self, domain: &str, locale: &str) -> CatalogKey {
        self.config
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .resolve(domain, locale)
    }

    // =========================================================================
    // Activation
    // =========================================================================

    /// Load the catalog for `(domain, locale)` if needed and return lookups
    /// bound to it.
    ///
    /// Empty arguments resolve to the configured defaults. A catalog that
    /// fails to load is logged and not cached; the returned translator then
    /// falls back to source text, and the next call tries again.
    pub fn translator(&self, domain: &str, locale: &str) -> Translator<'_> {
        let key = self.resolve(domain, locale);
        if let Err(e) = self.ensure_loaded(&key) {
            warn!(
                domain = key.domain(),
                locale = key.locale(),
                error = %e,
                "catalog unavailable, falling back to source text"
            );
        }
        Translator::new(self, key)
    }

    /// Set new defaults and return a translator for them.
    pub fn activate(
        &self,
        base_dir: impl Into<PathBuf>,
        domain: impl Into<String>,
        locale: impl Into<String>,
    ) -> Translator<'_> {
        self.set_config(
            RegistryConfig::builder()
                .base_dir(base_dir)
                .domain(domain)
                .locale(locale)
                .build(),
        );
        self.translator("", "")
    }

    /// Load the catalog for `(domain, locale)` if needed, reporting failure.
    pub fn load(&self, domain: &str, locale: &str) -> Result<Arc<Catalog>, LoadError> {
        let key = self.resolve(domain, locale);
        self.ensure_loaded(&key)
    }

    /// The cached catalog for `(domain, locale)`, without loading.
    pub fn catalog(&self, domain: &str, locale: &str) -> Option<Arc<Catalog>> {
        self.published(&CatalogKey::new(domain, locale))
    }

    /// Whether a catalog for `(domain, locale)` is cached.
    pub fn is_loaded(&self, domain: &str, locale: &str) -> bool {
        self.catalog(domain, locale).is_some()
    }

    /// Keys of all cached catalogs, sorted.
    pub fn loaded(&self) -> Vec<CatalogKey> {
        let slots = self.slots.read().unwrap_or_else(PoisonError::into_inner);
        let mut keys: Vec<CatalogKey> = slots
            .iter()
            .filter(|(_, slot)| slot.catalog.get().is_some())
            .map(|(key, _)| key.clone())
            .collect();
        keys.sort();
        keys
    }

    // =========================================================================
    // Lookup
    // =========================================================================

    /// Translate `msg` in an already-loaded catalog. Never loads; an absent
    /// catalog behaves as an empty one.
    pub fn singular(&self, domain: &str, locale: &str, msg: &str) -> String {
        match self.catalog(domain, locale) {
            Some(catalog) => catalog.singular(msg).into_owned(),
            None => msg.to_string(),
        }
    }

    /// Translate a plural message in an already-loaded catalog. Never loads.
    pub fn plural(
        &self,
        domain: &str,
        locale: &str,
        singular: &str,
        plural: &str,
        n: u64,
    ) -> Result<String, EvalError> {
        match self.catalog(domain, locale) {
            Some(catalog) => Ok(catalog.plural(singular, plural, n)?.into_owned()),
            None => Ok(fallback_plural(singular, plural, n).to_string()),
        }
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn published(&self, key: &CatalogKey) -> Option<Arc<Catalog>> {
        let slots = self.slots.read().unwrap_or_else(PoisonError::into_inner);
        slots.get(key).and_then(|slot| slot.catalog.get()).cloned()
    }

    /// Find or create the slot for `key`.
    fn slot(&self, key: &CatalogKey) -> Arc<Slot> {
        let existing = self
            .slots
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned();
        if let Some(slot) = existing {
            return slot;
        }
        let mut slots = self.slots.write().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(slots.entry(key.clone()).or_default())
    }

    fn ensure_loaded(&self, key: &CatalogKey) -> Result<Arc<Catalog>, LoadError> {
        let slot = self.slot(key);
        if let Some(catalog) = slot.catalog.get() {
            return Ok(Arc::clone(catalog));
        }

        let _loading = slot.loading.lock().unwrap_or_else(PoisonError::into_inner);
        // Another thread may have finished while we waited.
        if let Some(catalog) = slot.catalog.get() {
            return Ok(Arc::clone(catalog));
        }

        let base_dir = self.config().base_dir;
        let catalog = Arc::new(self.loader.load(&base_dir, key)?);
        info!(
            domain = key.domain(),
            locale = key.locale(),
            messages = catalog.len(),
            "catalog loaded"
        );
        Ok(Arc::clone(slot.catalog.get_or_init(|| catalog)))
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("config", &self.config())
            .field("loaded", &self.loaded())
            .finish_non_exhaustive()
    }
}
