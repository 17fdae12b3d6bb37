//! Catalog sources for the registry.

use std::path::Path;

use tracing::debug;

use crate::catalog::{Catalog, LoadError, catalog_path, load_catalog};
use crate::registry::CatalogKey;

/// Produces catalogs for the registry on a cache miss.
///
/// Implemented for any `Fn(&Path, &CatalogKey) -> Result<Catalog, LoadError>`
/// so tests and embedders can substitute their own source.
pub trait CatalogLoader: Send + Sync {
    /// Load the catalog for `key` below `base_dir`.
    fn load(&self, base_dir: &Path, key: &CatalogKey) -> Result<Catalog, LoadError>;
}

impl<F> CatalogLoader for F
where
    F: Fn(&Path, &CatalogKey) -> Result<Catalog, LoadError> + Send + Sync,
{
    fn load(&self, base_dir: &Path, key: &CatalogKey) -> Result<Catalog, LoadError> {
        self(base_dir, key)
    }
}

/// Reads `<base_dir>/<locale>/LC_MESSAGES/<domain>.mo` from disk.
#[derive(Debug, Clone, Copy, Default)]
pub struct MoFileLoader;

impl CatalogLoader for MoFileLoader {
    fn load(&self, base_dir: &Path, key: &CatalogKey) -> Result<Catalog, LoadError> {
        let path = catalog_path(base_dir, key.domain(), key.locale());
        debug!(
            domain = key.domain(),
            locale = key.locale(),
            path = %path.display(),
            "decoding catalog"
        );
        load_catalog(&path)
    }
}
