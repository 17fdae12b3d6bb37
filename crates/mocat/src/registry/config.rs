//! Registry defaults.

use std::path::PathBuf;

use bon::Builder;
use serde::{Deserialize, Serialize};

use crate::registry::CatalogKey;

/// Defaults used when a lookup leaves the domain or locale unset.
///
/// # Example
///
/// ```
/// use mocat::RegistryConfig;
///
/// let config = RegistryConfig::builder()
///     .base_dir("/usr/share/locale")
///     .domain("editor")
///     .locale("de")
///     .build();
/// assert_eq!(config.domain, "editor");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Builder, Serialize, Deserialize)]
#[builder(on(String, into), on(PathBuf, into))]
#[serde(default)]
pub struct RegistryConfig {
    /// Directory holding `<locale>/LC_MESSAGES/<domain>.mo` files.
    #[builder(default)]
    pub base_dir: PathBuf,

    /// Domain used when a call passes an empty domain.
    #[builder(default)]
    pub domain: String,

    /// Locale used when a call passes an empty locale.
    #[builder(default)]
    pub locale: String,
}

impl RegistryConfig {
    /// Replace empty `domain` or `locale` with the configured defaults.
    pub(crate) fn resolve(&self, domain: &str, locale: &str) -> CatalogKey {
        let domain = if domain.is_empty() {
            self.domain.as_str()
        } else {
            domain
        };
        let locale = if locale.is_empty() {
            self.locale.as_str()
        } else {
            locale
        };
        CatalogKey::new(domain, locale)
    }
}
