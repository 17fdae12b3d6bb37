use std::fmt;

/// Identifies one catalog: a message domain in a locale.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CatalogKey {
    domain: String,
    locale: String,
}

impl CatalogKey {
    pub fn new(domain: impl Into<String>, locale: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            locale: locale.into(),
        }
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }
}

impl fmt::Display for CatalogKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.locale, self.domain)
    }
}
