//! Component catalog: snippet templates plus phrase and word rule tables.
//!
//! Loaded once at startup from YAML (the built-in document is embedded in the
//! binary) and compiled into an immutable [`ComponentCatalog`].

mod builder;
mod types;

#[cfg(test)]
mod tests;

use std::path::Path;

use tracing::info;

use crate::error::CatalogError;

pub use types::{CatalogDocument, ComponentCatalog, KeywordRule};

/// Catalog shipped with the binary.
const BUILTIN_CATALOG: &str = include_str!("../../../../data/catalog/components.yml");

impl ComponentCatalog {
    /// Parse and compile the embedded catalog.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_yaml_str(BUILTIN_CATALOG)
    }

    /// Parse and compile a catalog document from YAML text.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, CatalogError> {
        let document: CatalogDocument = serde_yaml::from_str(yaml)?;
        let catalog = document.compile()?;
        info!(
            components = catalog.len(),
            phrase_rules = catalog.phrase_rules().len(),
            word_rules = catalog.word_rules().len(),
            "Component catalog compiled"
        );
        Ok(catalog)
    }

    /// Load a catalog override from disk.
    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let yaml = std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        info!("Loading component catalog from {}", path.display());
        Self::from_yaml_str(&yaml)
    }
}
