use std::path::PathBuf;

use thiserror::Error;

use suggest_core::ComponentId;

/// Errors produced while loading or compiling a component catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("no snippet template for component {0}")]
    MissingTemplate(ComponentId),

    #[error("fallback component list is empty")]
    EmptyFallback,

    #[error("catalog declares no import packages")]
    NoPackages,

    #[error("rule key {0:?} is empty")]
    EmptyRuleKey(String),
}
