use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::debug;

pub const DEFAULT_SERVER_URL: &str = "http://localhost:3001";

/// CLI configuration loaded from TOML file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CliConfig {
    /// Server URL used when `--server` is not given
    #[serde(default)]
    pub server_url: Option<String>,

    /// Catalog override used when `--catalog` is not given
    #[serde(default)]
    pub catalog_path: Option<PathBuf>,
}

impl CliConfig {
    /// Return the default config directory path: ~/.config/suggest/
    pub fn default_config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("could not determine user config directory")?
            .join("suggest");
        Ok(config_dir)
    }

    /// Return the default config file path.
    pub fn default_config_path() -> Result<PathBuf> {
        Ok(Self::default_config_dir()?.join("config.toml"))
    }

    /// Load config from the given path, or the default path.
    /// Returns default config if the file does not exist.
    pub fn load(path: Option<&str>) -> Result<Self> {
        let config_path = match path {
            Some(p) => PathBuf::from(p),
            None => match Self::default_config_path() {
                Ok(p) => p,
                Err(e) => {
                    debug!("No config directory ({}), using defaults", e);
                    return Ok(Self::default());
                }
            },
        };

        if !config_path.exists() {
            debug!(?config_path, "Config file not found, using defaults");
            return Ok(Self::default());
        }

        debug!(?config_path, "Loading config");
        let content = std::fs::read_to_string(&config_path)
            .with_context(|| format!("failed to read config: {}", config_path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("failed to parse config: {}", config_path.display()))
    }

    /// Resolve the server URL.
    /// Priority: cli_override (flag or env) > config file > default.
    pub fn resolve_server_url(&self, cli_override: Option<&str>) -> String {
        cli_override
            .map(str::to_string)
            .or_else(|| self.server_url.clone())
            .unwrap_or_else(|| DEFAULT_SERVER_URL.to_string())
    }

    /// Resolve the catalog override, if any.
    pub fn resolve_catalog_path(&self, cli_override: Option<&str>) -> Option<PathBuf> {
        cli_override
            .map(PathBuf::from)
            .or_else(|| self.catalog_path.clone())
    }
}
