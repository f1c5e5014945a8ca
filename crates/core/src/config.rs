use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::SuggestError;

/// Load .env file (silently ignores if missing).
pub fn load_dotenv() {
    dotenvy::dotenv().ok();
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_opt(key: &str) -> Option<String> {
    env::var(key).ok().filter(|s| !s.is_empty())
}

/// Read a profiled env var: tries {PROFILE}_{KEY} first, falls back to {KEY}.
fn profiled_env_opt(profile: &str, key: &str) -> Option<String> {
    if !profile.is_empty() {
        let prefixed = format!("{}_{}", profile, key);
        if let Some(v) = env_opt(&prefixed) {
            return Some(v);
        }
    }
    env_opt(key)
}

fn profiled_env_or(profile: &str, key: &str, default: &str) -> String {
    profiled_env_opt(profile, key).unwrap_or_else(|| default.to_string())
}

fn profiled_env_u16(profile: &str, key: &str, default: u16) -> u16 {
    profiled_env_opt(profile, key)
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

fn profiled_env_usize(profile: &str, key: &str, default: usize) -> usize {
    profiled_env_opt(profile, key)
        .and_then(|v| v.parse().ok())
        .filter(|v| *v > 0)
        .unwrap_or(default)
}

fn profiled_env_bool(profile: &str, key: &str, default: bool) -> bool {
    match profiled_env_opt(profile, key).as_deref() {
        Some("1") | Some("true") | Some("yes") => true,
        Some("0") | Some("false") | Some("no") => false,
        _ => default,
    }
}

// ── Top-level config ──────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Active profile name (empty = default).
    pub profile: String,
    pub server: ServerConfig,
    pub catalog: CatalogConfig,
    pub analytics: AnalyticsConfig,
}

impl Config {
    /// Build config from environment variables (call `load_dotenv()` first).
    /// Profile is read from `SUGGEST_PROFILE` env var. When set (e.g. `PROD`),
    /// every key is first looked up as `{PROFILE}_{KEY}`, falling back to `{KEY}`.
    pub fn from_env() -> Self {
        let profile = env_or("SUGGEST_PROFILE", "").to_uppercase();
        Self::for_profile(&profile)
    }

    /// Build config for a specific named profile (empty string = default).
    pub fn for_profile(profile: &str) -> Self {
        let p = profile.to_uppercase();
        let p = p.as_str();
        Self {
            profile: p.to_string(),
            server: ServerConfig::from_env_profiled(p),
            catalog: CatalogConfig::from_env_profiled(p),
            analytics: AnalyticsConfig::from_env_profiled(p),
        }
    }

    /// Reject settings that cannot be served: an empty bind host or a
    /// catalog override that does not point at a file.
    pub fn validate(&self) -> Result<(), SuggestError> {
        if self.server.host.trim().is_empty() {
            return Err(SuggestError::Config("HOST must not be empty".to_string()));
        }
        if let Some(path) = &self.catalog.path {
            if !path.is_file() {
                return Err(SuggestError::Config(format!(
                    "CATALOG_PATH {} is not a file",
                    path.display()
                )));
            }
        }
        Ok(())
    }

    pub fn profile_label(&self) -> &str {
        if self.profile.is_empty() { "default" } else { &self.profile }
    }

    /// Print a summary for startup logs.
    pub fn log_summary(&self) {
        tracing::info!("Config loaded (profile: {}):", self.profile_label());
        tracing::info!("  server:      {}:{} (cors: {})", self.server.host, self.server.port, self.server.cors_origin);
        tracing::info!(
            "  catalog:     {}",
            self.catalog
                .path
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "(built-in)".to_string())
        );
        tracing::info!(
            "  analytics:   capacity={}, seed_demo={}",
            self.analytics.capacity, self.analytics.seed_demo
        );
    }
}

// ── Server ────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub cors_origin: String,
}

impl ServerConfig {
    fn from_env_profiled(p: &str) -> Self {
        Self {
            host: profiled_env_or(p, "HOST", "0.0.0.0"),
            port: profiled_env_u16(p, "PORT", 3001),
            cors_origin: profiled_env_or(p, "CORS_ORIGIN", "*"),
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

// ── Component catalog ─────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Optional YAML file replacing the built-in catalog.
    pub path: Option<PathBuf>,
}

impl CatalogConfig {
    fn from_env_profiled(p: &str) -> Self {
        Self {
            path: profiled_env_opt(p, "CATALOG_PATH").map(PathBuf::from),
        }
    }
}

// ── Search analytics ──────────────────────────────────────────

/// Default number of search events retained in memory.
pub const DEFAULT_ANALYTICS_CAPACITY: usize = 1000;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyticsConfig {
    /// Maximum retained events; oldest are evicted first.
    pub capacity: usize,
    /// Pre-populate the store with sample events on startup.
    pub seed_demo: bool,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_ANALYTICS_CAPACITY,
            seed_demo: false,
        }
    }
}

impl AnalyticsConfig {
    fn from_env_profiled(p: &str) -> Self {
        Self {
            capacity: profiled_env_usize(p, "ANALYTICS_CAPACITY", DEFAULT_ANALYTICS_CAPACITY),
            seed_demo: profiled_env_bool(p, "ANALYTICS_SEED_DEMO", false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profiled_key_takes_precedence() {
        env::set_var("CFGTESTA_PORT", "4100");
        let config = Config::for_profile("cfgtesta");
        assert_eq!(config.profile, "CFGTESTA");
        assert_eq!(config.server.port, 4100);
        env::remove_var("CFGTESTA_PORT");
    }

    #[test]
    fn invalid_capacity_falls_back_to_default() {
        env::set_var("CFGTESTB_ANALYTICS_CAPACITY", "0");
        env::set_var("CFGTESTB_ANALYTICS_SEED_DEMO", "yes");
        let config = Config::for_profile("CFGTESTB");
        assert_eq!(config.analytics.capacity, DEFAULT_ANALYTICS_CAPACITY);
        assert!(config.analytics.seed_demo);
        env::remove_var("CFGTESTB_ANALYTICS_CAPACITY");
        env::remove_var("CFGTESTB_ANALYTICS_SEED_DEMO");
    }

    #[test]
    fn validate_rejects_missing_catalog_override() {
        let mut config = Config::for_profile("CFGTESTC");
        config.catalog.path = Some(PathBuf::from("/nonexistent/components.yml"));
        let err = config.validate().unwrap_err();
        assert!(matches!(err, SuggestError::Config(ref msg) if msg.contains("CATALOG_PATH")));
    }

    #[test]
    fn validate_rejects_blank_host() {
        let mut config = Config::for_profile("CFGTESTC");
        config.catalog.path = None;
        config.server.host = "  ".to_string();
        assert_eq!(
            config.validate(),
            Err(SuggestError::Config("HOST must not be empty".to_string()))
        );
    }

    #[test]
    fn validate_accepts_defaults() {
        let mut config = Config::for_profile("CFGTESTC");
        config.catalog.path = None;
        config.server.host = "127.0.0.1".to_string();
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn profile_label_defaults() {
        let config = Config::for_profile("");
        assert_eq!(config.profile_label(), "default");
    }
}
