//! Application configuration builders.
//!
//! Constructs the catalog, tracker and shared state from `Config`.

use std::sync::Arc;

use anyhow::Context;
use tracing::info;

use suggest_analytics::{demo, MemoryEventStore, UsageTracker};
use suggest_catalog::ComponentCatalog;

use crate::state::AppState;

/// Load configuration from `.env` and environment variables.
pub fn load_config() -> suggest_core::Config {
    suggest_core::config::load_dotenv();
    suggest_core::Config::from_env()
}

/// Load the override catalog if one is configured, the built-in one otherwise.
pub fn build_catalog(config: &suggest_core::Config) -> anyhow::Result<Arc<ComponentCatalog>> {
    let catalog = match &config.catalog.path {
        Some(path) => ComponentCatalog::from_path(path)
            .with_context(|| format!("failed to load catalog {}", path.display()))?,
        None => ComponentCatalog::builtin().context("built-in catalog is invalid")?,
    };
    Ok(Arc::new(catalog))
}

/// Create the in-memory usage tracker, seeding sample traffic when enabled.
pub fn build_tracker(config: &suggest_core::Config) -> UsageTracker {
    let store = Arc::new(MemoryEventStore::with_capacity(config.analytics.capacity));
    if config.analytics.seed_demo {
        demo::seed_demo(store.as_ref(), chrono::Utc::now(), &mut rand::thread_rng());
    }
    info!(
        capacity = store.capacity(),
        events = suggest_analytics::SearchEventStore::len(store.as_ref()),
        "Usage tracker ready"
    );
    UsageTracker::new(store)
}

pub fn build_app_state(config: &suggest_core::Config) -> anyhow::Result<Arc<AppState>> {
    let catalog = build_catalog(config)?;
    let tracker = build_tracker(config);
    Ok(Arc::new(AppState::new(catalog, tracker)))
}
