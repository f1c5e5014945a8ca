//! Domain-focused API endpoint modules.
//!
//! Each sub-module owns a single responsibility area.
//! Shared types live here in mod.rs.

mod analytics;
mod components;
pub mod doc;
mod health;
mod suggest;

#[cfg(test)]
mod tests;

use serde::Serialize;

// ── Shared types ─────────────────────────────────────────────────

#[derive(Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

// ── Re-exports ───────────────────────────────────────────────────
// Flat `api::foo` paths used by router.rs.

pub use analytics::{record_search, search_analytics_summary};
pub use components::components_list;
pub use health::health;
pub use suggest::suggest;
