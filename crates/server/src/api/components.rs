use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use suggest_core::ComponentId;

use crate::state::AppState;

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct ComponentEntry {
    #[schema(value_type = String)]
    pub name: ComponentId,
    pub snippet: String,
}

/// GET /api/components: every catalog component with its raw template.
#[utoipa::path(
    get,
    path = "/api/components",
    tag = "Components",
    responses(
        (status = 200, description = "Catalog components in definition order", body = Vec<ComponentEntry>),
    )
)]
pub async fn components_list(State(state): State<Arc<AppState>>) -> Json<Vec<ComponentEntry>> {
    let entries = state
        .catalog
        .components()
        .map(|(name, snippet)| ComponentEntry {
            name,
            snippet: snippet.to_string(),
        })
        .collect();
    Json(entries)
}
