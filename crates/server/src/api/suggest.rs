//! POST /api/suggest: resolve a description and assemble its snippet.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::{header, HeaderMap, StatusCode};
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use suggest_analytics::NewSearch;
use suggest_catalog::MatchTier;
use suggest_core::ComponentId;

use crate::api::ErrorResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct SuggestRequest {
    pub query: String,
    /// Also report the query and its components to the usage tracker.
    #[serde(default)]
    pub record: bool,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SuggestResponse {
    #[schema(value_type = Vec<String>)]
    pub components: Vec<ComponentId>,
    pub snippet: String,
    /// `phrase`, `keyword` or `fallback`; absent for a blank query.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>)]
    pub tier: Option<MatchTier>,
    pub matched_rules: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record_id: Option<String>,
}

impl SuggestResponse {
    fn empty() -> Self {
        Self {
            components: Vec::new(),
            snippet: String::new(),
            tier: None,
            matched_rules: Vec::new(),
            record_id: None,
        }
    }
}

#[utoipa::path(
    post,
    path = "/api/suggest",
    tag = "Suggest",
    request_body = SuggestRequest,
    responses(
        (status = 200, description = "Resolved components and merged snippet", body = SuggestResponse),
        (status = 400, description = "Malformed JSON body", body = ErrorResponse),
        (status = 422, description = "Body is not a valid suggest request", body = ErrorResponse),
    )
)]
pub async fn suggest(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    payload: Result<Json<SuggestRequest>, JsonRejection>,
) -> Result<Json<SuggestResponse>, (StatusCode, Json<ErrorResponse>)> {
    let Json(req) = payload.map_err(|e| {
        warn!("Invalid suggest request: {}", e.body_text());
        (
            e.status(),
            Json(ErrorResponse {
                error: e.body_text(),
            }),
        )
    })?;

    if req.query.trim().is_empty() {
        return Ok(Json(SuggestResponse::empty()));
    }

    let resolution = state.resolver.resolve(&req.query);
    let snippet = state.assembler.assemble(&resolution.components);

    info!(
        query = %req.query.trim(),
        tier = ?resolution.tier,
        components = resolution.components.len(),
        "Suggestion served"
    );

    let record_id = if req.record {
        let names = resolution.components.iter().map(|c| c.to_string()).collect();
        let user_agent = headers
            .get(header::USER_AGENT)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        match state
            .tracker
            .record(NewSearch::new(req.query.as_str(), names).with_user_agent(user_agent))
        {
            Ok(event) => Some(event.id),
            Err(e) => {
                warn!("Suggestion not recorded: {}", e);
                None
            }
        }
    } else {
        None
    };

    Ok(Json(SuggestResponse {
        components: resolution.components,
        snippet,
        tier: Some(resolution.tier),
        matched_rules: resolution.matched_rules,
        record_id,
    }))
}
