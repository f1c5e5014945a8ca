//! `/api/search-analytics`: record searches and report usage statistics.
//!
//! The body is parsed by hand rather than through the `Json` extractor so that
//! a missing content type or malformed JSON maps to the generic 500 failure
//! instead of axum's rejection responses.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{header, HeaderMap, StatusCode};
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::{error, warn};

use suggest_analytics::{AnalyticsError, NewSearch, UsageAggregate};

use crate::state::AppState;

const RECORDED_MESSAGE: &str = "Search recorded successfully";
const RECORD_FAILED: &str = "Failed to record search";

// ── Types ─────────────────────────────────────────────────────────

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct RecordSearchRequest {
    pub query: Option<String>,
    pub components: Option<Vec<String>>,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecordSearchResponse {
    pub success: bool,
    pub message: String,
    pub record_id: String,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct AnalyticsErrorResponse {
    pub success: bool,
    pub error: String,
}

type AnalyticsResult<T> = Result<Json<T>, (StatusCode, Json<AnalyticsErrorResponse>)>;

fn failure(status: StatusCode, error: impl Into<String>) -> (StatusCode, Json<AnalyticsErrorResponse>) {
    (
        status,
        Json(AnalyticsErrorResponse {
            success: false,
            error: error.into(),
        }),
    )
}

// ── Handlers ──────────────────────────────────────────────────────

/// POST /api/search-analytics
#[utoipa::path(
    post,
    path = "/api/search-analytics",
    tag = "Analytics",
    request_body = RecordSearchRequest,
    responses(
        (status = 200, description = "Search recorded", body = RecordSearchResponse),
        (status = 400, description = "Query or components missing", body = AnalyticsErrorResponse),
        (status = 500, description = "Unreadable request body", body = AnalyticsErrorResponse),
    )
)]
pub async fn record_search(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Bytes,
) -> AnalyticsResult<RecordSearchResponse> {
    let req: RecordSearchRequest = serde_json::from_slice(&body).map_err(|e| {
        error!("Failed to parse search analytics body: {}", e);
        failure(StatusCode::INTERNAL_SERVER_ERROR, RECORD_FAILED)
    })?;

    let user_agent = headers
        .get(header::USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    let search = NewSearch {
        query: req.query,
        components: req.components,
        user_agent,
    };

    match state.tracker.record(search) {
        Ok(event) => Ok(Json(RecordSearchResponse {
            success: true,
            message: RECORDED_MESSAGE.to_string(),
            record_id: event.id,
        })),
        Err(e @ AnalyticsError::MissingFields) => {
            warn!("Rejected search analytics submission: {}", e);
            Err(failure(StatusCode::BAD_REQUEST, e.to_string()))
        }
    }
}

/// GET /api/search-analytics
#[utoipa::path(
    get,
    path = "/api/search-analytics",
    tag = "Analytics",
    responses(
        (status = 200, description = "Usage statistics over retained searches", body = UsageAggregate),
    )
)]
pub async fn search_analytics_summary(State(state): State<Arc<AppState>>) -> Json<UsageAggregate> {
    Json(state.tracker.aggregate())
}
