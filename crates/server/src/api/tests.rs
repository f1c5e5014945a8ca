use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use suggest_analytics::{MemoryEventStore, UsageTracker};
use suggest_catalog::ComponentCatalog;

use crate::router::build_router;
use crate::state::AppState;

fn app() -> (Router, Arc<MemoryEventStore>) {
    let catalog = Arc::new(ComponentCatalog::builtin().unwrap());
    let store = Arc::new(MemoryEventStore::with_capacity(1000));
    let tracker = UsageTracker::new(store.clone());
    let state = Arc::new(AppState::new(catalog, tracker));
    (build_router(state, "*"), store)
}

fn post_json(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .header("user-agent", "suggest-tests/1.0")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn body_json(resp: Response) -> Value {
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ── Health & catalog ──────────────────────────────────────────────

#[tokio::test]
async fn health_reports_component_count() {
    let (app, _) = app();
    let resp = app.oneshot(get("/health")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["components"], 28);
}

#[tokio::test]
async fn components_are_listed_in_catalog_order() {
    let (app, _) = app();
    let resp = app.oneshot(get("/api/components")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    let entries = body.as_array().unwrap();
    assert_eq!(entries.len(), 28);
    assert_eq!(entries[0]["name"], "Input");
    assert_eq!(entries[27]["name"], "Pagination");
    assert!(entries[0]["snippet"].as_str().unwrap().contains("<Input"));
}

#[tokio::test]
async fn docs_are_served() {
    let (app, _) = app();
    let resp = app.oneshot(get("/docs")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}

// ── Search analytics ──────────────────────────────────────────────

#[tokio::test]
async fn record_search_succeeds() {
    let (app, store) = app();
    let resp = app
        .oneshot(post_json(
            "/api/search-analytics",
            r#"{"query":"  login form ","components":["EmailInput","PasswordInput"]}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_json(resp).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Search recorded successfully");
    let record_id = body["recordId"].as_str().unwrap();

    let events = store.snapshot();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].id, record_id);
    assert_eq!(events[0].query, "login form");
    assert_eq!(events[0].user_agent.as_deref(), Some("suggest-tests/1.0"));
}

#[tokio::test]
async fn record_search_rejects_missing_fields() {
    let bodies = [
        r#"{"query":"dashboard"}"#,
        r#"{"components":["Table"]}"#,
        r#"{"query":"   ","components":["Table"]}"#,
        r#"{}"#,
    ];
    for raw in bodies {
        let (app, store) = app();
        let resp = app.oneshot(post_json("/api/search-analytics", raw)).await.unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "body: {raw}");
        assert_eq!(
            body_json(resp).await,
            json!({"success": false, "error": "Missing required fields: query and components"})
        );
        assert_eq!(store.snapshot().len(), 0);
    }
}

#[tokio::test]
async fn record_search_malformed_body_is_server_error() {
    let (app, store) = app();
    let resp = app
        .oneshot(post_json("/api/search-analytics", "{not json"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body_json(resp).await,
        json!({"success": false, "error": "Failed to record search"})
    );
    assert!(store.snapshot().is_empty());
}

#[tokio::test]
async fn summary_reflects_recorded_searches() {
    let (app, _) = app();
    for query in ["dashboard", "login form", "dashboard"] {
        let body = json!({"query": query, "components": ["Table"]}).to_string();
        let resp = app
            .clone()
            .oneshot(post_json("/api/search-analytics", &body))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
    }

    let resp = app.oneshot(get("/api/search-analytics")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        body_json(resp).await,
        json!({
            "totalQueries": 3,
            "todayQueries": 3,
            "totalComponents": 28,
            "popularQueries": [
                {"query": "dashboard", "count": 2},
                {"query": "login form", "count": 1},
            ],
        })
    );
}

#[tokio::test]
async fn empty_summary() {
    let (app, _) = app();
    let body = body_json(app.oneshot(get("/api/search-analytics")).await.unwrap()).await;
    assert_eq!(body["totalQueries"], 0);
    assert_eq!(body["popularQueries"], json!([]));
}

// ── Suggest ───────────────────────────────────────────────────────

#[tokio::test]
async fn suggest_resolves_and_assembles() {
    let (app, store) = app();
    let resp = app
        .oneshot(post_json("/api/suggest", r#"{"query":"Login Form"}"#))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_json(resp).await;
    assert_eq!(
        body["components"],
        json!(["EmailInput", "PasswordInput", "Checkbox", "SubmitButton"])
    );
    assert_eq!(body["tier"], "phrase");
    assert_eq!(body["matchedRules"], json!(["login form"]));
    let snippet = body["snippet"].as_str().unwrap();
    assert!(snippet.starts_with(
        "import { Button, Checkbox, Input, InputContainer, Label, Utility } from '@visa/nova-react';"
    ));
    assert!(body.get("recordId").is_none());
    assert!(store.snapshot().is_empty());
}

#[tokio::test]
async fn suggest_blank_query_is_empty() {
    let (app, _) = app();
    let resp = app
        .oneshot(post_json("/api/suggest", r#"{"query":"   "}"#))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["components"], json!([]));
    assert_eq!(body["snippet"], "");
    assert!(body.get("tier").is_none());
}

#[tokio::test]
async fn suggest_can_record_the_search() {
    let (app, store) = app();
    let resp = app
        .oneshot(post_json("/api/suggest", r#"{"query":"zzz","record":true}"#))
        .await
        .unwrap();
    let body = body_json(resp).await;
    assert_eq!(body["tier"], "fallback");
    assert_eq!(body["components"], json!(["Input", "Button"]));

    let events = store.snapshot();
    assert_eq!(events.len(), 1);
    assert_eq!(body["recordId"], events[0].id.as_str());
    assert_eq!(events[0].components, vec!["Input", "Button"]);
}

#[tokio::test]
async fn suggest_rejects_invalid_body() {
    let (app, _) = app();
    let resp = app
        .oneshot(post_json("/api/suggest", r#"{"record":true}"#))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body_json(resp).await["error"].is_string());
}

#[tokio::test]
async fn record_search_takes_user_agent_from_header_only() {
    let (app, store) = app();
    let resp = app
        .oneshot(post_json(
            "/api/search-analytics",
            r#"{"query":"dashboard","components":["Table"],"user_agent":"spoofed","userAgent":"spoofed"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let events = store.snapshot();
    assert_eq!(events[0].user_agent.as_deref(), Some("suggest-tests/1.0"));
}

// ── CORS ──────────────────────────────────────────────────────────

fn app_with_origin(origin: &str) -> Router {
    let catalog = Arc::new(ComponentCatalog::builtin().unwrap());
    let state = Arc::new(AppState::new(catalog, UsageTracker::in_memory(10)));
    build_router(state, origin)
}

fn get_with_origin(uri: &str, origin: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .header("origin", origin)
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn configured_cors_origin_is_echoed() {
    let app = app_with_origin("http://localhost:3000");
    let resp = app
        .oneshot(get_with_origin("/health", "http://localhost:3000"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers()["access-control-allow-origin"],
        "http://localhost:3000"
    );
}

#[tokio::test]
async fn invalid_cors_origin_falls_back_to_any() {
    let app = app_with_origin("bad\norigin");
    let resp = app
        .oneshot(get_with_origin("/health", "http://elsewhere.test"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.headers()["access-control-allow-origin"], "*");
}
