//! OpenAPI documentation aggregator.
//!
//! Collects all `#[utoipa::path]`-annotated handlers and `ToSchema`-derived
//! types into a single OpenAPI spec, served via Scalar UI at `/docs`.

use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "component-suggest API",
        version = "0.1.0",
        description = "Design-system component suggestions from UI descriptions, with search usage analytics.",
    ),
    tags(
        (name = "Health", description = "Server readiness"),
        (name = "Suggest", description = "Description to components and merged code snippet"),
        (name = "Components", description = "Component catalog listing"),
        (name = "Analytics", description = "Search recording and usage statistics"),
    ),
    paths(
        crate::api::health::health,
        crate::api::suggest::suggest,
        crate::api::components::components_list,
        crate::api::analytics::record_search,
        crate::api::analytics::search_analytics_summary,
    ),
    components(schemas(
        crate::api::ErrorResponse,
        crate::api::health::HealthResponse,
        crate::api::suggest::SuggestRequest,
        crate::api::suggest::SuggestResponse,
        crate::api::components::ComponentEntry,
        crate::api::analytics::RecordSearchRequest,
        crate::api::analytics::RecordSearchResponse,
        crate::api::analytics::AnalyticsErrorResponse,
        suggest_analytics::UsageAggregate,
        suggest_analytics::PopularQuery,
    ))
)]
pub struct ApiDoc;
