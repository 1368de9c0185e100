use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{warn, Level};
use utoipa::OpenApi;

use common::types::Health;

use crate::errors::JsonApiError;
use crate::openapi::ApiDoc;
use crate::state::ServerState;

pub mod partitions;

/// Liveness plus a database round-trip.
#[utoipa::path(
    get, path = "/health", tag = "health",
    responses(
        (status = 200, description = "Service and database reachable", body = crate::openapi::HealthResponse),
        (status = 503, description = "Database unreachable", body = crate::openapi::HealthResponse)
    )
)]
pub async fn health(State(state): State<ServerState>) -> (StatusCode, Json<Health>) {
    match state.db.ping().await {
        Ok(()) => (StatusCode::OK, Json(Health { status: "ok" })),
        Err(e) => {
            warn!(err = %e, "database ping failed");
            (StatusCode::SERVICE_UNAVAILABLE, Json(Health { status: "unavailable" }))
        }
    }
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

async fn not_found() -> JsonApiError {
    JsonApiError::not_found("no such route")
}

async fn method_not_allowed() -> JsonApiError {
    JsonApiError::new(StatusCode::METHOD_NOT_ALLOWED, "Method Not Allowed", Some("method not supported on this route".into()))
}

fn partition_routes() -> Router<ServerState> {
    Router::new()
        .route("/partitions", get(partitions::list).fallback(method_not_allowed))
        .route(
            "/partitions/:id/favorite",
            post(partitions::update_favorite).fallback(method_not_allowed),
        )
}

/// Build the full application router. Partition routes are served at the
/// root and again under `/api` for clients written against that prefix.
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api-docs/openapi.json", get(openapi_json))
        .merge(partition_routes())
        .nest("/api", partition_routes())
        .fallback(not_found)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                // one span per request, method and path included
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                // status code and latency
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
