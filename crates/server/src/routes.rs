use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{TraceLayer, DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, DefaultOnFailure},
};
use tracing::{warn, Level};
use utoipa::OpenApi;

use common::types::HealthResponse;

use crate::{observability, openapi::ApiDoc, state::ServerState};

pub mod users;

/// Storage connectivity probe; 500 carries the backend diagnostic.
#[utoipa::path(get, path = "/health", tag = "health", responses(
    (status = 200, description = "Storage reachable", body = crate::openapi::HealthResponseDoc),
    (status = 500, description = "Storage unreachable", body = crate::openapi::HealthResponseDoc)
))]
pub async fn health(State(state): State<ServerState>) -> (StatusCode, Json<HealthResponse>) {
    let probe = state.registry.health().await;
    if probe.ok {
        (StatusCode::OK, Json(HealthResponse::ok()))
    } else {
        warn!(diagnostic = %probe.message, "health check failed");
        (StatusCode::INTERNAL_SERVER_ERROR, Json(HealthResponse::error(probe.message)))
    }
}

async fn metrics() -> (StatusCode, String) {
    observability::encode_metrics()
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Build the full application router.
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/user", post(users::create_user))
        .route("/user/:cpf", get(users::get_user))
        .route("/users", get(users::list_users))
        .route("/metrics", get(metrics))
        .route("/api-docs/openapi.json", get(openapi_json))
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
