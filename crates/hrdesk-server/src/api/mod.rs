//! HTTP API layer (axum) for the hrdesk assistant.
//!
//! Simple glue around the resolution engine: routing, API-key check,
//! CORS, the OpenAPI document, and the mock leave-balance endpoint.

pub mod error;
pub mod handler;
pub mod openapi;
pub mod state;


use axum::{
    Json, Router,
    extract::{Request, State},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub use error::ApiError;
pub use handler::{chat_handler, classify_handler, leave_balance_handler};
pub use openapi::API_KEY_HEADER;
pub use state::AppState;

use hrdesk::completion::CompletionBackend;
use hrdesk::embedding::Embedder;

pub fn create_router_with_state<E, C>(state: AppState<E, C>) -> Router
where
    E: Embedder + 'static,
    C: CompletionBackend + 'static,
{
    let protected = Router::new()
        .route("/chat", post(chat_handler))
        .route("/classify", get(classify_handler))
        .route("/leave-balance", get(leave_balance_handler))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_api_key::<E, C>,
        ));

    Router::new()
        .merge(protected)
        .route("/", get(root_handler))
        .route("/healthz", get(health_handler))
        .route("/ready", get(ready_handler))
        .route("/openapi.json", get(openapi_handler))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Rejects requests whose `X-API-Key` header does not match the configured
/// key.
pub async fn require_api_key<E, C>(
    State(state): State<AppState<E, C>>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError>
where
    E: Embedder + 'static,
    C: CompletionBackend + 'static,
{
    let provided = request
        .headers()
        .get(API_KEY_HEADER)
        .and_then(|value| value.to_str().ok());

    if provided != Some(state.api_key.as_ref()) {
        return Err(ApiError::Unauthorized);
    }

    Ok(next.run(request).await)
}

#[derive(serde::Serialize)]
pub struct WelcomeResponse {
    pub message: &'static str,
}

#[derive(serde::Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: i64,
}

#[derive(serde::Serialize)]
pub struct ReadyResponse {
    pub status: &'static str,
    pub components: ComponentStatus,
}

#[derive(serde::Serialize)]
pub struct ComponentStatus {
    pub http: &'static str,
    pub corpus_entries: usize,
    pub embedder_mode: &'static str,
    pub completion_model: String,
}

pub async fn root_handler() -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        message: "Welcome to the hrdesk API! Use the /chat endpoint to ask questions with session memory.",
    })
}

#[tracing::instrument]
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        timestamp: chrono::Utc::now().timestamp(),
    })
}

#[tracing::instrument(skip(state))]
pub async fn ready_handler<E, C>(State(state): State<AppState<E, C>>) -> Response
where
    E: Embedder + 'static,
    C: CompletionBackend + 'static,
{
    let corpus_entries = state.engine.corpus().len();
    let embedder_mode = if state.embedder_stub { "stub" } else { "real" };

    Json(ReadyResponse {
        status: if corpus_entries > 0 { "ok" } else { "pending" },
        components: ComponentStatus {
            http: "ready",
            corpus_entries,
            embedder_mode,
            completion_model: state.completion_model.to_string(),
        },
    })
    .into_response()
}

pub async fn openapi_handler() -> Json<serde_json::Value> {
    Json(openapi::openapi_document())
}
