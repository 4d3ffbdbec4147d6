use axum::{
    Json,
    extract::{Query, State},
    http::{HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use hrdesk::resolve::HRDESK_STATUS_HEADER;

use super::error::ApiError;
use super::state::AppState;
use hrdesk::completion::CompletionBackend;
use hrdesk::embedding::Embedder;

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub query: String,
    /// Opaque session identifier supplied by the caller.
    pub session_id: String,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub response: String,
}

#[derive(Debug, Deserialize)]
pub struct ClassifyParams {
    pub query: String,
}

#[derive(Debug, Serialize)]
pub struct ClassifyResponse {
    pub query: String,
    pub category: String,
}

#[derive(Debug, Deserialize)]
pub struct LeaveBalanceParams {
    pub session_id: String,
}

#[derive(Debug, Serialize)]
pub struct LeaveBalanceResponse {
    pub session_id: String,
    pub leave_balance: i64,
}

#[instrument(skip(state, request), fields(session_id = %request.session_id))]
pub async fn chat_handler<E, C>(
    State(state): State<AppState<E, C>>,
    Json(request): Json<ChatRequest>,
) -> Result<Response, ApiError>
where
    E: Embedder + 'static,
    C: CompletionBackend + 'static,
{
    let resolution = state
        .engine
        .answer(&request.query, &request.session_id)
        .await?;

    let status = resolution.status();
    debug!(status = %status, "Chat turn resolved");

    let mut headers = HeaderMap::new();
    headers.insert(
        HRDESK_STATUS_HEADER,
        HeaderValue::from_static(status.as_header_value()),
    );

    Ok((
        StatusCode::OK,
        headers,
        Json(ChatResponse {
            response: resolution.into_text(),
        }),
    )
        .into_response())
}

#[instrument(skip(state, params))]
pub async fn classify_handler<E, C>(
    State(state): State<AppState<E, C>>,
    Query(params): Query<ClassifyParams>,
) -> Result<Json<ClassifyResponse>, ApiError>
where
    E: Embedder + 'static,
    C: CompletionBackend + 'static,
{
    let category = state.engine.classify(&params.query)?;

    Ok(Json(ClassifyResponse {
        query: params.query,
        category,
    }))
}

#[instrument(skip(state, params))]
pub async fn leave_balance_handler<E, C>(
    State(state): State<AppState<E, C>>,
    Query(params): Query<LeaveBalanceParams>,
) -> Result<Json<LeaveBalanceResponse>, ApiError>
where
    E: Embedder + 'static,
    C: CompletionBackend + 'static,
{
    let balance = state
        .employee_directory
        .get(&params.session_id)
        .copied()
        .ok_or(ApiError::EmployeeNotFound)?;

    Ok(Json(LeaveBalanceResponse {
        session_id: params.session_id,
        leave_balance: balance,
    }))
}
