use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use hrdesk::resolve::ResolveError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("unauthorized API key")]
    Unauthorized,

    #[error("employee not found")]
    EmployeeNotFound,

    #[error("resolution failed: {0}")]
    Resolution(#[from] ResolveError),
}

#[derive(serde::Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::Unauthorized => StatusCode::FORBIDDEN,
            ApiError::EmployeeNotFound => StatusCode::NOT_FOUND,
            ApiError::Resolution(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(ErrorResponse {
            error: self.to_string(),
            code: status.as_u16(),
        });

        (status, body).into_response()
    }
}
