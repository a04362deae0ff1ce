use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// API error surface. The response envelope matches the simulation
/// contract: 404 carries `{"code": 404, "data": {}}`, every other failure
/// comes back as `{"code": 400, "errors": ...}`.
#[derive(Debug)]
pub enum AppError {
    NotFound,
    BadRequest(String),
    Internal(String),
    Anyhow(anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::NotFound => {
                (StatusCode::NOT_FOUND, Json(json!({ "code": 404, "data": {} }))).into_response()
            }
            AppError::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "code": 400, "errors": msg })),
            )
                .into_response(),
            AppError::Internal(msg) => {
                tracing::error!("request failed: {}", msg);
                (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "code": 400, "errors": msg })),
                )
                    .into_response()
            }
            AppError::Anyhow(err) => {
                tracing::error!("request failed: {}", err);
                (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "code": 400, "errors": err.to_string() })),
                )
                    .into_response()
            }
        }
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self::Anyhow(err.into())
    }
}
