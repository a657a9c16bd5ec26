use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Request-level failures, rendered as `{"error": <message>}` with the
/// matching status code. The missing-date message is part of the public
/// contract and must not drift.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Date parameter is required (YYYY-MM-DD)")]
    MissingDate,
    #[error("Invalid date parameter {0:?} (expected YYYY-MM-DD)")]
    InvalidDate(String),
    #[error("Invalid vetId parameter {0:?}")]
    InvalidVetId(String),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingDate | ApiError::InvalidDate(_) | ApiError::InvalidVetId(_) => {
                StatusCode::BAD_REQUEST
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(serde_json::json!({ "error": self.to_string() }));
        (self.status(), body).into_response()
    }
}
