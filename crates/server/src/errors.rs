use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use service::errors::ServiceError;
use thiserror::Error;
use tracing::warn;

/// Errors surfaced by handlers. Every variant renders as `{"detail": ...}`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Service(#[from] ServiceError),
    #[error(transparent)]
    Body(#[from] JsonRejection),
    #[error(transparent)]
    Query(#[from] QueryRejection),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Service(ServiceError::InvalidFormat(_) | ServiceError::InvalidValue(_)) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::Body(rejection) => rejection.status(),
            ApiError::Query(rejection) => rejection.status(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let msg = match &self {
            ApiError::Service(e) => e.message().to_string(),
            ApiError::Body(rejection) => rejection.body_text(),
            ApiError::Query(rejection) => rejection.body_text(),
        };
        warn!(status = status.as_u16(), error = %msg, "request rejected");
        (status, Json(serde_json::json!({"detail": msg}))).into_response()
    }
}
