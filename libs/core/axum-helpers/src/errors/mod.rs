pub mod codes;
pub mod handlers;
pub mod responses;

pub use codes::ErrorCode;

use axum::{
    Json,
    extract::rejection::{PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// Error body returned by every failing endpoint.
///
/// ```json
/// {
///   "code": 1004,
///   "error": "NOT_FOUND",
///   "message": "Event not found with id: 42"
/// }
/// ```
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Integer error code for logging and monitoring
    pub code: i32,
    /// Machine-readable error identifier
    pub error: String,
    /// Human-readable error message
    pub message: String,
    /// Optional structured details
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

/// Application error type that renders as an [`ErrorResponse`].
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    #[error("Query rejected: {0}")]
    Query(#[from] QueryRejection),

    #[error("Path rejected: {0}")]
    Path(#[from] PathRejection),

    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Invalid path parameter: {0}")]
    InvalidPathParam(String),

    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl AppError {
    fn parts(self) -> (StatusCode, ErrorCode, String) {
        match self {
            AppError::Query(rejection) => {
                tracing::info!(
                    error_code = ErrorCode::InvalidQuery.code(),
                    "Query rejected: {}",
                    rejection
                );
                (
                    StatusCode::BAD_REQUEST,
                    ErrorCode::InvalidQuery,
                    rejection.body_text(),
                )
            }
            AppError::Path(rejection) => {
                tracing::info!(
                    error_code = ErrorCode::InvalidPathParam.code(),
                    "Path rejected: {}",
                    rejection
                );
                (
                    StatusCode::BAD_REQUEST,
                    ErrorCode::InvalidPathParam,
                    rejection.body_text(),
                )
            }
            AppError::BadRequest(msg) => {
                tracing::info!(error_code = ErrorCode::BadRequest.code(), "Bad request: {}", msg);
                (StatusCode::BAD_REQUEST, ErrorCode::BadRequest, msg)
            }
            AppError::InvalidPathParam(msg) => {
                tracing::info!(
                    error_code = ErrorCode::InvalidPathParam.code(),
                    "Invalid path parameter: {}",
                    msg
                );
                (StatusCode::BAD_REQUEST, ErrorCode::InvalidPathParam, msg)
            }
            AppError::NotFound(msg) => {
                tracing::info!(error_code = ErrorCode::NotFound.code(), "Not found: {}", msg);
                (StatusCode::NOT_FOUND, ErrorCode::NotFound, msg)
            }
            AppError::Database(msg) => {
                tracing::error!(
                    error_code = ErrorCode::DatabaseError.code(),
                    "Database error: {}",
                    msg
                );
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorCode::DatabaseError,
                    ErrorCode::DatabaseError.default_message().to_string(),
                )
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = self.parts();
        error_response(status, message, code)
    }
}

/// Build an error response without going through [`AppError`].
pub fn error_response(status: StatusCode, message: String, error_code: ErrorCode) -> Response {
    let body = Json(ErrorResponse {
        code: error_code.code(),
        error: error_code.as_str().to_string(),
        message,
        details: None,
    });

    (status, body).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn body_of(response: Response) -> ErrorResponse {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_not_found_keeps_message() {
        let response = AppError::NotFound("Event not found with id: 7".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = body_of(response).await;
        assert_eq!(body.code, 1004);
        assert_eq!(body.error, "NOT_FOUND");
        assert_eq!(body.message, "Event not found with id: 7");
        assert!(body.details.is_none());
    }

    #[tokio::test]
    async fn test_database_error_hides_driver_message() {
        let response =
            AppError::Database("connection refused (os error 111)".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_of(response).await;
        assert_eq!(body.error, "DATABASE_ERROR");
        assert_eq!(body.message, "Database error occurred");
    }

    #[tokio::test]
    async fn test_bad_request_is_400() {
        let response = AppError::BadRequest("nope".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_of(response).await.code, 1000);
    }
}
