use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EventError {
    #[error("Event not found with id: {0}")]
    NotFound(i64),

    #[error("Invalid scheduledTime '{0}': expected an ISO-8601 instant such as 2025-06-23T17:00:00Z")]
    InvalidTimestamp(String),

    #[error("Database error: {0}")]
    Database(String),
}

pub type EventResult<T> = Result<T, EventError>;

/// Convert EventError to AppError for standardized error responses
impl From<EventError> for AppError {
    fn from(err: EventError) -> Self {
        match err {
            EventError::NotFound(_) => AppError::NotFound(err.to_string()),
            EventError::InvalidTimestamp(_) => AppError::BadRequest(err.to_string()),
            EventError::Database(msg) => AppError::Database(msg),
        }
    }
}

impl IntoResponse for EventError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

impl From<sea_orm::DbErr> for EventError {
    fn from(err: sea_orm::DbErr) -> Self {
        EventError::Database(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_not_found_message_carries_id() {
        assert_eq!(
            EventError::NotFound(99).to_string(),
            "Event not found with id: 99"
        );
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            EventError::NotFound(1).into_response().status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            EventError::InvalidTimestamp("later".into())
                .into_response()
                .status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            EventError::Database("down".into()).into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
