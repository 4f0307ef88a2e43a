//! Error codes carried in every [`ErrorResponse`](super::ErrorResponse).
//!
//! ```rust
//! use axum_helpers::errors::ErrorCode;
//!
//! assert_eq!(ErrorCode::NotFound.as_str(), "NOT_FOUND");
//! assert_eq!(ErrorCode::NotFound.code(), 1004);
//! ```

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Standardized error codes for API responses.
///
/// Client errors live in 1000-1999, storage errors in 2000-2999.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Malformed request input
    BadRequest,
    /// Path parameter could not be parsed
    InvalidPathParam,
    /// Query string missing a parameter or holding an unparsable one
    InvalidQuery,
    /// Requested resource was not found
    NotFound,
    /// HTTP method not supported on this route
    MethodNotAllowed,
    /// Backing store rejected or failed the operation
    DatabaseError,
}

impl ErrorCode {
    /// Machine-readable identifier for clients
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BadRequest => "BAD_REQUEST",
            Self::InvalidPathParam => "INVALID_PATH_PARAM",
            Self::InvalidQuery => "INVALID_QUERY",
            Self::NotFound => "NOT_FOUND",
            Self::MethodNotAllowed => "METHOD_NOT_ALLOWED",
            Self::DatabaseError => "DATABASE_ERROR",
        }
    }

    /// Integer code for logs and dashboards
    pub fn code(&self) -> i32 {
        match self {
            Self::BadRequest => 1000,
            Self::InvalidPathParam => 1002,
            Self::InvalidQuery => 1003,
            Self::NotFound => 1004,
            Self::MethodNotAllowed => 1006,
            Self::DatabaseError => 2003,
        }
    }

    pub fn default_message(&self) -> &'static str {
        match self {
            Self::BadRequest => "Malformed request",
            Self::InvalidPathParam => "Invalid path parameter",
            Self::InvalidQuery => "Invalid query parameters",
            Self::NotFound => "Resource not found",
            Self::MethodNotAllowed => "The HTTP method is not allowed for this resource",
            Self::DatabaseError => "Database error occurred",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
