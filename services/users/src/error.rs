//! Custom error types for the users service

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::schemas::ErrorResponse;

/// Schema validation failure
///
/// `InvalidFormat` carries the offending field; `InvalidInput` is a
/// whole-object rule with no field attribution.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{field}: {message}")]
    InvalidFormat { field: &'static str, message: String },

    #[error("{message}")]
    InvalidInput { message: String },
}

impl ValidationError {
    pub fn invalid_format(field: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidFormat {
            field,
            message: message.into(),
        }
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }
}

/// Custom error type for the users service
#[derive(Error, Debug)]
pub enum ApiError {
    /// Request payload failed schema validation
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// No or invalid credential
    #[error("Unauthorized")]
    Unauthorized,

    /// Login with an unknown email or a wrong password
    ///
    /// One variant for both so login never reveals whether an account
    /// exists.
    #[error("Incorrect email or password")]
    InvalidCredentials,

    /// Authenticated but insufficient privilege
    #[error("Forbidden")]
    Forbidden,

    /// Target resource does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Uniqueness conflict
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Rate limit exceeded
    #[error("Too many requests")]
    TooManyRequests,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] common::error::DatabaseError),

    /// Internal server error
    #[error("Internal server error")]
    InternalServerError,
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Unauthorized | ApiError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden => StatusCode::FORBIDDEN,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::TooManyRequests => StatusCode::TOO_MANY_REQUESTS,
            ApiError::Database(_) | ApiError::InternalServerError => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let (error_message, details) = match self {
            ApiError::Validation(err) => ("Validation failed".to_string(), Some(err.to_string())),
            ApiError::Unauthorized => ("Unauthorized".to_string(), None),
            ApiError::InvalidCredentials => (
                "Unauthorized".to_string(),
                Some("Incorrect email or password.".to_string()),
            ),
            ApiError::Forbidden => ("Forbidden".to_string(), None),
            ApiError::NotFound(details) => ("Not Found".to_string(), Some(details)),
            ApiError::Conflict(details) => ("Conflict".to_string(), Some(details)),
            ApiError::TooManyRequests => (
                "Too many requests".to_string(),
                Some("Try again later".to_string()),
            ),
            ApiError::Database(_) | ApiError::InternalServerError => {
                ("Internal server error".to_string(), None)
            }
        };

        let body = Json(ErrorResponse {
            error: error_message,
            details,
        });

        (status, body).into_response()
    }
}

/// Type alias for users service results
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError::Validation(ValidationError::invalid_format("role", "Invalid role"))
                .status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(ApiError::Unauthorized.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            ApiError::InvalidCredentials.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(ApiError::Forbidden.status_code(), StatusCode::FORBIDDEN);
        assert_eq!(
            ApiError::NotFound("user".to_string()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::Conflict("email".to_string()).status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            ApiError::TooManyRequests.status_code(),
            StatusCode::TOO_MANY_REQUESTS
        );
        assert_eq!(
            ApiError::InternalServerError.status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_validation_error_display_includes_field() {
        let err = ValidationError::invalid_format("role", "Invalid role");
        assert_eq!(err.to_string(), "role: Invalid role");

        let err = ValidationError::invalid_input("At least one field must be provided for update");
        assert_eq!(
            err.to_string(),
            "At least one field must be provided for update"
        );
    }

    #[test]
    fn test_forbidden_and_unauthorized_are_distinct_statuses() {
        assert_ne!(
            ApiError::Forbidden.status_code(),
            ApiError::Unauthorized.status_code()
        );
        assert_ne!(
            ApiError::Forbidden.status_code(),
            ApiError::NotFound("x".to_string()).status_code()
        );
    }
}
