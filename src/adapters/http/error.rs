//! HTTP error mapping - converts domain errors to API responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json};
use serde::Serialize;

use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};

/// Standard error response for API errors.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling.
    pub error_code: String,
    /// Human-readable error message.
    pub message: String,
    /// Additional details (optional).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    /// Create a new error response.
    pub fn new(error_code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error_code: error_code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Create an error response with details.
    pub fn with_details(
        error_code: impl Into<String>,
        message: impl Into<String>,
        details: serde_json::Value,
    ) -> Self {
        Self {
            error_code: error_code.into(),
            message: message.into(),
            details: Some(details),
        }
    }
}

/// API error type that converts domain errors to HTTP responses.
#[derive(Debug)]
pub struct ApiError(DomainError);

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = match self.0.code {
            ErrorCode::ValidationFailed
            | ErrorCode::EmptyField
            | ErrorCode::OutOfRange
            | ErrorCode::InvalidFormat
            | ErrorCode::EmptyCardDraw => StatusCode::BAD_REQUEST,
            ErrorCode::CardNotFound | ErrorCode::ReportNotFound => StatusCode::NOT_FOUND,
            ErrorCode::RateLimited => StatusCode::TOO_MANY_REQUESTS,
            ErrorCode::AIProviderError => StatusCode::BAD_GATEWAY,
            ErrorCode::DatabaseError | ErrorCode::InternalError => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        if status.is_server_error() {
            tracing::error!(code = %self.0.code, message = %self.0.message, "request failed");
        }

        let body = if self.0.details.is_empty() {
            ErrorResponse::new(self.0.code.to_string(), self.0.message)
        } else {
            let details = serde_json::to_value(&self.0.details).unwrap_or_default();
            ErrorResponse::with_details(self.0.code.to_string(), self.0.message, details)
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_of(code: ErrorCode) -> StatusCode {
        ApiError(DomainError::new(code, "test"))
            .into_response()
            .status()
    }

    #[test]
    fn validation_errors_map_to_bad_request() {
        assert_eq!(status_of(ErrorCode::ValidationFailed), StatusCode::BAD_REQUEST);
        assert_eq!(status_of(ErrorCode::EmptyField), StatusCode::BAD_REQUEST);
        assert_eq!(status_of(ErrorCode::EmptyCardDraw), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn missing_resources_map_to_not_found() {
        assert_eq!(status_of(ErrorCode::CardNotFound), StatusCode::NOT_FOUND);
        assert_eq!(status_of(ErrorCode::ReportNotFound), StatusCode::NOT_FOUND);
    }

    #[test]
    fn provider_failures_map_to_upstream_statuses() {
        assert_eq!(status_of(ErrorCode::RateLimited), StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(status_of(ErrorCode::AIProviderError), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn infrastructure_failures_map_to_internal_error() {
        assert_eq!(status_of(ErrorCode::DatabaseError), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(status_of(ErrorCode::InternalError), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
