use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use tracing::error;
use utoipa::ToSchema;

use pressure_guide_domain::services::{ClockError, InsightServiceError};

/// Error response format for API
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Error type/code - machine-readable identifier
    pub error: String,

    /// Human-readable error message
    pub message: String,

    /// Optional additional details about the error
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    /// Create a not found error response
    pub fn not_found(resource: &str) -> Self {
        Self {
            error: "not_found".to_string(),
            message: format!("The requested {} could not be found", resource),
            details: None,
        }
    }

    /// Create a validation error response
    pub fn validation_error(message: &str, details: Option<serde_json::Value>) -> Self {
        Self {
            error: "validation_error".to_string(),
            message: message.to_string(),
            details,
        }
    }

    /// Create a bad request error response
    pub fn bad_request(message: &str) -> Self {
        Self {
            error: "bad_request".to_string(),
            message: message.to_string(),
            details: None,
        }
    }

    /// Create an internal error response
    pub fn internal_error() -> Self {
        Self {
            error: "internal_error".to_string(),
            message: "An unexpected error occurred".to_string(),
            details: None,
        }
    }
}

impl IntoResponse for ErrorResponse {
    fn into_response(self) -> Response {
        let status = match self.error.as_str() {
            "not_found" => StatusCode::NOT_FOUND,
            "validation_error" => StatusCode::BAD_REQUEST,
            "bad_request" => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, Json(self)).into_response()
    }
}

impl From<InsightServiceError> for ErrorResponse {
    fn from(err: InsightServiceError) -> Self {
        match err {
            InsightServiceError::Validation(issues) => {
                let details = serde_json::to_value(&issues).ok();
                ErrorResponse::validation_error("Reading failed validation", details)
            }
            InsightServiceError::NotFound(_) => ErrorResponse::not_found("blood pressure reading"),
            InsightServiceError::Repository(msg) => {
                error!("Storage error: {}", msg);
                ErrorResponse::internal_error()
            }
        }
    }
}

/// Problems with query parameters that the engine cannot work with
#[derive(Debug, Error)]
pub enum QueryError {
    #[error("start ({start}) must not be after end ({end})")]
    InvertedRange { start: i64, end: i64 },

    #[error(transparent)]
    Clock(#[from] ClockError),
}

impl From<QueryError> for ErrorResponse {
    fn from(err: QueryError) -> Self {
        ErrorResponse::bad_request(&err.to_string())
    }
}
