//! Web-specific error types and conversions
//!
//! Error types that map onto HTTP responses with a JSON error envelope.
//! Route-guard denials never pass through here; they resolve as redirects.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Web-specific error type for HTTP API operations
#[derive(Debug, Error)]
pub enum WebError {
    #[error("Bad request: {message}")]
    BadRequest { message: String },

    #[error("Unauthorized: {message}")]
    Unauthorized { message: String },

    #[error("Forbidden: {message}")]
    Forbidden { message: String },

    #[error("Not found: {message}")]
    NotFound { message: String },

    #[error("Internal server error: {message}")]
    Internal { message: String },
}

/// Result type for web operations
pub type WebResult<T> = Result<T, WebError>;

impl WebError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            WebError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            WebError::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            WebError::Forbidden { .. } => StatusCode::FORBIDDEN,
            WebError::NotFound { .. } => StatusCode::NOT_FOUND,
            WebError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get error code for API responses
    pub fn error_code(&self) -> &'static str {
        match self {
            WebError::BadRequest { .. } => "BAD_REQUEST",
            WebError::Unauthorized { .. } => "UNAUTHORIZED",
            WebError::Forbidden { .. } => "FORBIDDEN",
            WebError::NotFound { .. } => "NOT_FOUND",
            WebError::Internal { .. } => "INTERNAL_ERROR",
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = json!({
            "error": {
                "code": self.error_code(),
                "message": self.to_string(),
            }
        });
        (status, Json(body)).into_response()
    }
}
