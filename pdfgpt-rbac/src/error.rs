//! Error types for RBAC operations

use thiserror::Error;

use pdfgpt_interfaces::StoreError;

/// Result type for RBAC operations
pub type RbacResult<T> = Result<T, RbacError>;

/// RBAC-specific errors
#[derive(Error, Debug)]
pub enum RbacError {
    /// Profile store operation failed
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Email/password pair did not verify
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Cached session identity exceeded the staleness bound and could not
    /// be re-verified against the profile store
    #[error("Session identity is stale: last verified {age_seconds}s ago")]
    SessionStale { age_seconds: i64 },

    /// Generic internal error
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl RbacError {
    /// Create a new internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Whether this error must surface to the caller as an access denial
    pub fn is_denial(&self) -> bool {
        matches!(self, Self::InvalidCredentials | Self::SessionStale { .. })
    }
}
