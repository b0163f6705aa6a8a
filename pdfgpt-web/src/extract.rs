//! Request extractors

use axum::{extract::FromRequestParts, http::request::Parts};

use pdfgpt_api_types::SessionIdentity;

use crate::errors::WebError;

/// Extracts the session identity attached by the host application.
/// Handlers that take this extractor reject unauthenticated requests with
/// a 401 rather than a redirect, for API-style surfaces.
#[derive(Debug, Clone, Copy)]
pub struct CurrentSession(pub SessionIdentity);

impl<S> FromRequestParts<S> for CurrentSession
where
    S: Send + Sync,
{
    type Rejection = WebError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<SessionIdentity>()
            .copied()
            .map(CurrentSession)
            .ok_or_else(|| WebError::Unauthorized {
                message: "Authentication required".to_string(),
            })
    }
}
