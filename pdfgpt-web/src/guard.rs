//! HTTP middleware enforcing the route policy
//!
//! Runs on every navigation before a protected resource is served. The host
//! application attaches a [`SessionIdentity`] to request extensions after
//! projecting the session token; requests without one are treated as
//! unauthenticated.

use std::sync::Arc;

use axum::{
    body::Body,
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use tracing::debug;

use pdfgpt_api_types::SessionIdentity;

use crate::policy::{RouteDecision, RoutePolicy, RoutePolicyConfig};

/// Route guard middleware state
#[derive(Debug, Clone)]
pub struct RouteGuard {
    policy: RoutePolicy,
}

impl RouteGuard {
    /// Create a guard over an explicit policy
    pub fn new(policy: RoutePolicy) -> Self {
        Self { policy }
    }

    /// Guard with the default route table
    pub fn with_defaults() -> Self {
        Self::new(RoutePolicy::new(RoutePolicyConfig::default()))
    }

    pub fn policy(&self) -> &RoutePolicy {
        &self.policy
    }

    /// Middleware function for route-level authorization
    pub async fn guard_request(
        State(guard): State<Arc<RouteGuard>>,
        request: Request<Body>,
        next: Next,
    ) -> Response {
        let path = request.uri().path().to_owned();
        let session = request.extensions().get::<SessionIdentity>().copied();

        match guard.policy.evaluate(&path, session.as_ref()) {
            RouteDecision::Allow => next.run(request).await,
            RouteDecision::RedirectToLogin => {
                debug!(path = %path, "unauthenticated request, redirecting to login");
                Redirect::temporary(&guard.policy.config.login_path).into_response()
            }
            RouteDecision::RedirectToDashboard => {
                debug!(
                    path = %path,
                    role = session.map(|s| s.role.as_str()).unwrap_or("none"),
                    "insufficient role, redirecting to dashboard"
                );
                Redirect::temporary(&guard.policy.config.dashboard_path).into_response()
            }
        }
    }
}
