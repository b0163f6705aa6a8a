//! Route authorization policy
//!
//! A pure decision function over (path, session). Evaluation order: the
//! public allowlist wins unconditionally, then authentication is required,
//! then the super-admin prefix (which the generic admin flag does not
//! satisfy), then the general admin prefix, then allow.

use pdfgpt_api_types::SessionIdentity;
use pdfgpt_rbac::entitlements::{is_admin_level, is_super_admin};

/// Outcome of evaluating a navigation against the route policy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDecision {
    Allow,
    /// No valid session on a protected path
    RedirectToLogin,
    /// Authenticated but lacking the role the path requires. Denial is a
    /// silent redirect, so admin paths are not revealed to non-admins.
    RedirectToDashboard,
}

/// Route policy configuration
#[derive(Debug, Clone)]
pub struct RoutePolicyConfig {
    /// Exact-match paths that never require authentication
    pub public_routes: Vec<String>,
    /// Identity-provider callback paths, matched by prefix
    pub auth_callback_prefix: String,
    /// Paths requiring the super admin role
    pub super_admin_prefix: String,
    /// Paths requiring admin-level access
    pub admin_prefix: String,
    /// Redirect target for unauthenticated requests
    pub login_path: String,
    /// Default authenticated landing page, used as the denial target
    pub dashboard_path: String,
}

impl Default for RoutePolicyConfig {
    fn default() -> Self {
        Self {
            public_routes: vec![
                "/".to_string(),
                "/pricing".to_string(),
                "/auth/login".to_string(),
                "/auth/signup".to_string(),
                "/auth/forgot-password".to_string(),
                "/auth/reset-password".to_string(),
                "/auth/error".to_string(),
            ],
            auth_callback_prefix: "/api/auth".to_string(),
            super_admin_prefix: "/admin/super".to_string(),
            admin_prefix: "/admin".to_string(),
            login_path: "/auth/login".to_string(),
            dashboard_path: "/dashboard".to_string(),
        }
    }
}

/// Evaluates navigations against the configured route table
#[derive(Debug, Clone)]
pub struct RoutePolicy {
    pub config: RoutePolicyConfig,
}

impl RoutePolicy {
    pub fn new(config: RoutePolicyConfig) -> Self {
        Self { config }
    }

    /// Decide whether a navigation to `path` is allowed for the given
    /// session, if any
    pub fn evaluate(&self, path: &str, session: Option<&SessionIdentity>) -> RouteDecision {
        if self.is_public(path) {
            return RouteDecision::Allow;
        }

        let Some(identity) = session else {
            return RouteDecision::RedirectToLogin;
        };

        if path.starts_with(&self.config.super_admin_prefix) {
            if !is_super_admin(identity.role) {
                return RouteDecision::RedirectToDashboard;
            }
        } else if path.starts_with(&self.config.admin_prefix)
            && !is_admin_level(identity.role, identity.is_admin)
        {
            return RouteDecision::RedirectToDashboard;
        }

        RouteDecision::Allow
    }

    fn is_public(&self, path: &str) -> bool {
        self.config.public_routes.iter().any(|route| route == path)
            || path.starts_with(&self.config.auth_callback_prefix)
    }
}

impl Default for RoutePolicy {
    fn default() -> Self {
        Self::new(RoutePolicyConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pdfgpt_api_types::UserRole;

    fn policy() -> RoutePolicy {
        RoutePolicy::default()
    }

    fn session(role: UserRole, is_admin: bool) -> SessionIdentity {
        SessionIdentity::new(role, is_admin)
    }

    #[test]
    fn test_public_routes_bypass_auth() {
        let policy = policy();
        assert_eq!(policy.evaluate("/pricing", None), RouteDecision::Allow);
        assert_eq!(policy.evaluate("/", None), RouteDecision::Allow);
        assert_eq!(policy.evaluate("/auth/signup", None), RouteDecision::Allow);
        assert_eq!(
            policy.evaluate("/api/auth/callback/google", None),
            RouteDecision::Allow
        );
    }

    #[test]
    fn test_protected_route_requires_session() {
        let policy = policy();
        assert_eq!(
            policy.evaluate("/dashboard", None),
            RouteDecision::RedirectToLogin
        );
        assert_eq!(
            policy.evaluate("/admin/users", None),
            RouteDecision::RedirectToLogin
        );
    }

    #[test]
    fn test_super_admin_prefix_ignores_admin_flag() {
        let policy = policy();
        let admin = session(UserRole::Admin, true);
        assert_eq!(
            policy.evaluate("/admin/super/system", Some(&admin)),
            RouteDecision::RedirectToDashboard
        );

        let super_admin = session(UserRole::SuperAdmin, false);
        assert_eq!(
            policy.evaluate("/admin/super/system", Some(&super_admin)),
            RouteDecision::Allow
        );
    }

    #[test]
    fn test_admin_prefix_honors_admin_flag() {
        let policy = policy();
        let staff_pro = session(UserRole::ProUser, true);
        assert_eq!(
            policy.evaluate("/admin/shop", Some(&staff_pro)),
            RouteDecision::Allow
        );

        let plain_pro = session(UserRole::ProUser, false);
        assert_eq!(
            policy.evaluate("/admin/shop", Some(&plain_pro)),
            RouteDecision::RedirectToDashboard
        );

        let free = session(UserRole::FreeUser, false);
        assert_eq!(
            policy.evaluate("/admin/marketing", Some(&free)),
            RouteDecision::RedirectToDashboard
        );
    }

    #[test]
    fn test_authenticated_routes_allow_any_role() {
        let policy = policy();
        let free = session(UserRole::FreeUser, false);
        assert_eq!(policy.evaluate("/dashboard", Some(&free)), RouteDecision::Allow);
        assert_eq!(policy.evaluate("/library", Some(&free)), RouteDecision::Allow);
        assert_eq!(policy.evaluate("/settings", Some(&free)), RouteDecision::Allow);
    }

    #[test]
    fn test_public_exact_match_not_prefix() {
        // "/pricing" is public, "/pricing/history" is not
        let policy = policy();
        assert_eq!(
            policy.evaluate("/pricing/history", None),
            RouteDecision::RedirectToLogin
        );
    }
}
