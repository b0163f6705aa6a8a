//! Domain records exchanged with the profile, usage, and identity collaborators

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::enums::{AuthProvider, SubscriptionStatus, UserRole};

/// Fraction of a finite quota at which an account counts as near its limit
pub const NEAR_LIMIT_RATIO: f64 = 0.8;

/// An upload or storage quota. `Unlimited` always satisfies its comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Option<u32>", into = "Option<u32>")]
pub enum Quota {
    Unlimited,
    Limited(u32),
}

impl Quota {
    /// Whether one more unit fits under this quota
    pub fn allows(&self, used: u32) -> bool {
        match self {
            Quota::Unlimited => true,
            Quota::Limited(limit) => used < *limit,
        }
    }

    /// Whether usage has reached the warning threshold. Never true for
    /// `Unlimited`.
    pub fn near(&self, used: u32) -> bool {
        match self {
            Quota::Unlimited => false,
            Quota::Limited(limit) => f64::from(used) >= f64::from(*limit) * NEAR_LIMIT_RATIO,
        }
    }
}

// Unbounded quotas travel as JSON null
impl From<Option<u32>> for Quota {
    fn from(value: Option<u32>) -> Self {
        match value {
            Some(limit) => Quota::Limited(limit),
            None => Quota::Unlimited,
        }
    }
}

impl From<Quota> for Option<u32> {
    fn from(value: Quota) -> Self {
        match value {
            Quota::Limited(limit) => Some(limit),
            Quota::Unlimited => None,
        }
    }
}

/// Stored profile record, keyed by user id in the profile store
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: Uuid,
    pub email: String,
    pub name: Option<String>,
    pub avatar_url: Option<String>,
    pub role: UserRole,
    /// Role-independent admin grant. A Pro user on staff keeps the
    /// billing-relevant role and gains admin access through this flag.
    pub is_admin: bool,
    pub subscription_status: SubscriptionStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserProfile {
    /// Default record created on first federated sign-in
    pub fn new_free(id: Uuid, email: String, name: Option<String>, avatar_url: Option<String>) -> Self {
        let now = Utc::now();
        Self {
            id,
            email,
            name,
            avatar_url,
            role: UserRole::FreeUser,
            is_admin: false,
            subscription_status: SubscriptionStatus::None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Project this profile into the identity attached to a session
    pub fn session_identity(&self) -> SessionIdentity {
        SessionIdentity {
            role: self.role,
            is_admin: self.is_admin,
        }
    }
}

/// Authenticated identity supplied by the external identity provider
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExternalPrincipal {
    pub external_id: String,
    pub email: String,
    pub name: Option<String>,
    pub avatar_url: Option<String>,
    pub provider: AuthProvider,
}

/// Role and admin flag attached to every authenticated request context
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionIdentity {
    pub role: UserRole,
    pub is_admin: bool,
}

impl SessionIdentity {
    pub fn new(role: UserRole, is_admin: bool) -> Self {
        Self { role, is_admin }
    }
}

/// Live usage counters read from the usage store, per request
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageSnapshot {
    /// Total documents currently stored
    pub pdf_count: u32,
    /// Uploads consumed in the current billing cycle
    pub monthly_uploads: u32,
}

impl UsageSnapshot {
    pub fn new(pdf_count: u32, monthly_uploads: u32) -> Self {
        Self {
            pdf_count,
            monthly_uploads,
        }
    }
}

/// Feature flags consumed by UI rendering. Recomputed on every evaluation,
/// never cached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserFeatures {
    pub can_upload: bool,
    pub can_search: bool,
    pub can_semantic_search: bool,
    pub can_ask_questions: bool,
    pub can_summarize: bool,
    pub can_access_shop: bool,
    pub show_upgrade_banner: bool,
    pub near_limit: bool,
}

/// Quota usage overview for the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_pdfs: u32,
    pub pdf_limit: Quota,
    pub monthly_uploads_used: u32,
    pub monthly_uploads_limit: Quota,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quota_allows() {
        assert!(Quota::Unlimited.allows(u32::MAX));
        assert!(Quota::Limited(10).allows(9));
        assert!(!Quota::Limited(10).allows(10));
        assert!(!Quota::Limited(0).allows(0));
    }

    #[test]
    fn test_quota_near_threshold() {
        assert!(!Quota::Unlimited.near(u32::MAX));
        assert!(Quota::Limited(10).near(8));
        assert!(!Quota::Limited(10).near(7));
        assert!(Quota::Limited(1000).near(800));
        assert!(!Quota::Limited(1000).near(799));
    }

    #[test]
    fn test_quota_wire_format() {
        assert_eq!(serde_json::to_string(&Quota::Unlimited).unwrap(), "null");
        assert_eq!(serde_json::to_string(&Quota::Limited(10)).unwrap(), "10");
        assert_eq!(serde_json::from_str::<Quota>("null").unwrap(), Quota::Unlimited);
        assert_eq!(serde_json::from_str::<Quota>("1000").unwrap(), Quota::Limited(1000));
    }

    #[test]
    fn test_new_free_profile_defaults() {
        let profile = UserProfile::new_free(Uuid::new_v4(), "a@b.test".to_string(), None, None);
        assert_eq!(profile.role, UserRole::FreeUser);
        assert!(!profile.is_admin);
        assert_eq!(profile.subscription_status, SubscriptionStatus::None);
    }

    #[test]
    fn test_session_identity_projection() {
        let mut profile = UserProfile::new_free(Uuid::new_v4(), "a@b.test".to_string(), None, None);
        profile.role = UserRole::ProUser;
        profile.is_admin = true;

        let identity = profile.session_identity();
        assert_eq!(identity.role, UserRole::ProUser);
        assert!(identity.is_admin);
    }

    #[test]
    fn test_usage_snapshot_default_is_under_quota() {
        let usage = UsageSnapshot::default();
        assert_eq!(usage.pdf_count, 0);
        assert_eq!(usage.monthly_uploads, 0);
    }
}
