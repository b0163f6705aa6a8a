//! Entitlement resolution
//!
//! Pure functions deriving capabilities from a role, the orthogonal admin
//! flag, and live usage counters. Nothing here performs I/O or caches state;
//! every call is a fresh projection of its inputs.

use pdfgpt_api_types::{DashboardStats, UsageSnapshot, UserFeatures, UserRole};
use pdfgpt_interfaces::UsageRepository;
use uuid::Uuid;

use crate::error::RbacResult;
use crate::permissions::permissions_for;

/// True only for the super admin role
pub fn is_super_admin(role: UserRole) -> bool {
    role == UserRole::SuperAdmin
}

/// Admin-level access is an OR of three independent signals: either admin
/// role, or the explicit per-account admin flag. The flag grants admin
/// access without changing the billing-relevant role.
pub fn is_admin_level(role: UserRole, is_admin_flag: bool) -> bool {
    role == UserRole::SuperAdmin || role == UserRole::Admin || is_admin_flag
}

/// Admin roles implicitly carry Pro-tier entitlements
pub fn is_pro_level(role: UserRole) -> bool {
    matches!(role, UserRole::SuperAdmin | UserRole::Admin | UserRole::ProUser)
}

/// Derive the feature flags consumed by UI rendering.
///
/// A missing usage snapshot defaults both counters to zero, so a fresh or
/// unknown account behaves as under quota. `near_limit` is a soft warning
/// that only ever fires for free accounts; it drives upgrade prompts and is
/// never used for access denial.
pub fn derive_features(role: UserRole, usage: Option<UsageSnapshot>) -> UserFeatures {
    let permissions = permissions_for(role);
    let usage = usage.unwrap_or_default();

    let near_limit = role == UserRole::FreeUser
        && (permissions.pdf_limit.near(usage.pdf_count)
            || permissions.monthly_uploads.near(usage.monthly_uploads));

    UserFeatures {
        can_upload: permissions.monthly_uploads.allows(usage.monthly_uploads)
            && permissions.pdf_limit.allows(usage.pdf_count),
        can_search: true,
        can_semantic_search: permissions.can_access_ai_features,
        can_ask_questions: permissions.can_access_ai_features,
        can_summarize: permissions.can_access_ai_features,
        can_access_shop: true,
        show_upgrade_banner: role == UserRole::FreeUser,
        near_limit,
    }
}

/// Read the live counters for a user and derive their feature flags. Store
/// failures propagate; quota-gated features are never granted on a counter
/// that could not be read.
pub async fn derive_features_for<U: UsageRepository>(
    usage_store: &U,
    user_id: Uuid,
    role: UserRole,
) -> RbacResult<UserFeatures> {
    let usage = usage_store.usage_for(user_id).await?;
    Ok(derive_features(role, Some(usage)))
}

/// Pair live counters with the role's quotas for dashboard rendering
pub fn usage_overview(role: UserRole, usage: UsageSnapshot) -> DashboardStats {
    let permissions = permissions_for(role);
    DashboardStats {
        total_pdfs: usage.pdf_count,
        pdf_limit: permissions.pdf_limit,
        monthly_uploads_used: usage.monthly_uploads,
        monthly_uploads_limit: permissions.monthly_uploads,
    }
}
