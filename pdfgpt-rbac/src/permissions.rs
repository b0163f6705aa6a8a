//! Static permission table keyed by role
//!
//! The table is process-wide, immutable, and total: `permissions_for` is a
//! constant-time match over a closed enum, so a role without an entry cannot
//! compile. No API mutates the table at runtime.

use pdfgpt_api_types::{Quota, UserRole};
use serde::{Deserialize, Serialize};

/// Capabilities and quotas associated with one role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PermissionSet {
    pub can_manage_users: bool,
    pub can_manage_admins: bool,
    pub can_manage_pdf_shop: bool,
    pub can_upload_to_pdf_shop: bool,
    pub can_create_promotions: bool,
    pub can_run_marketing: bool,
    pub can_access_ai_features: bool,
    pub can_access_premium_features: bool,
    pub pdf_limit: Quota,
    pub monthly_uploads: Quota,
}

const SUPER_ADMIN: PermissionSet = PermissionSet {
    can_manage_users: true,
    can_manage_admins: true,
    can_manage_pdf_shop: true,
    can_upload_to_pdf_shop: true,
    can_create_promotions: true,
    can_run_marketing: true,
    can_access_ai_features: true,
    can_access_premium_features: true,
    pdf_limit: Quota::Unlimited,
    monthly_uploads: Quota::Unlimited,
};

const ADMIN: PermissionSet = PermissionSet {
    can_manage_users: false,
    can_manage_admins: false,
    can_manage_pdf_shop: false,
    can_upload_to_pdf_shop: true,
    can_create_promotions: true,
    can_run_marketing: true,
    can_access_ai_features: true,
    can_access_premium_features: true,
    pdf_limit: Quota::Unlimited,
    monthly_uploads: Quota::Unlimited,
};

const PRO_USER: PermissionSet = PermissionSet {
    can_manage_users: false,
    can_manage_admins: false,
    can_manage_pdf_shop: false,
    can_upload_to_pdf_shop: false,
    can_create_promotions: false,
    can_run_marketing: false,
    can_access_ai_features: true,
    can_access_premium_features: true,
    pdf_limit: Quota::Limited(1000),
    monthly_uploads: Quota::Unlimited,
};

const FREE_USER: PermissionSet = PermissionSet {
    can_manage_users: false,
    can_manage_admins: false,
    can_manage_pdf_shop: false,
    can_upload_to_pdf_shop: false,
    can_create_promotions: false,
    can_run_marketing: false,
    can_access_ai_features: false,
    can_access_premium_features: false,
    pdf_limit: Quota::Limited(10),
    monthly_uploads: Quota::Limited(10),
};

/// Look up the permission set for a role
pub fn permissions_for(role: UserRole) -> &'static PermissionSet {
    match role {
        UserRole::SuperAdmin => &SUPER_ADMIN,
        UserRole::Admin => &ADMIN,
        UserRole::ProUser => &PRO_USER,
        UserRole::FreeUser => &FREE_USER,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_total() {
        for role in UserRole::ALL {
            let _ = permissions_for(role);
        }
    }

    #[test]
    fn test_admin_roles_have_unbounded_quotas() {
        for role in [UserRole::SuperAdmin, UserRole::Admin] {
            let perms = permissions_for(role);
            assert_eq!(perms.pdf_limit, Quota::Unlimited);
            assert_eq!(perms.monthly_uploads, Quota::Unlimited);
        }
    }

    #[test]
    fn test_pro_user_quotas() {
        let perms = permissions_for(UserRole::ProUser);
        assert_eq!(perms.pdf_limit, Quota::Limited(1000));
        assert_eq!(perms.monthly_uploads, Quota::Unlimited);
        assert!(perms.can_access_ai_features);
        assert!(!perms.can_upload_to_pdf_shop);
    }

    #[test]
    fn test_free_user_is_most_restrictive() {
        let perms = permissions_for(UserRole::FreeUser);
        assert_eq!(perms.pdf_limit, Quota::Limited(10));
        assert_eq!(perms.monthly_uploads, Quota::Limited(10));
        assert!(!perms.can_access_ai_features);
        assert!(!perms.can_access_premium_features);
        assert!(!perms.can_manage_users);
    }

    #[test]
    fn test_only_super_admin_manages_users() {
        for role in UserRole::ALL {
            let perms = permissions_for(role);
            assert_eq!(perms.can_manage_users, role == UserRole::SuperAdmin);
            assert_eq!(perms.can_manage_admins, role == UserRole::SuperAdmin);
            assert_eq!(perms.can_manage_pdf_shop, role == UserRole::SuperAdmin);
        }
    }
}
