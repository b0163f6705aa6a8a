use serde::{Deserialize, Serialize};

/// Unified enums shared by the RBAC core and the web layer

/// Primary tier of a user account. Exactly one role is assigned per account
/// at any time; the orthogonal `is_admin` flag lives on the profile record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    SuperAdmin,
    Admin,
    ProUser,
    FreeUser,
}

impl UserRole {
    /// All roles, in descending order of privilege
    pub const ALL: [UserRole; 4] = [
        UserRole::SuperAdmin,
        UserRole::Admin,
        UserRole::ProUser,
        UserRole::FreeUser,
    ];

    /// Wire form of the role, matching the stored profile representation
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::SuperAdmin => "super_admin",
            UserRole::Admin => "admin",
            UserRole::ProUser => "pro_user",
            UserRole::FreeUser => "free_user",
        }
    }

    /// Human-readable role name for account screens
    pub fn display_name(&self) -> &'static str {
        match self {
            UserRole::SuperAdmin => "Super Admin",
            UserRole::Admin => "Admin",
            UserRole::ProUser => "Pro",
            UserRole::FreeUser => "Free",
        }
    }
}

/// Billing state of a subscription. Carried on the profile for display;
/// entitlement decisions key off the role alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubscriptionStatus {
    Active,
    Trialing,
    PastDue,
    Canceled,
    None,
}

/// How an external principal was established by the identity provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthProvider {
    Google,
    Github,
    Credentials,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_wire_format() {
        assert_eq!(
            serde_json::to_string(&UserRole::SuperAdmin).unwrap(),
            "\"super_admin\""
        );
        assert_eq!(
            serde_json::from_str::<UserRole>("\"free_user\"").unwrap(),
            UserRole::FreeUser
        );
    }

    #[test]
    fn test_role_as_str_round_trip() {
        for role in UserRole::ALL {
            let json = format!("\"{}\"", role.as_str());
            assert_eq!(serde_json::from_str::<UserRole>(&json).unwrap(), role);
        }
    }

    #[test]
    fn test_unknown_role_rejected() {
        assert!(serde_json::from_str::<UserRole>("\"root\"").is_err());
    }

    #[test]
    fn test_display_names() {
        assert_eq!(UserRole::ProUser.display_name(), "Pro");
        assert_eq!(UserRole::SuperAdmin.display_name(), "Super Admin");
    }
}
