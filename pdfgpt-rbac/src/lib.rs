//! RBAC (Role-Based Access Control) implementation for PDF-GPT
//!
//! This crate provides tiered access control with support for:
//! - A static role taxonomy with per-role permission sets and quotas
//! - Pure entitlement resolution from role plus live usage counters
//! - Session projection from external identities onto stored profiles
//! - Fail-closed session refresh with a bounded staleness window

pub mod entitlements;
pub mod error;
pub mod permissions;
pub mod session;

pub use entitlements::{
    derive_features, derive_features_for, is_admin_level, is_pro_level, is_super_admin, usage_overview,
};
pub use error::{RbacError, RbacResult};
pub use permissions::{permissions_for, PermissionSet};
pub use session::{SessionConfig, SessionProjector, SessionToken};

/// Re-export commonly used types
pub use pdfgpt_api_types::{Quota, SessionIdentity, UsageSnapshot, UserFeatures, UserRole};
