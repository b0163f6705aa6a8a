//! Unified API types for the PDF-GPT access control core
//!
//! This crate provides the serializable domain types shared by the RBAC
//! core and the web layer, so both operate on the same data shapes as the
//! external profile, usage, and identity collaborators.

pub mod domain;
pub mod enums;

// Re-export main types for convenience
pub use domain::{
    DashboardStats, ExternalPrincipal, Quota, SessionIdentity, UsageSnapshot, UserFeatures, UserProfile,
};
pub use enums::{AuthProvider, SubscriptionStatus, UserRole};
