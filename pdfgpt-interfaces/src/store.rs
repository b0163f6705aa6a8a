//! Repository interfaces for the profile and usage stores
//!
//! These traits are the only contract this core has with persistence. The
//! core writes through [`ProfileRepository::create`] exactly once per
//! account, to seed a default record on first federated sign-in; everything
//! else is read-only.

use async_trait::async_trait;
use pdfgpt_api_types::{UsageSnapshot, UserProfile, UserRole};
use uuid::Uuid;

/// Common store error type
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: String, id: String },

    #[error("Constraint violation: {message}")]
    Constraint { message: String },

    #[error("Connection error: {message}")]
    Connection { message: String },

    #[error("Internal store error: {message}")]
    Internal { message: String },
}

impl StoreError {
    pub fn not_found(entity: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity: entity.into(),
            id: id.into(),
        }
    }

    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }
}

/// Stored profile records keyed by user id
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Find a profile by user id
    async fn find_by_id(&self, id: Uuid) -> Result<Option<UserProfile>, StoreError>;

    /// Find a profile by email address
    async fn find_by_email(&self, email: &str) -> Result<Option<UserProfile>, StoreError>;

    /// Create a new profile record
    async fn create(&self, profile: UserProfile) -> Result<UserProfile, StoreError>;

    /// Change the role and admin flag of an existing profile
    async fn update_role(&self, id: Uuid, role: UserRole, is_admin: bool) -> Result<(), StoreError>;
}

/// Live usage counters, owned by the storage/billing collaborator
#[async_trait]
pub trait UsageRepository: Send + Sync {
    /// Current counters for the user, read fresh per request
    async fn usage_for(&self, user_id: Uuid) -> Result<UsageSnapshot, StoreError>;
}
