//! Session projection
//!
//! Turns an authenticated external identity plus a stored profile record
//! into the [`SessionIdentity`] carried on every request. Local-credential
//! and federated sign-ins converge on the same profile lookup; a first
//! federated sign-in seeds a default free profile. Refreshes re-read the
//! role and admin flag from the store so administrator changes take effect
//! within the refresh interval, and fail closed once a cached identity
//! exceeds the configured staleness bound.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use uuid::Uuid;

use pdfgpt_api_types::{ExternalPrincipal, SessionIdentity, UserProfile, UserRole};
use pdfgpt_interfaces::{CredentialVerifier, ProfileRepository, StoreError};

use crate::error::{RbacError, RbacResult};

/// Session projection configuration
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// How often callers should re-project the identity from the store
    pub refresh_interval: Duration,
    /// How long a cached identity may be honored when the store is
    /// unreachable; beyond this, refresh fails and callers must deny
    pub max_staleness: Duration,
    /// Role assigned to profiles created on first sign-in
    pub default_role: UserRole,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            refresh_interval: Duration::minutes(5),
            max_staleness: Duration::minutes(30),
            default_role: UserRole::FreeUser,
        }
    }
}

impl SessionConfig {
    /// Production configuration with a tighter staleness bound
    pub fn production() -> Self {
        Self {
            refresh_interval: Duration::minutes(5),
            max_staleness: Duration::minutes(15),
            default_role: UserRole::FreeUser,
        }
    }

    /// Strict configuration for high-security environments
    pub fn strict() -> Self {
        Self {
            refresh_interval: Duration::minutes(1),
            max_staleness: Duration::minutes(5),
            default_role: UserRole::FreeUser,
        }
    }
}

/// Renewable session token holding the projected identity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionToken {
    pub user_id: Uuid,
    pub email: String,
    pub identity: SessionIdentity,
    /// When the identity was last verified against the profile store
    pub refreshed_at: DateTime<Utc>,
}

impl SessionToken {
    fn from_profile(profile: &UserProfile, now: DateTime<Utc>) -> Self {
        Self {
            user_id: profile.id,
            email: profile.email.clone(),
            identity: profile.session_identity(),
            refreshed_at: now,
        }
    }

    /// Seconds since the identity was last verified
    pub fn age_seconds(&self, now: DateTime<Utc>) -> i64 {
        (now - self.refreshed_at).num_seconds()
    }
}

/// Projects external identities onto stored profiles
pub struct SessionProjector<R> {
    profiles: Arc<R>,
    config: SessionConfig,
}

impl<R: ProfileRepository> SessionProjector<R> {
    /// Create a new session projector
    pub fn new(profiles: Arc<R>, config: SessionConfig) -> Self {
        Self { profiles, config }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Sign in with an identity already authenticated by a federated
    /// provider. Creates the default profile on first sign-in.
    pub async fn sign_in_federated(&self, principal: &ExternalPrincipal) -> RbacResult<SessionToken> {
        let profile = self.resolve_profile(principal).await?;
        Ok(SessionToken::from_profile(&profile, Utc::now()))
    }

    /// Sign in with local credentials. Verification is delegated to the
    /// identity provider; on success this converges on the same profile
    /// lookup as federated sign-in.
    pub async fn sign_in_credentials<V: CredentialVerifier>(
        &self,
        verifier: &V,
        email: &str,
        password: &str,
    ) -> RbacResult<SessionToken> {
        let principal = verifier
            .verify(email, password)
            .await?
            .ok_or(RbacError::InvalidCredentials)?;
        let profile = self.resolve_profile(&principal).await?;
        Ok(SessionToken::from_profile(&profile, Utc::now()))
    }

    /// Whether the token is due for a refresh
    pub fn needs_refresh(&self, token: &SessionToken, now: DateTime<Utc>) -> bool {
        now - token.refreshed_at >= self.config.refresh_interval
    }

    /// Re-read the role and admin flag from the profile store and overwrite
    /// the cached identity. On store failure the cached identity is kept
    /// while it is within `max_staleness`; past that the refresh fails and
    /// the session must be treated as unauthenticated.
    pub async fn refresh(&self, token: &mut SessionToken, now: DateTime<Utc>) -> RbacResult<()> {
        match self.profiles.find_by_id(token.user_id).await {
            Ok(Some(profile)) => {
                let identity = profile.session_identity();
                if identity != token.identity {
                    debug!(
                        user_id = %token.user_id,
                        role = identity.role.as_str(),
                        is_admin = identity.is_admin,
                        "session identity updated from profile store"
                    );
                }
                token.identity = identity;
                token.refreshed_at = now;
                Ok(())
            }
            // Profile removed after sign-in: the session no longer maps to
            // an account, deny rather than keep the cached identity
            Ok(None) => Err(RbacError::Store(StoreError::not_found(
                "profile",
                token.user_id.to_string(),
            ))),
            Err(err) => {
                let age = now - token.refreshed_at;
                if age <= self.config.max_staleness {
                    warn!(
                        user_id = %token.user_id,
                        error = %err,
                        age_seconds = age.num_seconds(),
                        "profile store unreachable, keeping cached session identity"
                    );
                    Ok(())
                } else {
                    warn!(
                        user_id = %token.user_id,
                        error = %err,
                        age_seconds = age.num_seconds(),
                        "profile store unreachable and session exceeded staleness bound"
                    );
                    Err(RbacError::SessionStale {
                        age_seconds: age.num_seconds(),
                    })
                }
            }
        }
    }

    /// Look up the profile for a principal, creating the default record on
    /// first sign-in
    async fn resolve_profile(&self, principal: &ExternalPrincipal) -> RbacResult<UserProfile> {
        if let Some(existing) = self.profiles.find_by_email(&principal.email).await? {
            return Ok(existing);
        }

        let mut profile = UserProfile::new_free(
            Uuid::new_v4(),
            principal.email.clone(),
            principal.name.clone(),
            principal.avatar_url.clone(),
        );
        profile.role = self.config.default_role;

        let created = self.profiles.create(profile).await?;
        info!(
            user_id = %created.id,
            provider = ?principal.provider,
            "created default profile on first sign-in"
        );
        Ok(created)
    }
}
