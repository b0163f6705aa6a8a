//! Identity provider interface

use async_trait::async_trait;
use pdfgpt_api_types::ExternalPrincipal;

use crate::store::StoreError;

/// Local-credentials path of the identity provider. Federated sign-ins
/// arrive as an already-authenticated [`ExternalPrincipal`] and skip this
/// trait entirely.
#[async_trait]
pub trait CredentialVerifier: Send + Sync {
    /// Verify an email/password pair. Returns `None` when the credentials
    /// are wrong, `Err` only when the provider itself failed.
    async fn verify(&self, email: &str, password: &str) -> Result<Option<ExternalPrincipal>, StoreError>;
}
