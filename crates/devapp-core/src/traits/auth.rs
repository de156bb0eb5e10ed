//! Auth backend trait.

use async_trait::async_trait;

use crate::{AccessToken, Credentials, Result};

/// A backend able to exchange credentials for an access token.
///
/// Implementations talk to whatever identity provider the deployment uses;
/// the session store only depends on this seam.
#[async_trait]
pub trait AuthBackend: Send + Sync {
    /// Exchange credentials for an access token.
    ///
    /// Rejected credentials and provider failures both surface as
    /// [`crate::error::AuthError`] variants.
    async fn login(&self, credentials: &Credentials) -> Result<AccessToken>;
}
