//! Access token type.

use std::fmt;

/// An access token for authenticated API requests.
///
/// Issued by the auth backend on a successful credential exchange and
/// attached to outgoing requests as a bearer credential.
///
/// # Security
///
/// - Never logged or displayed in Debug output
/// - Treat as opaque; do not parse or inspect
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    /// Create a new access token.
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Returns the token value for use in authorization headers.
    ///
    /// # Security
    ///
    /// Use only when constructing HTTP authorization headers or when
    /// persisting the session.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true when the token holds no value.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

// Hide the token value in Debug output
impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AccessToken").field(&"[REDACTED]").finish()
    }
}
