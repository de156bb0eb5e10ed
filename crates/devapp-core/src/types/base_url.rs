//! API base URL type.

use std::fmt;
use std::str::FromStr;
use url::Url;

/// A validated base URL for the devapp REST API.
///
/// Must use HTTPS, or HTTP for loopback hosts only (local development
/// backends run on `http://localhost`).
///
/// # Example
///
/// ```
/// use devapp_core::BaseUrl;
///
/// let base = BaseUrl::new("http://localhost:8080/api").unwrap();
/// assert_eq!(base.endpoint("users"), "http://localhost:8080/api/users");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BaseUrl(Url);

/// Validation failure for a base URL.
#[derive(Debug, thiserror::Error)]
#[error("invalid base URL '{value}': {reason}")]
pub struct InvalidBaseUrl {
    /// The rejected input.
    pub value: String,
    /// Why it was rejected.
    pub reason: String,
}

impl BaseUrl {
    /// Create a new base URL from a string, validating the format.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is not valid or uses a disallowed scheme.
    pub fn new(s: impl AsRef<str>) -> Result<Self, InvalidBaseUrl> {
        let s = s.as_ref();
        let url = Url::parse(s).map_err(|e| InvalidBaseUrl {
            value: s.to_string(),
            reason: e.to_string(),
        })?;

        Self::validate(&url, s)?;

        Ok(Self(url))
    }

    fn validate(url: &Url, original: &str) -> Result<(), InvalidBaseUrl> {
        match url.scheme() {
            "https" => Ok(()),
            "http" => {
                let loopback = matches!(url.host_str(), Some("localhost" | "127.0.0.1" | "[::1]"));
                if loopback {
                    Ok(())
                } else {
                    Err(InvalidBaseUrl {
                        value: original.to_string(),
                        reason: "http is only allowed for loopback hosts".to_string(),
                    })
                }
            }
            other => Err(InvalidBaseUrl {
                value: original.to_string(),
                reason: format!("unsupported scheme '{}'", other),
            }),
        }
    }

    /// Returns the full URL for an API endpoint path.
    pub fn endpoint(&self, path: &str) -> String {
        // The url crate keeps a trailing slash on root paths, so trim
        // before joining to avoid a double slash.
        let base = self.0.as_str().trim_end_matches('/');
        format!("{}/{}", base, path.trim_start_matches('/'))
    }

    /// Returns the base URL as a string.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Returns the inner URL.
    pub fn as_url(&self) -> &Url {
        &self.0
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for BaseUrl {
    type Err = InvalidBaseUrl;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
