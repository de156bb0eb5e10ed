//! Persisted token storage.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use devapp_core::AccessToken;

#[cfg(unix)]
use std::os::unix::fs::PermissionsExt;

/// Stored token payload.
#[derive(Debug, Serialize, Deserialize)]
struct StoredToken {
    token: String,
}

/// File-backed storage for the current access token.
///
/// One file, one key: written on login, removed on logout, read once at
/// startup to seed the session store.
#[derive(Debug, Clone)]
pub struct TokenStorage {
    path: PathBuf,
}

impl TokenStorage {
    /// Create storage rooted at the given file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Persist the token, replacing any previous one.
    pub fn save(&self, token: &AccessToken) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let stored = StoredToken {
            token: token.as_str().to_string(),
        };
        let json = serde_json::to_string_pretty(&stored).map_err(io::Error::other)?;

        fs::write(&self.path, json)?;

        // Set restrictive permissions (Unix only)
        #[cfg(unix)]
        {
            let mut perms = fs::metadata(&self.path)?.permissions();
            perms.set_mode(0o600);
            fs::set_permissions(&self.path, perms)?;
        }

        debug!(path = %self.path.display(), "token persisted");

        Ok(())
    }

    /// Load the persisted token, if any.
    pub fn load(&self) -> io::Result<Option<AccessToken>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let json = fs::read_to_string(&self.path)?;
        let stored: StoredToken = serde_json::from_str(&json).map_err(io::Error::other)?;

        if stored.token.is_empty() {
            return Ok(None);
        }

        Ok(Some(AccessToken::new(stored.token)))
    }

    /// Remove the persisted token.
    pub fn clear(&self) -> io::Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }

        Ok(())
    }
}
