//! Session store - the single source of truth for authentication state.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::{debug, info, instrument, warn};

use devapp_core::{AccessToken, AuthBackend, Credentials, Navigator, Result, Route};

use crate::session::TokenStorage;

/// A point-in-time snapshot of the authentication state.
///
/// Token and validity always change together; observers never see one
/// updated without the other.
#[derive(Debug, Clone, Default)]
pub struct Session {
    token: Option<AccessToken>,
    is_valid: bool,
}

impl Session {
    fn authenticated(token: AccessToken) -> Self {
        Self {
            token: Some(token),
            is_valid: true,
        }
    }

    /// Returns true when this snapshot represents a logged-in user.
    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    /// Returns the access token, if any.
    pub fn token(&self) -> Option<&AccessToken> {
        self.token.as_ref()
    }
}

/// Single source of truth for "is the current user authenticated".
///
/// Exposes the state both as an observable stream ([`SessionStore::subscribe`])
/// and as synchronous snapshots ([`SessionStore::is_logged_in`],
/// [`SessionStore::token`]) for the route guard and the request augmenter.
///
/// Cheap to clone; clones share the same underlying state.
#[derive(Clone)]
pub struct SessionStore {
    inner: Arc<SessionInner>,
}

struct SessionInner {
    state: watch::Sender<Session>,
    backend: Box<dyn AuthBackend>,
    storage: TokenStorage,
    navigator: Arc<dyn Navigator>,
}

impl SessionStore {
    /// Create a store in the unauthenticated state.
    ///
    /// No I/O happens here; run [`SessionStore::initialize`] at startup to
    /// restore a persisted session.
    pub fn new(
        backend: Box<dyn AuthBackend>,
        storage: TokenStorage,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        let (state, _) = watch::channel(Session::default());

        Self {
            inner: Arc::new(SessionInner {
                state,
                backend,
                storage,
                navigator,
            }),
        }
    }

    /// Restore a previously persisted session.
    ///
    /// Publishes exactly one initial state once restoration resolves, even
    /// when no prior session exists. Storage failures resolve to an
    /// unauthenticated state rather than an error.
    #[instrument(skip(self))]
    pub async fn initialize(&self) {
        let session = match self.inner.storage.load() {
            Ok(Some(token)) => {
                info!("restored persisted session");
                Session::authenticated(token)
            }
            Ok(None) => {
                debug!("no persisted session");
                Session::default()
            }
            Err(err) => {
                warn!(error = %err, "failed to read persisted session");
                Session::default()
            }
        };

        self.inner.state.send_replace(session);
    }

    /// Authenticate against the backend and publish the new session.
    ///
    /// On success the token is persisted and `true` is published. On failure
    /// nothing is published - the session remains whatever it was - and the
    /// error is returned to the caller.
    #[instrument(skip(self, credentials), fields(username = %credentials.username()))]
    pub async fn login(&self, credentials: &Credentials) -> Result<Session> {
        let token = self.inner.backend.login(credentials).await?;

        if let Err(err) = self.inner.storage.save(&token) {
            warn!(error = %err, "failed to persist token; session will not survive a restart");
        }

        let session = Session::authenticated(token);
        self.inner.state.send_replace(session.clone());
        info!("login succeeded");

        Ok(session)
    }

    /// Clear the session and send the user back to the login route.
    ///
    /// Idempotent: logging out while already logged out republishes the
    /// unauthenticated state without error.
    #[instrument(skip(self))]
    pub fn logout(&self) {
        if let Err(err) = self.inner.storage.clear() {
            warn!(error = %err, "failed to remove persisted token");
        }

        self.inner.state.send_replace(Session::default());
        info!("logged out");

        self.inner.navigator.navigate(Route::Login);
    }

    /// Synchronous snapshot of the current validity. Reflects the latest
    /// published value, with no I/O.
    pub fn is_logged_in(&self) -> bool {
        self.inner.state.borrow().is_valid
    }

    /// Synchronous snapshot of the current token, or the empty string when
    /// there is none. Never fails.
    pub fn token(&self) -> String {
        self.inner
            .state
            .borrow()
            .token
            .as_ref()
            .map(|token| token.as_str().to_string())
            .unwrap_or_default()
    }

    /// Subscribe to session snapshots.
    ///
    /// The receiver observes the current value and every published change
    /// after it; dropping the receiver cancels the subscription.
    pub fn subscribe(&self) -> watch::Receiver<Session> {
        self.inner.state.subscribe()
    }
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore")
            .field("is_logged_in", &self.is_logged_in())
            .finish_non_exhaustive()
    }
}
