//! Login form submission life cycle.

use std::sync::Arc;

use tracing::{debug, instrument, warn};

use devapp_core::{Credentials, Navigator, Route};

use crate::session::SessionStore;

/// Fixed user-facing message for a rejected login. Raw backend detail is
/// never shown for authentication failures.
pub const INVALID_CREDENTIALS: &str = "Invalid username or password";

/// Inline message for a submission with missing fields.
pub const MISSING_FIELDS: &str = "Username and password are required";

/// Where the submission life cycle currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginState {
    /// Waiting for input, possibly showing an error from a prior attempt.
    Idle,
    /// A login request is in flight.
    Submitting,
    /// Login succeeded; the user is being moved to the default route.
    NavigateAway,
}

/// Owns one login form's submission life cycle.
pub struct LoginFlow {
    session: SessionStore,
    navigator: Arc<dyn Navigator>,
    state: LoginState,
    error: Option<String>,
}

impl LoginFlow {
    /// Create an idle flow over the given session store.
    pub fn new(session: SessionStore, navigator: Arc<dyn Navigator>) -> Self {
        Self {
            session,
            navigator,
            state: LoginState::Idle,
            error: None,
        }
    }

    /// The current state.
    pub fn state(&self) -> LoginState {
        self.state
    }

    /// The error message to show inline, if any.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Submit the form.
    ///
    /// Empty fields fail locally: no network call is made and the flow stays
    /// idle with an inline message. A rejected login returns to idle with
    /// exactly [`INVALID_CREDENTIALS`]; a successful one moves to
    /// [`LoginState::NavigateAway`] and asks the navigator for the default
    /// protected route.
    #[instrument(skip(self, password))]
    pub async fn submit(&mut self, username: &str, password: &str) -> LoginState {
        if username.trim().is_empty() || password.is_empty() {
            debug!("submission rejected locally: missing fields");
            self.error = Some(MISSING_FIELDS.to_string());
            return self.state;
        }

        self.state = LoginState::Submitting;

        let credentials = Credentials::new(username, password);
        match self.session.login(&credentials).await {
            Ok(_) => {
                self.error = None;
                self.state = LoginState::NavigateAway;
                self.navigator.navigate(Route::DEFAULT);
            }
            Err(err) => {
                warn!(error = %err, "login attempt failed");
                self.error = Some(INVALID_CREDENTIALS.to_string());
                self.state = LoginState::Idle;
            }
        }

        self.state
    }
}

impl std::fmt::Debug for LoginFlow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginFlow")
            .field("state", &self.state)
            .field("error", &self.error)
            .finish_non_exhaustive()
    }
}
