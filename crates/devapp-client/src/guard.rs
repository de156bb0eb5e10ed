//! Route admission checks.

use devapp_core::Route;

use crate::session::SessionStore;

/// Outcome of a route admission check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// Navigation may proceed.
    Granted,
    /// Navigation must go to the given route instead.
    Redirect(Route),
}

/// Decide whether the current session may enter `route`.
///
/// Protected routes require a logged-in session; unprotected routes are
/// always granted. This function only decides - the navigation collaborator
/// enacts the returned redirect.
pub fn can_enter(route: Route, session: &SessionStore) -> Access {
    if !route.is_protected() || session.is_logged_in() {
        Access::Granted
    } else {
        Access::Redirect(Route::Login)
    }
}
