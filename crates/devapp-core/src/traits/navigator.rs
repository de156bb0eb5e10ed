//! Navigation trait.

use crate::Route;

/// The navigation surface that enacts routing decisions.
///
/// The route guard and the session store never navigate by themselves;
/// they hand a [`Route`] to this collaborator.
pub trait Navigator: Send + Sync {
    /// Move the user to the given route.
    fn navigate(&self, route: Route);
}
