//! Terminal navigation surface.

use colored::Colorize;

use devapp_core::{Navigator, Route};

/// Enacts navigation decisions by telling the user where the session went.
pub struct TerminalNavigator;

impl Navigator for TerminalNavigator {
    fn navigate(&self, route: Route) {
        match route {
            Route::Login => eprintln!(
                "{}",
                "→ login (run `devapp login` to authenticate)".dimmed()
            ),
            other => eprintln!("{}", format!("→ {}", other.path()).dimmed()),
        }
    }
}
