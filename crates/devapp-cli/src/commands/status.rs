//! Status command implementation.

use anyhow::Result;

use devapp_client::SessionStore;

use crate::output;

pub fn run(session: &SessionStore) -> Result<()> {
    if session.is_logged_in() {
        output::success("Logged in");
        output::field("Token", &mask(&session.token()));
    } else {
        output::field("Session", "not logged in");
    }

    Ok(())
}

/// Shorten a token for display; the full value never reaches the terminal.
fn mask(token: &str) -> String {
    if token.chars().count() <= 8 {
        "********".to_string()
    } else {
        format!("{}…", token.chars().take(8).collect::<String>())
    }
}
