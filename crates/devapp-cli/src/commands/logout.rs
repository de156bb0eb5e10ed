//! Logout command implementation.

use anyhow::Result;

use devapp_client::SessionStore;

use crate::output;

pub fn run(session: &SessionStore) -> Result<()> {
    session.logout();
    output::success("Logged out");
    Ok(())
}
