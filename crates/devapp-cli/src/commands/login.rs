//! Login command implementation.

use std::sync::Arc;

use anyhow::{Result, bail};
use clap::Args;
use colored::Colorize;

use devapp_client::{LoginFlow, LoginState, SessionStore};
use devapp_core::Navigator;

use crate::output;

#[derive(Args, Debug)]
pub struct LoginArgs {
    /// Username to authenticate with
    #[arg(long)]
    pub username: String,

    /// Account password
    #[arg(long)]
    pub password: String,
}

pub async fn run(
    args: LoginArgs,
    session: &SessionStore,
    navigator: Arc<dyn Navigator>,
) -> Result<()> {
    eprintln!("{}", "Logging in...".dimmed());

    let mut flow = LoginFlow::new(session.clone(), navigator);
    match flow.submit(&args.username, &args.password).await {
        LoginState::NavigateAway => {
            output::success("Logged in successfully");
            Ok(())
        }
        _ => bail!("{}", flow.error().unwrap_or("Login failed")),
    }
}
