//! devapp - command line client for the devapp REST API.
//!
//! This is a thin terminal shell over the `devapp-client` library: it owns
//! the process-wide store instances and maps subcommands onto the login,
//! users, and orders flows.

mod cli;
mod commands;
mod navigator;
mod output;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use directories::ProjectDirs;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use devapp_client::{NotificationStore, RestAuthBackend, RestClient, SessionStore, TokenStorage};
use devapp_core::BaseUrl;

use cli::{Cli, Commands};
use navigator::TerminalNavigator;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose, cli.json_logs);

    let base = BaseUrl::new(&cli.api).context("Invalid API base URL")?;
    tracing::debug!(api = %base, "using API base URL");
    let rest = RestClient::new(base);

    let navigator = Arc::new(TerminalNavigator);
    let session = SessionStore::new(
        Box::new(RestAuthBackend::new(rest.clone())),
        TokenStorage::new(token_path()?),
        navigator.clone(),
    );
    session.initialize().await;

    let notifications = NotificationStore::new();

    match cli.command {
        Commands::Login(args) => commands::login::run(args, &session, navigator).await,
        Commands::Logout => commands::logout::run(&session),
        Commands::Status => commands::status::run(&session),
        Commands::Users(cmd) => {
            commands::users::run(cmd, &rest, &session, navigator.as_ref(), &notifications).await
        }
        Commands::Orders(cmd) => {
            commands::orders::run(cmd, &rest, &session, navigator.as_ref(), &notifications).await
        }
    }
}

/// Get the token file path.
fn token_path() -> Result<PathBuf> {
    let dirs =
        ProjectDirs::from("", "", "devapp").context("Could not determine config directory")?;

    Ok(dirs.data_dir().join("token.json"))
}

fn init_logging(verbosity: u8, json: bool) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(false))
            .init();
    }
}
