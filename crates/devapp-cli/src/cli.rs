//! CLI argument definitions.

use clap::{Parser, Subcommand};

use crate::commands::{login::LoginArgs, orders::OrdersCommand, users::UsersCommand};

/// Command line client for the devapp REST API.
#[derive(Parser, Debug)]
#[command(name = "devapp")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    /// Base URL of the devapp API
    #[arg(long, default_value = "http://localhost:8080/api", global = true)]
    pub api: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Log in and persist the session token
    Login(LoginArgs),

    /// Clear the session and return to the login view
    Logout,

    /// Display the current session state
    Status,

    /// Users operations
    #[command(subcommand)]
    Users(UsersCommand),

    /// Orders operations
    #[command(subcommand)]
    Orders(OrdersCommand),
}
