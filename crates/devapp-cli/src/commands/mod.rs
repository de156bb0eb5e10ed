//! Subcommand implementations.

pub mod login;
pub mod logout;
pub mod orders;
pub mod status;
pub mod users;
