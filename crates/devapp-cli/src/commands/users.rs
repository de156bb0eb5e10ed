//! Users command implementations.

use anyhow::{Result, bail};
use clap::Subcommand;

use devapp_client::{Access, NotificationStore, RestClient, SessionStore, UserClient, can_enter};
use devapp_core::{Navigator, Route, User};

use crate::output;

#[derive(Subcommand, Debug)]
pub enum UsersCommand {
    /// List all users
    List,

    /// Fetch a single user
    Get { id: i64 },

    /// Create a user
    Create {
        /// Display name for the new user
        #[arg(long)]
        name: String,
    },
}

pub async fn run(
    cmd: UsersCommand,
    rest: &RestClient,
    session: &SessionStore,
    navigator: &dyn Navigator,
    notifications: &NotificationStore,
) -> Result<()> {
    if let Access::Redirect(route) = can_enter(Route::Users, session) {
        navigator.navigate(route);
        bail!("not logged in");
    }

    let client = UserClient::new(rest.clone(), session.clone());
    let result = match cmd {
        UsersCommand::List => list(&client, notifications).await,
        UsersCommand::Get { id } => get(&client, id).await,
        UsersCommand::Create { name } => create(&client, &name, notifications).await,
    };

    output::render(notifications);
    result
}

async fn list(client: &UserClient, notifications: &NotificationStore) -> Result<()> {
    match client.list().await {
        Ok(users) => {
            for user in &users {
                output::json(user)?;
            }
            notifications.success(format!("Loaded {} users successfully", users.len()));
            Ok(())
        }
        Err(err) => {
            notifications.error(format!("Failed to load users: {}", err.user_message()));
            Err(err.into())
        }
    }
}

async fn get(client: &UserClient, id: i64) -> Result<()> {
    let user = client.get(id).await?;
    output::json(&user)?;
    Ok(())
}

async fn create(client: &UserClient, name: &str, notifications: &NotificationStore) -> Result<()> {
    match client.create(&User::new(name)).await {
        Ok(user) => {
            notifications.success(format!("User \"{}\" created successfully", user.name));
            output::json(&user)?;
            Ok(())
        }
        Err(err) => {
            notifications.error(format!("Failed to create user: {}", err.user_message()));
            Err(err.into())
        }
    }
}
