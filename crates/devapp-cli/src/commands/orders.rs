//! Orders command implementations.

use anyhow::{Result, bail};
use clap::Subcommand;

use devapp_client::{Access, NotificationStore, OrderClient, RestClient, SessionStore, can_enter};
use devapp_core::{Navigator, Order, Route, User};

use crate::output;

#[derive(Subcommand, Debug)]
pub enum OrdersCommand {
    /// List all orders
    List,

    /// Fetch a single order
    Get { id: i64 },

    /// Create an order for an existing user
    Create {
        /// Id of the ordering user
        #[arg(long)]
        user_id: i64,

        /// Id of the ordered product
        #[arg(long)]
        product_id: i64,
    },
}

pub async fn run(
    cmd: OrdersCommand,
    rest: &RestClient,
    session: &SessionStore,
    navigator: &dyn Navigator,
    notifications: &NotificationStore,
) -> Result<()> {
    if let Access::Redirect(route) = can_enter(Route::Orders, session) {
        navigator.navigate(route);
        bail!("not logged in");
    }

    let client = OrderClient::new(rest.clone(), session.clone());
    let result = match cmd {
        OrdersCommand::List => list(&client).await,
        OrdersCommand::Get { id } => get(&client, id).await,
        OrdersCommand::Create {
            user_id,
            product_id,
        } => create(&client, user_id, product_id, notifications).await,
    };

    output::render(notifications);
    result
}

async fn list(client: &OrderClient) -> Result<()> {
    let orders = client.list().await?;
    for order in &orders {
        output::json(order)?;
    }
    Ok(())
}

async fn get(client: &OrderClient, id: i64) -> Result<()> {
    let order = client.get(id).await?;
    output::json(&order)?;
    Ok(())
}

async fn create(
    client: &OrderClient,
    user_id: i64,
    product_id: i64,
    notifications: &NotificationStore,
) -> Result<()> {
    let order = Order::new(
        User {
            id: Some(user_id),
            name: String::new(),
        },
        product_id,
    );

    match client.create(&order).await {
        Ok(created) => {
            notifications.success(format!(
                "Order {} created successfully",
                created.id.unwrap_or_default()
            ));
            output::json(&created)?;
            Ok(())
        }
        Err(err) => {
            notifications.error(format!("Failed to create order: {}", err.user_message()));
            Err(err.into())
        }
    }
}
