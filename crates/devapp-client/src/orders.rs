//! Orders CRUD client.

use tracing::{debug, instrument};

use devapp_core::error::{Error, ValidationError};
use devapp_core::{Order, Result};

use crate::http::{RestClient, authorize};
use crate::session::SessionStore;

/// Endpoint for the orders collection.
const ORDERS: &str = "orders";

/// Client for the orders resource.
#[derive(Debug, Clone)]
pub struct OrderClient {
    client: RestClient,
    session: SessionStore,
}

impl OrderClient {
    /// Create a client whose requests carry the given session's credential.
    pub fn new(client: RestClient, session: SessionStore) -> Self {
        Self { client, session }
    }

    /// Fetch all orders.
    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<Order>> {
        debug!("listing orders");
        let request = authorize(self.client.get(ORDERS)?, &self.session);
        self.client.execute(request).await
    }

    /// Fetch a single order by id.
    #[instrument(skip(self))]
    pub async fn get(&self, id: i64) -> Result<Order> {
        debug!("fetching order");
        let request = authorize(
            self.client.get(&format!("{}/{}", ORDERS, id))?,
            &self.session,
        );
        self.client.execute(request).await
    }

    /// Create an order.
    ///
    /// A missing user id or product id fails locally, without a network call.
    #[instrument(skip(self, order), fields(product_id = order.product_id))]
    pub async fn create(&self, order: &Order) -> Result<Order> {
        if order.user.id.unwrap_or(0) == 0 || order.product_id == 0 {
            return Err(Error::Validation(ValidationError::IncompleteOrder));
        }

        debug!("creating order");
        let request = authorize(self.client.post(ORDERS, order)?, &self.session);
        self.client.execute(request).await
    }
}
