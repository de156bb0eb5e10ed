//! Order resource model.

use serde::{Deserialize, Serialize};

use super::User;

/// Processing state of an order, in the API's wire spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Pending,
    Approved,
    Rejected,
    Completed,
    Shipped,
    Cancelled,
    Processing,
    Delivered,
}

/// An order as exchanged with the devapp API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Server-assigned identifier; absent until the order is created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// The user placing the order.
    pub user: User,
    /// The ordered product.
    pub product_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<OrderStatus>,
}

impl Order {
    /// An order to be created for an existing user (no id yet).
    pub fn new(user: User, product_id: i64) -> Self {
        Self {
            id: None,
            user,
            product_id,
            status: Some(OrderStatus::Pending),
        }
    }
}
