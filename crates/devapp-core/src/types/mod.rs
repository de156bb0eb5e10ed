//! Core devapp types.
//!
//! These types enforce their invariants at construction time,
//! ensuring invalid states are unrepresentable.

mod base_url;
mod order;
mod route;
mod user;

pub use base_url::{BaseUrl, InvalidBaseUrl};
pub use order::{Order, OrderStatus};
pub use route::Route;
pub use user::User;
