//! devapp-core - Core types and traits for the devapp client toolkit.

pub mod auth;
pub mod error;
pub mod traits;
pub mod types;

pub use auth::{AccessToken, Credentials};
pub use error::Error;
pub use traits::{AuthBackend, Navigator};
pub use types::{BaseUrl, Order, OrderStatus, Route, User};

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
