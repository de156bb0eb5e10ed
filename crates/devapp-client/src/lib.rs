//! devapp-client - REST-backed session, notification, and CRUD clients.
//!
//! This crate implements the stateful core of the devapp front end: the
//! session store (login, token lifecycle, logout), the route guard, the
//! login flow, the notification store, and the users/orders clients, all
//! against the devapp REST API.

mod auth;
mod guard;
mod http;
mod login;
mod notify;
mod orders;
mod session;
mod users;

pub use auth::RestAuthBackend;
pub use guard::{Access, can_enter};
pub use http::{RestClient, authorize};
pub use login::{INVALID_CREDENTIALS, LoginFlow, LoginState, MISSING_FIELDS};
pub use notify::{DEFAULT_DURATION_MS, Notification, NotificationKind, NotificationStore};
pub use orders::OrderClient;
pub use session::{Session, SessionStore, TokenStorage};
pub use users::UserClient;
