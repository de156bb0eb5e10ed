//! Users CRUD client.

use tracing::{debug, instrument};

use devapp_core::error::{Error, ValidationError};
use devapp_core::{Result, User};

use crate::http::{RestClient, authorize};
use crate::session::SessionStore;

/// Endpoint for the users collection.
const USERS: &str = "users";

/// Client for the users resource.
#[derive(Debug, Clone)]
pub struct UserClient {
    client: RestClient,
    session: SessionStore,
}

impl UserClient {
    /// Create a client whose requests carry the given session's credential.
    pub fn new(client: RestClient, session: SessionStore) -> Self {
        Self { client, session }
    }

    /// Fetch all users.
    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<User>> {
        debug!("listing users");
        let request = authorize(self.client.get(USERS)?, &self.session);
        self.client.execute(request).await
    }

    /// Fetch a single user by id.
    #[instrument(skip(self))]
    pub async fn get(&self, id: i64) -> Result<User> {
        debug!("fetching user");
        let request = authorize(self.client.get(&format!("{}/{}", USERS, id))?, &self.session);
        self.client.execute(request).await
    }

    /// Create a user.
    ///
    /// An empty name fails locally, without a network call.
    #[instrument(skip(self, user), fields(name = %user.name))]
    pub async fn create(&self, user: &User) -> Result<User> {
        if user.name.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField {
                field: "name",
            }));
        }

        debug!("creating user");
        let request = authorize(self.client.post(USERS, user)?, &self.session);
        self.client.execute(request).await
    }
}
