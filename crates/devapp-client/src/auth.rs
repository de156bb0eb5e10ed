//! REST-backed auth backend.

use async_trait::async_trait;
use tracing::{debug, instrument};

use devapp_core::error::{AuthError, Error};
use devapp_core::{AccessToken, AuthBackend, Credentials, Result};

use crate::http::RestClient;

/// Endpoint for the credential exchange.
const LOGIN: &str = "auth/login";

/// Request body for the credential exchange.
#[derive(Debug, serde::Serialize)]
struct LoginRequest<'a> {
    username: &'a str,
    password: &'a str,
}

/// Response from the credential exchange.
#[derive(Debug, serde::Deserialize)]
struct LoginResponse {
    token: String,
}

/// Auth backend performing a direct token exchange against the devapp API.
#[derive(Debug, Clone)]
pub struct RestAuthBackend {
    client: RestClient,
}

impl RestAuthBackend {
    /// Create a new auth backend over the given client.
    pub fn new(client: RestClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AuthBackend for RestAuthBackend {
    #[instrument(skip(self, credentials), fields(username = %credentials.username()))]
    async fn login(&self, credentials: &Credentials) -> Result<AccessToken> {
        debug!("exchanging credentials for a token");

        let request = self.client.post(
            LOGIN,
            &LoginRequest {
                username: credentials.username(),
                password: credentials.password(),
            },
        )?;

        let response: LoginResponse = match self.client.execute(request).await {
            Ok(response) => response,
            Err(Error::Api(err)) if err.is_auth_error() => {
                return Err(Error::Auth(AuthError::InvalidCredentials));
            }
            Err(Error::Transport(err)) => {
                return Err(Error::Auth(AuthError::BackendUnavailable {
                    message: err.to_string(),
                }));
            }
            Err(err) => return Err(err),
        };

        Ok(AccessToken::new(response.token))
    }
}
