//! REST HTTP client plumbing.

use reqwest::Request;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderValue};
use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, instrument, trace};

use devapp_core::error::{ApiError, Error, TransportError};
use devapp_core::{BaseUrl, Result};

use crate::session::SessionStore;

/// HTTP client for the devapp REST API.
#[derive(Debug, Clone)]
pub struct RestClient {
    client: reqwest::Client,
    base: BaseUrl,
}

impl RestClient {
    /// Create a new client for the given API base URL.
    pub fn new(base: BaseUrl) -> Self {
        let client = reqwest::Client::builder()
            .user_agent(concat!("devapp/", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("failed to build HTTP client");

        Self { client, base }
    }

    /// Returns the API base URL this client is configured for.
    pub fn base(&self) -> &BaseUrl {
        &self.base
    }

    /// Build a GET request for the given endpoint.
    pub fn get(&self, path: &str) -> Result<Request> {
        self.client
            .get(self.base.endpoint(path))
            .build()
            .map_err(map_transport)
    }

    /// Build a POST request with a JSON body.
    pub fn post<B>(&self, path: &str, body: &B) -> Result<Request>
    where
        B: Serialize + ?Sized,
    {
        self.client
            .post(self.base.endpoint(path))
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .json(body)
            .build()
            .map_err(map_transport)
    }

    /// Execute a request and deserialize the JSON response body.
    #[instrument(skip(self, request), fields(method = %request.method(), url = %request.url()))]
    pub async fn execute<R>(&self, request: Request) -> Result<R>
    where
        R: DeserializeOwned,
    {
        debug!("dispatching request");

        let response = self
            .client
            .execute(request)
            .await
            .map_err(map_transport)?;

        self.handle_response(response).await
    }

    /// Handle a response, parsing the body or error.
    async fn handle_response<R: DeserializeOwned>(&self, response: reqwest::Response) -> Result<R> {
        let status = response.status();
        trace!(status = %status, "response received");

        if status.is_success() {
            response.json::<R>().await.map_err(map_transport)
        } else {
            Err(Error::Api(self.parse_error_response(response).await))
        }
    }

    /// Parse an error response body.
    async fn parse_error_response(&self, response: reqwest::Response) -> ApiError {
        let status = response.status();
        let status_text = status.canonical_reason().unwrap_or("Unknown Error");

        // Prefer the backend's structured {message} body when it has one
        let message = response
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.message);

        ApiError::new(status.as_u16(), status_text, message)
    }
}

/// Structured error body the backend may return.
#[derive(Debug, serde::Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Attach the current session credential to an outgoing request.
///
/// Adds an `Authorization: Bearer <token>` header iff the session currently
/// holds a non-empty token; otherwise the request passes through untouched.
/// Holds no state of its own and is safe to apply to every request,
/// including those issued before login.
pub fn authorize(mut request: Request, session: &SessionStore) -> Request {
    let token = session.token();
    if token.is_empty() {
        return request;
    }

    let value = format!("Bearer {}", token);
    request.headers_mut().insert(
        AUTHORIZATION,
        HeaderValue::from_str(&value).expect("invalid token characters"),
    );
    request
}

/// Map a reqwest failure into the transport error taxonomy.
fn map_transport(err: reqwest::Error) -> Error {
    let transport = if err.is_timeout() {
        TransportError::Timeout {
            message: err.to_string(),
        }
    } else if err.is_connect() {
        TransportError::Connection {
            message: err.to_string(),
        }
    } else {
        TransportError::Http {
            message: err.to_string(),
        }
    };
    Error::Transport(transport)
}
