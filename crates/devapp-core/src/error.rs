//! Error types for the devapp client toolkit.
//!
//! This module provides a unified error type with explicit variants for
//! local validation, authentication, transport, and API errors.

use std::fmt;
use thiserror::Error;

/// The unified error type for devapp client operations.
///
/// This error type covers all possible failure modes in the toolkit,
/// with explicit variants to allow callers to handle specific cases.
#[derive(Debug, Error)]
pub enum Error {
    /// Local input validation errors (no network call was made).
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Authentication errors (rejected credentials, auth backend failure).
    #[error("authentication error: {0}")]
    Auth(#[from] AuthError),

    /// Network transport errors (DNS, TLS, connection, timeout).
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// Non-2xx API responses.
    #[error("API error: {0}")]
    Api(#[from] ApiError),
}

impl Error {
    /// The message to surface to the user for this failure.
    ///
    /// Authentication failures always map to a fixed message; raw backend
    /// detail is never shown for them. API errors prefer the server's own
    /// `message` field verbatim, falling back to a formatted status line.
    pub fn user_message(&self) -> String {
        match self {
            Error::Validation(err) => err.to_string(),
            Error::Auth(_) => "Invalid username or password".to_string(),
            Error::Transport(err) => format!("Error: {}", err),
            Error::Api(err) => err
                .message
                .clone()
                .unwrap_or_else(|| format!("Error Code: {}\nMessage: {}", err.status, err.status_text)),
        }
    }
}

/// Local input validation errors.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field was left empty.
    #[error("{field} is required")]
    MissingField { field: &'static str },

    /// An order was submitted without a user or product.
    #[error("a user and a product id are required")]
    IncompleteOrder,
}

/// Authentication-related errors.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The auth backend rejected the credentials.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// The auth backend could not be reached or answered unexpectedly.
    #[error("auth backend unavailable: {message}")]
    BackendUnavailable { message: String },
}

/// Transport-level errors.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Network connection failed.
    #[error("connection failed: {message}")]
    Connection { message: String },

    /// Request timed out.
    #[error("request timed out: {message}")]
    Timeout { message: String },

    /// Generic HTTP error.
    #[error("HTTP error: {message}")]
    Http { message: String },
}

/// A non-2xx response from the API.
#[derive(Debug)]
pub struct ApiError {
    /// HTTP status code.
    pub status: u16,
    /// Canonical status text for the code.
    pub status_text: String,
    /// Error message from the server body (if present).
    pub message: Option<String>,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HTTP {} {}", self.status, self.status_text)?;
        if let Some(ref message) = self.message {
            write!(f, ": {}", message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ApiError {}

impl ApiError {
    /// Create a new API error.
    pub fn new(status: u16, status_text: impl Into<String>, message: Option<String>) -> Self {
        Self {
            status,
            status_text: status_text.into(),
            message,
        }
    }

    /// Check if this response rejected the caller's credentials.
    pub fn is_auth_error(&self) -> bool {
        self.status == 401 || self.status == 403
    }
}
