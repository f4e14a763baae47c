use reqwest::StatusCode;
use thiserror::Error;

use crate::auth;

/// Enumerates the possible errors that can arise while talking to the Sankaku API.
///
/// Every variant is returned straight to the caller. Nothing is retried and a failure in the
/// middle of a paginated fetch drops every post collected up to that point.
#[derive(Error, Debug)]
pub enum ClientError {
    /// The paging options were rejected before any request was made.
    #[error("Invalid query: {reason}")]
    InvalidQuery { reason: String },

    /// An operation that needs a bearer token was called on a client that has none.
    #[error("This client is not authorized. Authenticate and use the returned client instead")]
    Unauthorized,

    /// The token exchange failed.
    #[error("Authentication failed. error: {source}")]
    AuthenticationFailure {
        #[from]
        source: auth::Error,
    },

    /// The server answered with HTTP 429.
    #[error("Too many requests, the server is rate limiting this client")]
    RateLimited,

    /// The server answered with an unexpected status code.
    #[error("Request unsuccessful. http_status_code: {status}, body: {body}")]
    Api { status: StatusCode, body: String },

    /// The server answered successfully but the payload is not in the expected shape.
    #[error("Imageboard returned an invalid response: {reason}")]
    InvalidServerResponse { reason: String },

    /// An error occurred during a network request (e.g., connection timeout, DNS resolution failure).
    #[error("Connection Error")]
    ConnectionError(#[from] reqwest::Error),

    /// An error occurred while deserializing a JSON response from the API.
    #[error("Error while deserializing JSON")]
    JsonSerializeFail(#[from] serde_json::Error),
}

impl ClientError {
    /// Whether the caller should back off before trying again.
    #[inline]
    #[must_use]
    pub const fn is_rate_limited(&self) -> bool {
        matches!(self, Self::RateLimited)
    }

    pub(crate) fn invalid_response(reason: impl Into<String>) -> Self {
        Self::InvalidServerResponse {
            reason: reason.into(),
        }
    }
}
