//! All methods and structs related to user authentication on the Sankaku API.
//!
//! Authentication trades a username and password for a bearer token with a single
//! `POST /auth/token`. The token only lives inside the [`SankakuClient`](crate::SankakuClient)
//! it gets attached to and is never written anywhere.
use log::debug;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde_json::{json, Value};
use std::fmt;
use thiserror::Error;

use crate::config::ServerConfig;

#[derive(Error, Debug)]
pub enum Error {
    /// Either the username or the password was not supplied.
    #[error("Missing credential: {field}")]
    MissingCredential { field: &'static str },

    /// The auth endpoint answered with a non-success status code.
    #[error("Invalid login. Server returned status code {status}")]
    Rejected { status: StatusCode },

    #[error("Auth response body is empty")]
    EmptyBody,

    #[error("Auth response is missing field '{field}'")]
    MissingField { field: &'static str },

    /// Indicates errors while connecting to the auth url.
    #[error("Connection to auth url failed")]
    ConnectionError(#[from] reqwest::Error),

    #[error("Failed to parse auth response. error: {source}")]
    InvalidJson {
        #[from]
        source: serde_json::Error,
    },

    /// The server handed out a token that can't be sent back as a header value.
    #[error("Received token cannot be used in the Authorization header")]
    InvalidToken,
}

/// Username and password used once to obtain an [`AuthToken`].
#[derive(Clone)]
pub struct Credentials {
    username: String,
    password: String,
}

impl Credentials {
    /// Fails if either value is empty or only whitespace. Both are kept exactly as given.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Result<Self, Error> {
        let username = username.into();
        let password = password.into();

        if username.trim().is_empty() {
            return Err(Error::MissingCredential { field: "username" });
        }

        if password.trim().is_empty() {
            return Err(Error::MissingCredential { field: "password" });
        }

        Ok(Self { username, password })
    }

    #[inline]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Request body expected by `/auth/token`.
    pub(crate) fn login_body(&self) -> Value {
        json!({
            "login": self.username,
            "password": self.password,
            "mfaParams": {
                "login": self.username,
            },
        })
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Token handed out by the auth endpoint.
#[derive(Clone, PartialEq, Eq)]
pub struct AuthToken {
    pub token_type: String,
    pub token: String,
}

impl AuthToken {
    pub fn new(token_type: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            token_type: token_type.into(),
            token: token.into(),
        }
    }

    /// A token of the default `Bearer` type.
    pub fn bearer(token: impl Into<String>) -> Self {
        Self::new("Bearer", token)
    }

    /// Value of the `Authorization` header, `"<type> <token>"`.
    #[inline]
    pub fn header_value(&self) -> String {
        format!("{} {}", self.token_type, self.token)
    }
}

impl fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthToken")
            .field("token_type", &self.token_type)
            .field("token", &"<redacted>")
            .finish()
    }
}

/// Extracts the token from the body returned by `/auth/token`.
pub fn parse_token_response(body: &str) -> Result<AuthToken, Error> {
    #[derive(Debug, Deserialize)]
    struct TokenResponse {
        token_type: Option<String>,
        access_token: Option<String>,
    }

    if body.trim().is_empty() {
        return Err(Error::EmptyBody);
    }

    let res: TokenResponse = serde_json::from_str(body)?;

    let token_type = res.token_type.ok_or(Error::MissingField {
        field: "token_type",
    })?;
    let access_token = res.access_token.ok_or(Error::MissingField {
        field: "access_token",
    })?;

    Ok(AuthToken::new(token_type, access_token))
}

/// Maps the status and body of an `/auth/token` response to a token.
pub fn parse_auth_response(status: StatusCode, body: &str) -> Result<AuthToken, Error> {
    if !status.is_success() {
        debug!("Auth request failed with status {}", status);
        return Err(Error::Rejected { status });
    }

    parse_token_response(body)
}

/// Exchanges `credentials` for a token. Issues exactly one request and never retries.
pub async fn authenticate(
    client: &Client,
    config: &ServerConfig,
    credentials: &Credentials,
) -> Result<AuthToken, Error> {
    debug!("Authenticating to {}", config.base_url);

    let res = client
        .post(config.auth_url())
        .json(&credentials.login_body())
        .send()
        .await?;

    let status = res.status();
    let body = res.text().await?;
    let token = parse_auth_response(status, &body)?;

    debug!(
        "Authenticated as {} with a {} token",
        credentials.username(),
        token.token_type
    );

    Ok(token)
}
