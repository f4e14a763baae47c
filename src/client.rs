//! The HTTP handle every API call goes through.
//!
//! A [`SankakuClient`] starts out unauthenticated. Authenticating does not change it: instead
//! [`with_auth`](SankakuClient::with_auth) returns a second handle that shares the same connection
//! pool and attaches `Authorization: <type> <token>` to every request it builds.
use log::debug;
use reqwest::header::{HeaderValue, AUTHORIZATION};
use reqwest::{Client, RequestBuilder, StatusCode};
use std::future::Future;

use crate::api::{self, PostQuery};
use crate::auth::{self, AuthToken, Credentials};
use crate::config::ServerConfig;
use crate::error::ClientError;
use crate::models::{Post, UserProfile};

/// Status and body of a finished request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: StatusCode,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Anything the API operations can send requests through.
pub trait Transport {
    /// The server this transport talks to.
    fn config(&self) -> &ServerConfig;

    /// Whether requests sent through this transport carry a bearer token.
    fn is_authorized(&self) -> bool;

    /// Sends a `GET` to `url` and reads the whole body.
    fn get(&self, url: &str) -> impl Future<Output = Result<RawResponse, ClientError>> + Send;
}

#[derive(Debug, Clone)]
pub struct SankakuClient {
    client: Client,
    config: ServerConfig,
    auth_header: Option<HeaderValue>,
}

impl SankakuClient {
    /// Unauthenticated client for the default server.
    pub fn new() -> Result<Self, ClientError> {
        Self::with_config(ServerConfig::default())
    }

    pub fn with_config(config: ServerConfig) -> Result<Self, ClientError> {
        let client = Client::builder().user_agent(&config.user_agent).build()?;
        Ok(Self::from_parts(client, config))
    }

    /// Wraps an already configured `reqwest` client.
    pub fn from_parts(client: Client, config: ServerConfig) -> Self {
        Self {
            client,
            config,
            auth_header: None,
        }
    }

    /// Exchanges `credentials` for a token without touching this client.
    pub async fn authenticate(&self, credentials: &Credentials) -> Result<AuthToken, ClientError> {
        Ok(auth::authenticate(&self.client, &self.config, credentials).await?)
    }

    /// Returns a new handle that sends `token` with every request.
    pub fn with_auth(&self, token: &AuthToken) -> Result<Self, ClientError> {
        let mut header =
            HeaderValue::from_str(&token.header_value()).map_err(|_| auth::Error::InvalidToken)?;
        header.set_sensitive(true);

        debug!("Attaching {} token to client", token.token_type);

        Ok(Self {
            client: self.client.clone(),
            config: self.config.clone(),
            auth_header: Some(header),
        })
    }

    /// Shortcut for [`authenticate`](Self::authenticate) followed by [`with_auth`](Self::with_auth).
    pub async fn login(&self, credentials: &Credentials) -> Result<Self, ClientError> {
        let token = self.authenticate(credentials).await?;
        self.with_auth(&token)
    }

    /// Returns the used client for external use.
    #[inline]
    pub fn client(&self) -> Client {
        self.client.clone()
    }

    pub(crate) fn request(&self, url: &str) -> RequestBuilder {
        let req = self.client.get(url);
        match &self.auth_header {
            Some(header) => req.header(AUTHORIZATION, header.clone()),
            None => req,
        }
    }

    pub async fn get_profile(&self) -> Result<UserProfile, ClientError> {
        api::profile::get_profile(self).await
    }

    pub async fn get_posts(&self, query: &PostQuery) -> Result<Vec<Post>, ClientError> {
        api::posts::get_posts(self, query).await
    }

    pub async fn get_favorites(&self, query: &PostQuery) -> Result<Vec<Post>, ClientError> {
        api::favorites::get_favorites(self, query).await
    }
}

impl Transport for SankakuClient {
    #[inline]
    fn config(&self) -> &ServerConfig {
        &self.config
    }

    #[inline]
    fn is_authorized(&self) -> bool {
        self.auth_header.is_some()
    }

    async fn get(&self, url: &str) -> Result<RawResponse, ClientError> {
        debug!("GET {}", url);

        let res = self.request(url).send().await?;
        let status = res.status();
        let body = res.text().await?;

        debug!("Server returned {} ({} bytes)", status, body.len());
        Ok(RawResponse { status, body })
    }
}
