//! # Sankaku Fetcher
//!
//! sankaku_fetcher is a small client for the Sankaku imageboard API. It logs in with a username
//! and password, lists posts by tag through the keyset-paginated `/posts/keyset` endpoint and
//! resolves the favorites of the logged in user.
//!
//! Requests are always sent one at a time, with a fixed delay after every page to stay below the
//! server's rate limit.
pub mod api;
pub mod auth;
pub mod cli;
pub mod client;
pub mod config;
pub mod error;
mod macros;
pub mod models;

pub use api::{PostLimit, PostQuery};
pub use auth::{AuthToken, Credentials};
pub use client::{SankakuClient, Transport};
pub use config::ServerConfig;
pub use error::ClientError;
pub use models::{Author, Page, Post, Rating, Tag, UserProfile};
