//! Server configuration for the Sankaku API.
//!
//! The defaults point at `https://capi-v2.sankakucomplex.com`. Any field can be overridden
//! through a TOML file, for example:
//!
//! ```toml
//! base_url = "https://capi-v2.sankakucomplex.com"
//! request_delay_ms = 1500
//! ```
use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::fs::read_to_string;
use std::io;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

pub(crate) const DEFAULT_UA: &str = concat!("Rust Sankaku Fetcher/", env!("CARGO_PKG_VERSION"));

/// Delay applied after every page request.
pub const DELAY_BETWEEN_REQUESTS_MS: u64 = 1000;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file. error: {source}")]
    ReadFail {
        #[from]
        source: io::Error,
    },

    #[error("Failed to parse config file. error: {source}")]
    ParseFail {
        #[from]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub name: String,
    pub pretty_name: String,
    pub user_agent: String,
    pub base_url: String,
    /// Milliseconds to wait after each page of posts is fetched.
    pub request_delay_ms: u64,
    /// Largest page size the server is known to honor.
    pub max_page_size: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            name: String::from("sankaku"),
            pretty_name: String::from("Sankaku Complex"),
            user_agent: DEFAULT_UA.to_string(),
            base_url: String::from("https://capi-v2.sankakucomplex.com"),
            request_delay_ms: DELAY_BETWEEN_REQUESTS_MS,
            max_page_size: 100,
        }
    }
}

impl Display for ServerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl ServerConfig {
    /// Reads a TOML file, filling every missing field with its default.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = read_to_string(path)?;
        let config = Self::from_toml_str(&contents)?;
        debug!("Loaded server config from {}", path.display());
        Ok(config)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let mut config: Self = toml::from_str(contents)?;

        while config.base_url.ends_with('/') {
            config.base_url.pop();
        }

        debug!("Server config: {:?}", config);
        Ok(config)
    }

    #[inline]
    #[must_use]
    pub const fn request_delay(&self) -> Duration {
        Duration::from_millis(self.request_delay_ms)
    }

    #[inline]
    pub fn auth_url(&self) -> String {
        format!("{}/auth/token", self.base_url)
    }

    #[inline]
    pub fn profile_url(&self) -> String {
        format!("{}/users/me?lang=en", self.base_url)
    }

    #[inline]
    pub fn keyset_url(&self) -> String {
        format!("{}/posts/keyset", self.base_url)
    }
}
