//! Operations on the Sankaku API.
//!
//! Every operation takes any [`Transport`] and refuses to run on one that isn't
//! [authorized](Transport::is_authorized), so it never sends an anonymous request by accident.
//!
//! ```no_run
//! use sankaku_fetcher::{Credentials, PostQuery, SankakuClient};
//!
//! async fn test() -> Result<(), Box<dyn std::error::Error>> {
//!     let credentials = Credentials::new("username", "password")?;
//!     let client = SankakuClient::new()?.login(&credentials).await?;
//!
//!     let query = PostQuery::new().page_size(10).max_posts(23);
//!     let favorites = client.get_favorites(&query).await?;
//!
//!     assert!(favorites.len() <= 23);
//!     Ok(())
//! }
//! ```
use crate::client::Transport;
use crate::error::ClientError;
use crate::join_tags;

pub mod favorites;
pub mod posts;
pub mod profile;

#[cfg(test)]
pub(crate) mod test_util;

/// Upper bound on the total number of posts a paginated fetch returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PostLimit {
    /// As many posts as fit in one page.
    #[default]
    OnePage,
    Posts(usize),
    /// Keep fetching until the server runs out of posts.
    Unlimited,
}

/// Paging and filtering options of a keyset post listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostQuery {
    /// Server-side content threshold, between 1 and 5.
    pub default_threshold: u8,
    /// Hide posts that also show up inside a book.
    pub hide_posts_in_books: bool,
    /// Number of posts requested per page.
    pub page_size: usize,
    pub limit: PostLimit,
    pub tags: Vec<String>,
}

impl Default for PostQuery {
    fn default() -> Self {
        Self {
            default_threshold: 2,
            hide_posts_in_books: true,
            page_size: 40,
            limit: PostLimit::OnePage,
            tags: Vec::new(),
        }
    }
}

impl PostQuery {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn tags<S: ToString>(mut self, tags: &[S]) -> Self {
        self.tags = tags.iter().map(ToString::to_string).collect();
        self
    }

    #[must_use]
    pub fn default_threshold(mut self, threshold: u8) -> Self {
        self.default_threshold = threshold;
        self
    }

    #[must_use]
    pub fn hide_posts_in_books(mut self, hide: bool) -> Self {
        self.hide_posts_in_books = hide;
        self
    }

    #[must_use]
    pub fn page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    #[must_use]
    pub fn max_posts(mut self, max: usize) -> Self {
        self.limit = PostLimit::Posts(max);
        self
    }

    #[must_use]
    pub fn unlimited(mut self) -> Self {
        self.limit = PostLimit::Unlimited;
        self
    }

    /// Total number of posts to stop at, if any.
    #[inline]
    pub const fn cap(&self) -> Option<usize> {
        match self.limit {
            PostLimit::OnePage => Some(self.page_size),
            PostLimit::Posts(max) => Some(max),
            PostLimit::Unlimited => None,
        }
    }

    pub fn validate(&self) -> Result<(), ClientError> {
        if !(1..=5).contains(&self.default_threshold) {
            return Err(ClientError::InvalidQuery {
                reason: format!(
                    "default_threshold must be between 1 and 5, got {}",
                    self.default_threshold
                ),
            });
        }

        if self.page_size == 0 {
            return Err(ClientError::InvalidQuery {
                reason: String::from("page_size must be positive"),
            });
        }

        Ok(())
    }
}

/// Builds the url of one keyset page.
///
/// The tags go in as a single `tags=a+b` parameter with every tag percent-encoded. The cursor is
/// percent-encoded too, so the server gets it back unmodified.
pub fn keyset_url(base_url: &str, query: &PostQuery, cursor: Option<&str>) -> String {
    let mut url = format!(
        "{base_url}?lang=en&default_threshold={}&limit={}",
        query.default_threshold, query.page_size
    );

    if query.hide_posts_in_books {
        url.push_str("&hide_posts_in_books=in-larger-tags");
    }

    if !query.tags.is_empty() {
        url.push_str("&tags=");
        url.push_str(&join_tags!(query.tags));
    }

    if let Some(next) = cursor {
        url.push_str("&next=");
        url.push_str(&urlencoding::encode(next));
    }

    url
}

pub(crate) fn ensure_authorized<T: Transport>(handle: &T) -> Result<(), ClientError> {
    if handle.is_authorized() {
        Ok(())
    } else {
        Err(ClientError::Unauthorized)
    }
}
