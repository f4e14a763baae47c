//! Keyset-paginated post listing.
//!
//! Pages are requested one after the other, following the opaque `next` cursor of each page,
//! until one of these happens:
//! * the cap of the [`PostQuery`] is exceeded by the current page, which then gets truncated;
//! * the server sends a page shorter than `page_size`;
//! * the server sends a `null` cursor.
//!
//! The configured delay is awaited after every page, including the last one.
use log::{debug, warn};
use reqwest::StatusCode;
use tokio::time::sleep;

use crate::api::{ensure_authorized, keyset_url, PostQuery};
use crate::client::{RawResponse, Transport};
use crate::error::ClientError;
use crate::models::{Page, Post};

// Avoids reserving a huge buffer for big caps that the server can't fill anyway.
const MAX_PREALLOC: usize = 1024;

/// Fetches posts matching `query`, following the keyset cursor page after page.
///
/// Nothing is returned on failure: a rate limit or server error halfway through drops every
/// post collected before it.
pub async fn get_posts<T: Transport>(
    handle: &T,
    query: &PostQuery,
) -> Result<Vec<Post>, ClientError> {
    ensure_authorized(handle)?;
    query.validate()?;

    let cap = query.cap();
    let delay = handle.config().request_delay();
    let base_url = handle.config().keyset_url();

    let mut posts: Vec<Post> =
        Vec::with_capacity(cap.unwrap_or(query.page_size).min(MAX_PREALLOC));
    let mut cursor: Option<String> = None;

    loop {
        let url = keyset_url(&base_url, query, cursor.as_deref());
        let page = decode_page(handle.get(&url).await?)?;
        let size = page.data.len();

        let fetch_next = match cap {
            Some(max) if posts.len() + size > max => {
                let remaining = max.saturating_sub(posts.len());
                debug!("Target post count of {max} reached, keeping {remaining} of {size} posts");
                posts.extend(page.data.into_iter().take(remaining));
                false
            }
            _ => {
                posts.extend(page.data);
                cursor = page.meta.next;
                size == query.page_size && cursor.is_some()
            }
        };

        debug!("Fetched {size} posts, {} in total", posts.len());

        if !delay.is_zero() {
            sleep(delay).await;
        }

        if !fetch_next {
            break;
        }
    }

    Ok(posts)
}

/// Maps the status of a keyset response to a page or to the matching error.
pub fn decode_page(res: RawResponse) -> Result<Page, ClientError> {
    match res.status {
        StatusCode::OK => {
            if res.body.trim().is_empty() {
                return Err(ClientError::invalid_response("Response body is empty"));
            }
            Ok(serde_json::from_str(&res.body)?)
        }
        StatusCode::TOO_MANY_REQUESTS => {
            warn!("Server is rate limiting requests");
            Err(ClientError::RateLimited)
        }
        status => Err(ClientError::Api {
            status,
            body: res.body,
        }),
    }
}
