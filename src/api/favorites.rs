use log::debug;

use crate::api::{ensure_authorized, posts::get_posts, profile::get_profile, PostQuery};
use crate::client::Transport;
use crate::error::ClientError;
use crate::models::Post;

/// Search tag matching every post the user `name` has favorited.
#[inline]
pub fn favorites_tag(name: &str) -> String {
    format!("fav:{name}")
}

/// Fetches the favorites of the user the handle is authorized as.
///
/// The `fav:<username>` tag is appended to the tags of `query`; every other option is
/// passed through to [`get_posts`] untouched.
pub async fn get_favorites<T: Transport>(
    handle: &T,
    query: &PostQuery,
) -> Result<Vec<Post>, ClientError> {
    ensure_authorized(handle)?;
    query.validate()?;

    let profile = get_profile(handle).await?;

    let mut query = query.clone();
    query.tags.push(favorites_tag(&profile.name));
    debug!("Fetching favorites of {}", profile.name);

    get_posts(handle, &query).await
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::api::test_util::{page, profile, ScriptedTransport, TEST_BASE_URL};
    use crate::client::RawResponse;
    use reqwest::StatusCode;

    #[tokio::test]
    async fn profile_then_posts_with_fav_tag() {
        let source = ScriptedTransport::new(vec![profile("someone"), page(0, 7, None)]);
        let query = PostQuery::new().tags(&["landscape", "rating:s"]);

        let posts = get_favorites(&source, &query).await.unwrap();
        let requests = source.requests();

        assert_eq!(posts.len(), 7);
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0], format!("{TEST_BASE_URL}/users/me?lang=en"));
        assert!(requests[1].starts_with(&format!("{TEST_BASE_URL}/posts/keyset?")));
        assert!(requests[1].ends_with("&tags=landscape+rating%3As+fav%3Asomeone"));
    }

    #[tokio::test]
    async fn paging_options_are_passed_through() {
        let source = ScriptedTransport::new(vec![
            profile("someone"),
            page(0, 10, Some("c1")),
            page(10, 10, Some("c2")),
            page(20, 10, Some("c3")),
        ]);
        let query = PostQuery::new()
            .page_size(10)
            .max_posts(23)
            .default_threshold(4)
            .hide_posts_in_books(false);

        let posts = get_favorites(&source, &query).await.unwrap();
        let requests = source.requests();

        assert_eq!(posts.len(), 23);
        assert_eq!(requests.len(), 4);
        assert!(requests[1].contains("default_threshold=4&limit=10&tags=fav%3Asomeone"));
        assert!(!requests[1].contains("hide_posts_in_books"));
    }

    #[tokio::test]
    async fn unauthorized_handle_is_rejected() {
        let source = ScriptedTransport::unauthorized(vec![profile("someone"), page(0, 1, None)]);

        let err = get_favorites(&source, &PostQuery::new()).await.unwrap_err();

        assert!(matches!(err, ClientError::Unauthorized));
        assert!(source.requests().is_empty());
    }

    #[tokio::test]
    async fn invalid_query_skips_the_profile_lookup() {
        let source = ScriptedTransport::new(vec![profile("someone")]);

        let err = get_favorites(&source, &PostQuery::new().default_threshold(9))
            .await
            .unwrap_err();

        assert!(matches!(err, ClientError::InvalidQuery { .. }));
        assert!(source.requests().is_empty());
    }

    #[tokio::test]
    async fn profile_failure_stops_before_posts() {
        let source = ScriptedTransport::new(vec![
            RawResponse::new(StatusCode::TOO_MANY_REQUESTS, ""),
            page(0, 1, None),
        ]);

        let err = get_favorites(&source, &PostQuery::new()).await.unwrap_err();

        assert!(matches!(
            err,
            ClientError::Api { status, .. } if status == StatusCode::TOO_MANY_REQUESTS
        ));
        assert_eq!(source.requests().len(), 1);
    }

    #[test]
    fn tag_format() {
        assert_eq!(favorites_tag("someone"), "fav:someone");
    }
}
