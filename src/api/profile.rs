use log::debug;
use serde_json::Value;

use crate::api::ensure_authorized;
use crate::client::{RawResponse, Transport};
use crate::error::ClientError;
use crate::models::UserProfile;

/// Fetches the profile of the user the handle is authorized as.
pub async fn get_profile<T: Transport>(handle: &T) -> Result<UserProfile, ClientError> {
    ensure_authorized(handle)?;

    let res = handle.get(&handle.config().profile_url()).await?;
    let profile = parse_profile_response(res)?;

    debug!("User id: {}", profile.id);
    debug!("Username: {}", profile.name);
    Ok(profile)
}

/// Checks the `success` flag of a `/users/me` response and decodes its `user` object.
pub fn parse_profile_response(res: RawResponse) -> Result<UserProfile, ClientError> {
    if !res.status.is_success() {
        return Err(ClientError::Api {
            status: res.status,
            body: res.body,
        });
    }

    if res.body.trim().is_empty() {
        return Err(ClientError::invalid_response("Response body is null"));
    }

    let mut parsed: Value = serde_json::from_str(&res.body)?;

    match parsed.get("success").and_then(Value::as_bool) {
        Some(true) => {}
        Some(false) => return Err(ClientError::invalid_response("Response was not successful")),
        None => return Err(ClientError::invalid_response("missing field 'success'")),
    }

    let user = parsed
        .get_mut("user")
        .map(Value::take)
        .filter(|user| !user.is_null())
        .ok_or_else(|| ClientError::invalid_response("missing field 'user'"))?;

    Ok(serde_json::from_value(user)?)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::api::test_util::{profile, ScriptedTransport, TEST_BASE_URL};
    use reqwest::StatusCode;

    fn ok(body: &str) -> RawResponse {
        RawResponse::new(StatusCode::OK, body)
    }

    fn invalid_reason(err: ClientError) -> String {
        match err {
            ClientError::InvalidServerResponse { reason } => reason,
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn fetch_profile() {
        let source = ScriptedTransport::new(vec![profile("someone")]);

        let user = get_profile(&source).await.unwrap();

        assert_eq!(
            user,
            UserProfile {
                email: String::from("someone@example.com"),
                favorite_count: 43,
                id: 77,
                name: String::from("someone"),
            }
        );
        assert_eq!(
            source.requests(),
            vec![format!("{TEST_BASE_URL}/users/me?lang=en")]
        );
    }

    #[tokio::test]
    async fn unauthorized_handle_is_rejected() {
        let source = ScriptedTransport::unauthorized(vec![profile("someone")]);

        let err = get_profile(&source).await.unwrap_err();

        assert!(matches!(err, ClientError::Unauthorized));
        assert!(source.requests().is_empty());
    }

    #[test]
    fn failed_status() {
        let err = parse_profile_response(RawResponse::new(StatusCode::UNAUTHORIZED, "nope"))
            .unwrap_err();
        assert!(matches!(
            err,
            ClientError::Api { status, .. } if status == StatusCode::UNAUTHORIZED
        ));
    }

    #[test]
    fn shape_errors() {
        assert_eq!(
            invalid_reason(parse_profile_response(ok("")).unwrap_err()),
            "Response body is null"
        );
        assert_eq!(
            invalid_reason(parse_profile_response(ok(r#"{"user":{}}"#)).unwrap_err()),
            "missing field 'success'"
        );
        assert_eq!(
            invalid_reason(
                parse_profile_response(ok(r#"{"success":false,"user":null}"#)).unwrap_err()
            ),
            "Response was not successful"
        );
        assert_eq!(
            invalid_reason(parse_profile_response(ok(r#"{"success":true}"#)).unwrap_err()),
            "missing field 'user'"
        );
    }

    #[test]
    fn incomplete_user_is_a_json_error() {
        let err = parse_profile_response(ok(r#"{"success":true,"user":{"id":1}}"#)).unwrap_err();
        assert!(matches!(err, ClientError::JsonSerializeFail(_)));
    }
}
