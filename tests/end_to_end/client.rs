//! REST client behavior against the fake API.

use std::time::Duration;

use permission_gate::config::Github;
use permission_gate::github::Client;
use permission_gate::{Error, Lookup, Repository};

use super::harness;

fn client(url: String, timeout_secs: u64) -> Client {
    Client::new(&Github {
        api_url: url,
        token: "test-token".to_string(),
        timeout_secs,
    })
    .expect("client")
}

fn repo() -> Repository {
    Repository::parse("owner/repo").unwrap()
}

#[tokio::test]
async fn fetches_collaborator_permission() {
    let api = harness::start(
        200,
        r#"{"permission":"write","role_name":"write","user":{"login":"actor"}}"#,
    )
    .await;

    let record = client(api.url(), 5)
        .collaborator_permission(&repo(), "actor")
        .await
        .unwrap();

    assert_eq!(record.permission.as_deref(), Some("write"));
    assert_eq!(record.role_name.as_deref(), Some("write"));

    let requests = api.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(
        requests[0].path,
        "/repos/owner/repo/collaborators/actor/permission"
    );
    assert_eq!(requests[0].authorization.as_deref(), Some("Bearer test-token"));
    assert_eq!(
        requests[0].accept.as_deref(),
        Some("application/vnd.github+json")
    );
}

#[tokio::test]
async fn trailing_slash_in_api_url_is_ignored() {
    let api = harness::start(200, r#"{"permission":"read"}"#).await;

    client(format!("{}/", api.url()), 5)
        .collaborator_permission(&repo(), "actor")
        .await
        .unwrap();

    assert_eq!(
        api.requests()[0].path,
        "/repos/owner/repo/collaborators/actor/permission"
    );
}

#[tokio::test]
async fn error_status_carries_api_message() {
    let api = harness::start(404, r#"{"message":"Not Found"}"#).await;

    let err = client(api.url(), 5)
        .collaborator_permission(&repo(), "actor")
        .await
        .unwrap_err();

    assert!(
        matches!(&err, Error::Api { status: 404, message } if message == "Not Found"),
        "unexpected error: {err}"
    );
    assert!(!err.is_fatal());
}

#[tokio::test]
async fn missing_permission_field_is_none() {
    let api = harness::start(200, r#"{"user":{"login":"actor"}}"#).await;

    let record = client(api.url(), 5)
        .collaborator_permission(&repo(), "actor")
        .await
        .unwrap();

    assert!(record.permission.is_none());
}

#[tokio::test]
async fn malformed_body_is_lookup_error() {
    let api = harness::start(200, "not json").await;

    let err = client(api.url(), 5)
        .collaborator_permission(&repo(), "actor")
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Json(_)), "unexpected error: {err}");
    assert!(!err.is_fatal());
}

#[tokio::test]
async fn slow_api_times_out() {
    let api =
        harness::start_with_delay(200, r#"{"permission":"admin"}"#, Some(Duration::from_secs(3)))
            .await;

    let err = client(api.url(), 1)
        .collaborator_permission(&repo(), "actor")
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Http(_)), "unexpected error: {err}");
}
