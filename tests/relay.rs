use httpmock::prelude::*;
use portfolio_site::config::RelayConfig;
use portfolio_site::contact::{ContactForm, Outcome, SubmissionState, NETWORK_ERROR};
use portfolio_site::relay::{RelayClient, RelayError};
use serde_json::json;

fn form() -> ContactForm {
    ContactForm {
        name: "Ann".to_string(),
        email: "ann@example.com".to_string(),
        message: "Let's build something".to_string(),
    }
}

fn client(endpoint: String) -> RelayClient {
    RelayClient::new(RelayConfig::new(endpoint, "test-key")).expect("client should build")
}

#[tokio::test]
async fn test_accepted_submission_posts_once_with_access_key() {
    let server = MockServer::start_async().await;
    let relay_mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/submit")
                .header("content-type", "application/x-www-form-urlencoded")
                .body_contains("name=Ann")
                .body_contains("email=ann%40example.com")
                .body_contains("access_key=test-key");
            then.status(200).json_body(json!({
                "success": true,
                "message": "Email sent successfully!"
            }));
        })
        .await;

    let reply = client(server.url("/submit")).submit(&form()).await.unwrap();

    relay_mock.assert_async().await;
    assert!(reply.success);

    let mut state = SubmissionState::default();
    state.begin();
    state.finish(Outcome::from_reply(Ok::<_, RelayError>(reply)));
    assert!(state.is_success());
    assert!(!state.is_submitting());
}

#[tokio::test]
async fn test_rejection_with_error_status_still_decodes_message() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/submit");
            then.status(400).json_body(json!({
                "success": false,
                "message": "X"
            }));
        })
        .await;

    let reply = client(server.url("/submit")).submit(&form()).await;
    assert_eq!(Outcome::from_reply(reply), Outcome::Error("X".to_string()));
}

#[tokio::test]
async fn test_malformed_body_is_a_network_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/submit");
            then.status(502).body("<html>Bad Gateway</html>");
        })
        .await;

    let reply = client(server.url("/submit")).submit(&form()).await;
    assert!(matches!(reply, Err(RelayError::Malformed(_))));
    assert_eq!(
        Outcome::from_reply(reply),
        Outcome::Error(NETWORK_ERROR.to_string())
    );
}

#[tokio::test]
async fn test_unreachable_relay_is_a_network_error() {
    // nothing listens on port 1
    let reply = client("http://127.0.0.1:1/submit".to_string())
        .submit(&form())
        .await;
    assert!(matches!(reply, Err(RelayError::Transport(_))));

    let mut state = SubmissionState::default();
    state.begin();
    state.finish(Outcome::from_reply(reply));
    assert_eq!(state.error_message(), Some(NETWORK_ERROR));
    assert!(!state.is_submitting());
}

#[tokio::test]
async fn test_each_submit_makes_exactly_one_request() {
    let server = MockServer::start_async().await;
    let relay_mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/submit");
            then.status(200).json_body(json!({ "success": true }));
        })
        .await;

    let relay = client(server.url("/submit"));
    relay.submit(&form()).await.unwrap();
    relay.submit(&form()).await.unwrap();

    assert_eq!(relay_mock.hits_async().await, 2);
}
