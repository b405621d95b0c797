use crate::e2e::helpers;

use helpers::spotify_mocks::{mock_token_exchange, mock_token_refresh};
use helpers::TestContext;
use hyper::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn it_should_redirect_login_to_the_consent_page() {
    let ctx = TestContext::new().await.unwrap();

    let response = ctx.client.get("/login").await.unwrap();

    response.assert_status(StatusCode::TEMPORARY_REDIRECT);

    let location = response
        .header("location")
        .expect("Missing Location header");
    assert!(
        location.starts_with(&format!("{}/authorize?", ctx.spotify.uri())),
        "Location should point at the consent page, got: {}",
        location
    );
    assert!(location.contains("client_id=test_spotify_client_id"));
    assert!(location.contains("response_type=code"));
    assert!(location.contains("redirect_uri=http%3A%2F%2Flocalhost%3A5500%2Fcallback"));
    assert!(location.contains("scope=user-read-playback-state%20user-modify-playback-state"));
}

#[tokio::test]
async fn it_should_reject_callback_without_code() {
    let ctx = TestContext::new().await.unwrap();

    let response = ctx.client.get("/callback").await.unwrap();

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.text(), "Error: No authorization code received.");
}

#[tokio::test]
async fn it_should_reject_callback_with_an_empty_code() {
    let ctx = TestContext::new().await.unwrap();
    ctx.fixtures.authorize("good-access", "good-refresh").await;

    // The exchange must never run for a blank code
    Mock::given(method("POST"))
        .and(path("/api/token"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": "invalid_grant",
        })))
        .expect(0)
        .mount(&ctx.spotify)
        .await;

    let response = ctx.client.get("/callback?code=").await.unwrap();

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.text(), "Error: No authorization code received.");

    let stored = ctx
        .fixtures
        .stored_tokens()
        .await
        .expect("Token set vanished");
    assert_eq!(stored.access_token, "good-access");
    assert_eq!(stored.refresh_token, "good-refresh");
}

#[tokio::test]
async fn it_should_store_the_token_set_on_callback() {
    let ctx = TestContext::new().await.unwrap();
    mock_token_exchange(&ctx.spotify, "AT-1", "RT-1").await;

    let response = ctx.client.get("/callback?code=test-code").await.unwrap();

    response.assert_status(StatusCode::OK);
    assert_eq!(
        response.text(),
        "Authorization successful! You can now control Spotify."
    );

    let stored = ctx
        .fixtures
        .stored_tokens()
        .await
        .expect("No token set stored");
    assert_eq!(stored.access_token, "AT-1");
    assert_eq!(stored.refresh_token, "RT-1");
}

#[tokio::test]
async fn it_should_answer_bad_gateway_when_the_token_endpoint_is_broken() {
    let ctx = TestContext::new().await.unwrap();

    Mock::given(method("POST"))
        .and(path("/api/token"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream exploded"))
        .mount(&ctx.spotify)
        .await;

    let response = ctx.client.get("/callback?code=test-code").await.unwrap();

    response.assert_status(StatusCode::BAD_GATEWAY);
    assert!(response.text().starts_with("Spotify request failed:"));
}

#[tokio::test]
async fn it_should_refresh_the_access_token_and_keep_the_refresh_token() {
    let ctx = TestContext::new().await.unwrap();
    ctx.fixtures.authorize("stale-access", "RT-1").await;
    mock_token_refresh(&ctx.spotify, "fresh-access").await;

    let response = ctx.client.get("/refresh").await.unwrap();

    response.assert_status(StatusCode::OK);
    assert_eq!(response.text(), "Access token refreshed.");

    let stored = ctx
        .fixtures
        .stored_tokens()
        .await
        .expect("Token set vanished");
    assert_eq!(stored.access_token, "fresh-access");
    // The refresh answer carried no refresh_token; the stored one survives
    assert_eq!(stored.refresh_token, "RT-1");
}

#[tokio::test]
async fn it_should_reject_refresh_before_login() {
    let ctx = TestContext::new().await.unwrap();

    let response = ctx.client.get("/refresh").await.unwrap();

    response.assert_status(StatusCode::UNAUTHORIZED);
    assert_eq!(
        response.text(),
        "No refresh token available. Visit /login to connect an account."
    );
}

#[tokio::test]
async fn it_should_reject_refresh_when_the_stored_set_has_no_refresh_token() {
    let ctx = TestContext::new().await.unwrap();

    // A failed exchange leaves a defaulted token set behind
    ctx.fixtures.authorize("", "").await;

    let response = ctx.client.get("/refresh").await.unwrap();

    response.assert_status(StatusCode::UNAUTHORIZED);
}
