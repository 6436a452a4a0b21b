//! Integration tests for the HTTP client.
//!
//! These tests verify page fetches and favicon downloads against mock servers.

mod support;

use std::time::Duration;

use favicon_core::download::{FetchError, HttpClient};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_fetch_html_sends_mozilla_user_agent() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .and(header("user-agent", "Mozilla/5.0"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>ok</html>"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = HttpClient::new();
    let html = client.fetch_html(&mock_server.uri()).await;

    assert_eq!(html.unwrap(), "<html>ok</html>");
}

#[tokio::test]
async fn test_fetch_html_follows_redirects() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(
            ResponseTemplate::new(301)
                .insert_header("Location", format!("{}/home", mock_server.uri())),
        )
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/home"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<p>home</p>"))
        .mount(&mock_server)
        .await;

    let client = HttpClient::new();
    let html = client.fetch_html(&mock_server.uri()).await.unwrap();

    assert_eq!(html, "<p>home</p>");
}

#[tokio::test]
async fn test_fetch_html_error_status_is_reported() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&mock_server)
        .await;

    let client = HttpClient::new();
    let err = client.fetch_html(&mock_server.uri()).await.unwrap_err();

    assert!(matches!(err, FetchError::HttpStatus { status: 503, .. }));
}

#[tokio::test]
async fn test_fetch_html_timeout_is_reported() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("slow")
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&mock_server)
        .await;

    let client = HttpClient::with_timeout(Duration::from_millis(200));
    let err = client.fetch_html(&mock_server.uri()).await.unwrap_err();

    assert!(matches!(err, FetchError::Timeout { .. }), "got {err:?}");
}

#[tokio::test]
async fn test_fetch_bytes_returns_body_without_custom_user_agent() {
    let mock_server = MockServer::start().await;
    let icon = support::ico_bytes(16, 16);
    Mock::given(method("GET"))
        .and(path("/favicon.ico"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(icon.clone()))
        .mount(&mock_server)
        .await;

    let client = HttpClient::new();
    let url = format!("{}/favicon.ico", mock_server.uri());
    let bytes = client.fetch_bytes(&url).await.unwrap();

    assert_eq!(bytes, icon);
    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    let agent = requests[0]
        .headers
        .get("user-agent")
        .and_then(|v| v.to_str().ok());
    assert_ne!(agent, Some("Mozilla/5.0"));
}

#[tokio::test]
async fn test_fetch_bytes_rejects_non_200_success() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/favicon.png"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&mock_server)
        .await;

    let client = HttpClient::new();
    let url = format!("{}/favicon.png", mock_server.uri());
    let err = client.fetch_bytes(&url).await.unwrap_err();

    assert_eq!(err.status(), Some(204));
}

#[tokio::test]
async fn test_fetch_bytes_connection_refused_is_network_error() {
    // Port 1 (tcpmux) is closed on any ordinary test host.
    let client = HttpClient::new();
    let err = client
        .fetch_bytes("http://127.0.0.1:1/favicon.ico")
        .await
        .unwrap_err();

    assert!(matches!(err, FetchError::Network { .. }), "got {err:?}");
}
