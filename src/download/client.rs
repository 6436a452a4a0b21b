//! HTTP client wrapper for page fetches and favicon downloads.
//!
//! This module provides the `HttpClient` struct which issues single,
//! timed GET requests and maps failures to [`FetchError`].

use std::time::Duration;

use futures_util::StreamExt;
use reqwest::header::USER_AGENT;
use reqwest::{Client, StatusCode};
use tracing::{debug, instrument, trace};
use url::Url;

use super::constants::REQUEST_TIMEOUT;
use super::error::FetchError;
use crate::user_agent::PAGE_USER_AGENT;

/// HTTP client for page fetches and favicon downloads.
///
/// This client is designed to be created once and reused for the whole batch,
/// taking advantage of connection pooling. Requests are never retried.
///
/// # Example
///
/// ```no_run
/// use favicon_core::download::HttpClient;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = HttpClient::new();
/// let html = client.fetch_html("https://example.com").await?;
/// println!("{} bytes of markup", html.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpClient {
    /// Creates a new HTTP client with the fixed 5 second request timeout.
    ///
    /// # Panics
    ///
    /// Panics if the HTTP client builder fails to build with the static
    /// configuration. This should never happen in practice.
    #[must_use]
    pub fn new() -> Self {
        Self::with_timeout(REQUEST_TIMEOUT)
    }

    /// Creates a new HTTP client with an explicit per-request timeout.
    ///
    /// # Panics
    ///
    /// Panics if the HTTP client builder fails to build with the supplied
    /// timeout.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn with_timeout(timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .gzip(true)
            .build()
            .expect("failed to build HTTP client with static configuration");
        Self { client }
    }

    /// Fetches a page's markup.
    ///
    /// Sends `User-Agent: Mozilla/5.0` and follows redirects. Any status in
    /// the 4xx/5xx range after redirects is an error.
    ///
    /// # Errors
    ///
    /// Returns `FetchError` if the URL is invalid, the request fails or times
    /// out, the server returns an error status, or the body cannot be read.
    #[instrument(skip(self), fields(url = %url))]
    pub async fn fetch_html(&self, url: &str) -> Result<String, FetchError> {
        let parsed = parse_http_url(url)?;

        let response = self
            .client
            .get(parsed)
            .header(USER_AGENT, PAGE_USER_AGENT)
            .send()
            .await
            .map_err(|e| FetchError::from_reqwest(url, e))?;

        let status = response.status();
        if status.is_client_error() || status.is_server_error() {
            return Err(FetchError::http_status(url, status.as_u16()));
        }

        let html = response
            .text()
            .await
            .map_err(|e| FetchError::from_reqwest(url, e))?;
        debug!(bytes = html.len(), "page fetched");
        Ok(html)
    }

    /// Downloads a favicon candidate's bytes.
    ///
    /// Uses default client headers. Only `200 OK` counts as success; the body
    /// is streamed chunk by chunk into memory.
    ///
    /// # Errors
    ///
    /// Returns `FetchError` if the URL is invalid, the request fails or times
    /// out, the status is anything other than 200, or the body stream breaks.
    #[instrument(level = "trace", skip(self), fields(url = %url))]
    pub async fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let parsed = parse_http_url(url)?;

        let response = self
            .client
            .get(parsed)
            .send()
            .await
            .map_err(|e| FetchError::from_reqwest(url, e))?;

        if response.status() != StatusCode::OK {
            return Err(FetchError::http_status(url, response.status().as_u16()));
        }

        let capacity = response
            .content_length()
            .and_then(|len| usize::try_from(len).ok())
            .unwrap_or(0);
        let mut body = Vec::with_capacity(capacity);
        let mut stream = response.bytes_stream();
        while let Some(chunk_result) = stream.next().await {
            let chunk = chunk_result.map_err(|e| FetchError::from_reqwest(url, e))?;
            body.extend_from_slice(&chunk);
        }

        trace!(bytes = body.len(), "candidate downloaded");
        Ok(body)
    }
}

fn parse_http_url(url: &str) -> Result<Url, FetchError> {
    let parsed = Url::parse(url).map_err(|_| FetchError::invalid_url(url))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(FetchError::invalid_url(url));
    }
    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_http_url_accepts_http_and_https() {
        assert!(parse_http_url("http://example.com").is_ok());
        assert!(parse_http_url("https://example.com/favicon.ico").is_ok());
    }

    #[test]
    fn test_parse_http_url_rejects_other_schemes_and_garbage() {
        assert!(matches!(
            parse_http_url("ftp://example.com/favicon.ico"),
            Err(FetchError::InvalidUrl { .. })
        ));
        assert!(matches!(
            parse_http_url("example.com/http-guide"),
            Err(FetchError::InvalidUrl { .. })
        ));
    }

    #[tokio::test]
    async fn test_fetch_html_invalid_url_fails_without_network() {
        let client = HttpClient::new();
        let result = client.fetch_html("not a url").await;
        assert!(matches!(result, Err(FetchError::InvalidUrl { .. })));
    }
}
