// Literalura - Personal Book Catalog
// Copyright (C) 2025 Henning Berge
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.


//! HTTP client for the Gutendex catalog API
//!
//! A thin wrapper around `reqwest::Client`:
//! - Base URL management (defaults to the public Gutendex instance)
//! - Bounded request timeout
//! - Default headers (User-Agent, Accept)
//!
//! There is no retry logic. A failed request is reported once and the user
//! decides whether to search again.
//!
//! # Request Format
//! `GET {base_url}?search={title}` where spaces in the title become `%20`.
//! No other characters are escaped.

use crate::api::models::SearchResponse;
use crate::api::CatalogGateway;
use crate::error::{CatalogError, Result};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};
use reqwest::{Client, Response};
use std::time::Duration;
use url::Url;

/// Public Gutendex endpoint
pub const DEFAULT_BASE_URL: &str = "https://gutendex.com/books/";

/// Default request timeout in seconds
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Longest response body kept in an error for debugging
const MAX_ERROR_BODY_LEN: usize = 800;

/// Configuration for GutendexClient
/// Provides a builder pattern for client customization
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: format!("literalura/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ClientConfig {
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::new()
    }
}

/// Builder for ClientConfig
#[derive(Debug)]
pub struct ClientConfigBuilder {
    config: ClientConfig,
}

impl ClientConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: ClientConfig::default(),
        }
    }

    pub fn base_url<S: Into<String>>(mut self, base_url: S) -> Self {
        self.config.base_url = base_url.into();
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    pub fn user_agent<S: Into<String>>(mut self, user_agent: S) -> Self {
        self.config.user_agent = user_agent.into();
        self
    }

    pub fn build(self) -> ClientConfig {
        self.config
    }
}

impl Default for ClientConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Encode a title for the `search` query parameter
///
/// Only spaces are encoded.
pub fn encode_title(title: &str) -> String {
    title.replace(' ', "%20")
}

/// HTTP client for the Gutendex search endpoint
///
/// # Example
/// ```rust,no_run
/// use literalura::api::{CatalogGateway, GutendexClient};
///
/// # async fn example() -> literalura::error::Result<()> {
/// let client = GutendexClient::new()?;
/// let response = client.fetch_by_title("Pride and Prejudice").await?;
/// println!("{} matches", response.results.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct GutendexClient {
    client: Client,
    base_url: String,
}

impl GutendexClient {
    /// Create a client for the public Gutendex instance
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a client with custom configuration
    ///
    /// # Errors
    /// Returns error if the base URL is not an absolute http(s) URL or the
    /// HTTP client cannot be built
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let parsed = Url::parse(&config.base_url)?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(CatalogError::InvalidConfiguration(format!(
                "Catalog URL must use http or https: {}",
                config.base_url
            )));
        }

        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&config.user_agent).map_err(|e| {
                CatalogError::InvalidConfiguration(format!("Invalid user agent: {}", e))
            })?,
        );
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .timeout(config.timeout)
            .default_headers(headers)
            .build()
            .map_err(|e| {
                CatalogError::InvalidConfiguration(format!("Failed to build HTTP client: {}", e))
            })?;

        Ok(Self {
            client,
            base_url: config.base_url,
        })
    }

    /// Get the API base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full search URL for a title
    pub fn search_url(&self, title: &str) -> String {
        format!("{}?search={}", self.base_url, encode_title(title))
    }

    /// Decode a successful response body
    async fn handle_success_response(&self, response: Response) -> Result<SearchResponse> {
        let status = response.status();
        let body = response.text().await.map_err(|e| {
            CatalogError::gateway_failed(
                format!("Failed to read response body: {}", e),
                Some(status.as_u16()),
            )
        })?;

        parse_search_response(&body)
    }

    /// Turn a non-success response into an error
    async fn handle_error_response(&self, response: Response) -> Result<SearchResponse> {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();

        Err(CatalogError::gateway_failed(
            format!("Catalog returned {}: {}", status, truncate(&body)),
            Some(status.as_u16()),
        ))
    }
}

#[async_trait]
impl CatalogGateway for GutendexClient {
    async fn fetch_by_title(&self, title: &str) -> Result<SearchResponse> {
        let url = self.search_url(title);
        tracing::debug!(%url, "querying catalog");

        let response = self.client.get(&url).send().await.map_err(|e| {
            CatalogError::gateway_failed(format!("Network request failed: {}", e), None)
        })?;

        if response.status().is_success() {
            self.handle_success_response(response).await
        } else {
            self.handle_error_response(response).await
        }
    }
}

/// Decode a search response body
pub fn parse_search_response(body: &str) -> Result<SearchResponse> {
    serde_json::from_str::<SearchResponse>(body).map_err(|e| CatalogError::InvalidApiResponse {
        message: format!("Parse error: {} at line {} col {}", e, e.line(), e.column()),
        response_body: Some(truncate(body)),
    })
}

fn truncate(body: &str) -> String {
    if body.len() <= MAX_ERROR_BODY_LEN {
        return body.to_string();
    }
    let mut end = MAX_ERROR_BODY_LEN;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &body[..end])
}

// ===== TESTS =====

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_title_spaces_only() {
        assert_eq!(encode_title("Pride and Prejudice"), "Pride%20and%20Prejudice");
        assert_eq!(encode_title("Don Quijote & Sancho"), "Don%20Quijote%20&%20Sancho");
        assert_eq!(encode_title("Dracula"), "Dracula");
    }

    #[test]
    fn test_search_url() {
        let client = GutendexClient::new().unwrap();
        assert_eq!(
            client.search_url("War and Peace"),
            "https://gutendex.com/books/?search=War%20and%20Peace"
        );
    }

    #[test]
    fn test_client_config_builder() {
        let config = ClientConfig::builder()
            .base_url("http://localhost:8000/books/")
            .timeout(Duration::from_secs(5))
            .user_agent("TestAgent/1.0")
            .build();

        assert_eq!(config.base_url, "http://localhost:8000/books/");
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.user_agent, "TestAgent/1.0");

        let client = GutendexClient::with_config(config).unwrap();
        assert_eq!(client.base_url(), "http://localhost:8000/books/");
    }

    #[test]
    fn test_rejects_invalid_base_url() {
        let config = ClientConfig::builder().base_url("not a url").build();
        let result = GutendexClient::with_config(config);
        assert!(matches!(result, Err(CatalogError::InvalidConfiguration(_))));

        let config = ClientConfig::builder().base_url("ftp://example.com/books/").build();
        let result = GutendexClient::with_config(config);
        assert!(matches!(result, Err(CatalogError::InvalidConfiguration(_))));
    }

    #[test]
    fn test_parse_search_response_errors_are_gateway_errors() {
        let err = parse_search_response("<html>502 Bad Gateway</html>").unwrap_err();
        assert!(err.is_gateway_error());
        assert!(matches!(err, CatalogError::InvalidApiResponse { .. }));
    }

    #[test]
    fn test_truncate_respects_char_boundaries() {
        let body = "é".repeat(MAX_ERROR_BODY_LEN);
        let truncated = truncate(&body);
        assert!(truncated.ends_with("..."));
        assert!(truncated.len() <= MAX_ERROR_BODY_LEN + 3);
    }

    /// Serve one canned HTTP response on a local port, returning the base URL
    async fn serve_once(status_line: &'static str, body: &'static str) -> String {
        use tokio::io::{AsyncReadExt, AsyncWriteExt};
        use tokio::net::TcpListener;

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();

            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }

            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.unwrap();
        });

        format!("http://{}/books/", addr)
    }

    fn local_client(base_url: String) -> GutendexClient {
        let config = ClientConfig::builder()
            .base_url(base_url)
            .timeout(Duration::from_secs(5))
            .build();
        GutendexClient::with_config(config).unwrap()
    }

    #[tokio::test]
    async fn test_error_status_keeps_status_code() {
        let base_url = serve_once("503 Service Unavailable", r#"{"detail":"down"}"#).await;
        let client = local_client(base_url);

        let err = client.fetch_by_title("Dracula").await.unwrap_err();
        match err {
            CatalogError::GatewayRequestFailed {
                status_code,
                message,
            } => {
                assert_eq!(status_code, Some(503));
                assert!(message.contains("down"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_undecodable_body_is_invalid_response() {
        let base_url = serve_once("200 OK", "<html>maintenance</html>").await;
        let client = local_client(base_url);

        let err = client.fetch_by_title("Dracula").await.unwrap_err();
        match err {
            CatalogError::InvalidApiResponse { response_body, .. } => {
                assert_eq!(response_body.as_deref(), Some("<html>maintenance</html>"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_success_body_is_decoded() {
        let base_url = serve_once(
            "200 OK",
            r#"{"count":1,"results":[{"title":"Dracula","authors":[{"name":"Stoker, Bram","birth_year":1847,"death_year":1912}],"languages":["en"],"download_count":9000}]}"#,
        )
        .await;
        let client = local_client(base_url);

        let response = client.fetch_by_title("Dracula").await.unwrap();
        let candidate = response.candidate().unwrap();
        assert_eq!(candidate.title, "Dracula");
        assert_eq!(candidate.download_count, 9000.0);
    }

    #[tokio::test]
    async fn test_unreachable_host_is_gateway_error() {
        // Port 9 (discard) on localhost is not expected to serve HTTP
        let config = ClientConfig::builder()
            .base_url("http://127.0.0.1:9/books/")
            .timeout(Duration::from_secs(2))
            .build();
        let client = GutendexClient::with_config(config).unwrap();

        let err = client.fetch_by_title("Dracula").await.unwrap_err();
        assert!(err.is_gateway_error());
    }
}
