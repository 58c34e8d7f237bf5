//! Pluggable HTTP transport.

use async_trait::async_trait;
use reqwest::Client;
use std::fmt::Debug;
use std::time::Duration;

use crate::error::TransportError;
use crate::request::{ApiRequest, Method};

/// Raw response returned by a transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response body as text.
    pub body: String,
}

impl ApiResponse {
    /// Whether the status is in the 2xx range.
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Performs one request/response round trip.
///
/// The live implementation is [`HttpTransport`]; tests substitute
/// [`FixtureTransport`](crate::FixtureTransport).
#[async_trait]
pub trait Transport: Send + Sync + Debug {
    /// Send the request and return the raw response.
    ///
    /// # Errors
    ///
    /// Returns an error if no response could be obtained. Non-success
    /// statuses are not errors at this layer.
    async fn send(&self, request: &ApiRequest) -> Result<ApiResponse, TransportError>;
}

/// Transport that talks to a real server over HTTP.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    base_url: String,
}

impl HttpTransport {
    /// Stripe API base URL.
    pub const DEFAULT_BASE_URL: &'static str = "https://api.stripe.com";

    /// Default request timeout.
    pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

    /// Create a transport for the public Stripe API.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new() -> Result<Self, TransportError> {
        Self::with_base_url(Self::DEFAULT_BASE_URL, Self::DEFAULT_TIMEOUT_SECONDS)
    }

    /// Create a transport for another base URL, e.g. a mock server.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn with_base_url(
        base_url: impl Into<String>,
        timeout_seconds: u64,
    ) -> Result<Self, TransportError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_seconds))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// The base URL requests are sent to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: &ApiRequest) -> Result<ApiResponse, TransportError> {
        let url = format!("{}{}", self.base_url, request.path);

        let mut builder = match request.method {
            Method::Get => self.client.get(&url),
            Method::Post => self.client.post(&url),
            Method::Delete => self.client.delete(&url),
        };

        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        if !request.params.is_empty() {
            builder = match request.method {
                Method::Post => builder.form(&request.params),
                Method::Get | Method::Delete => builder.query(&request.params),
            };
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        tracing::debug!(
            method = %request.method,
            path = %request.path,
            status,
            "Stripe round trip"
        );

        Ok(ApiResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_trims_trailing_slash() {
        let transport = HttpTransport::with_base_url("http://localhost:12111/", 5).unwrap();
        assert_eq!(transport.base_url(), "http://localhost:12111");
    }

    #[test]
    fn default_transport_targets_stripe() {
        let transport = HttpTransport::new().unwrap();
        assert_eq!(transport.base_url(), "https://api.stripe.com");
    }

    #[test]
    fn success_range() {
        let ok = ApiResponse {
            status: 201,
            body: String::new(),
        };
        let not_found = ApiResponse {
            status: 404,
            body: String::new(),
        };
        assert!(ok.is_success());
        assert!(!not_found.is_success());
    }
}
