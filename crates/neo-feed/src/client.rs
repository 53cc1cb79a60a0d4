//! HTTP feed client.

use std::time::Duration;

use reqwest::StatusCode;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue, USER_AGENT};

use crate::error::{FeedError, Result};
use crate::payload::FeedPayload;
use crate::source::FeedSource;

/// User agent string for feed requests.
const USER_AGENT_VALUE: &str = concat!("deep-impact/", env!("CARGO_PKG_VERSION"));

/// Fetches the feed with one GET against a fixed endpoint.
#[derive(Debug, Clone)]
pub struct HttpFeed {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpFeed {
    /// Creates a client for `endpoint` with no request timeout.
    pub fn new(endpoint: impl Into<String>) -> Result<Self> {
        Self::with_timeout(endpoint, None)
    }

    /// Creates a client for `endpoint`, optionally bounding each request.
    pub fn with_timeout(endpoint: impl Into<String>, timeout: Option<Duration>) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));

        let mut builder = reqwest::Client::builder().default_headers(headers);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| FeedError::ClientBuild(e.to_string()))?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Checks the status and decodes the body.
    async fn handle_response(&self, response: reqwest::Response) -> Result<FeedPayload> {
        let status = response.status();
        if status != StatusCode::OK {
            return Err(FeedError::Status {
                status: status.as_u16(),
            });
        }
        let body = response.text().await?;
        FeedPayload::from_json(&body)
    }
}

impl FeedSource for HttpFeed {
    async fn fetch(&self) -> Result<FeedPayload> {
        tracing::debug!("Fetching feed from {}", self.endpoint);

        let response = self.client.get(&self.endpoint).send().await?;
        self.handle_response(response).await
    }

    fn describe(&self) -> String {
        self.endpoint.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = HttpFeed::new("http://127.0.0.1:8080/api/incoming");
        assert!(client.is_ok());
        assert_eq!(
            client.unwrap().endpoint(),
            "http://127.0.0.1:8080/api/incoming"
        );
    }

    #[test]
    fn test_client_with_timeout() {
        let client = HttpFeed::with_timeout("http://localhost/feed", Some(Duration::from_secs(3)));
        assert!(client.is_ok());
    }
}
