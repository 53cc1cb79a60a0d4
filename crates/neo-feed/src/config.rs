//! Feed source configuration.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::client::HttpFeed;
use crate::error::Result;
use crate::file::FileFeed;
use crate::source::AnyFeed;

/// Endpoint used when none is configured.
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:8080/api/incoming";

/// Where the dashboard reads its data from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedConfig {
    /// URL answering the single GET.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Request timeout. `None` waits indefinitely.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,

    /// Read the feed body from this file instead of the network.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input: Option<PathBuf>,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout_secs: None,
            input: None,
        }
    }
}

impl FeedConfig {
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    #[must_use]
    pub fn with_timeout_secs(mut self, timeout_secs: Option<u64>) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    #[must_use]
    pub fn with_input(mut self, input: Option<PathBuf>) -> Self {
        self.input = input;
        self
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    /// Builds the configured source: the input file when set, else the endpoint.
    pub fn source(&self) -> Result<AnyFeed> {
        match &self.input {
            Some(path) => Ok(AnyFeed::File(FileFeed::new(path.clone()))),
            None => Ok(AnyFeed::Http(HttpFeed::with_timeout(
                self.endpoint.clone(),
                self.timeout(),
            )?)),
        }
    }
}
