//! Error types for fetching the feed.

use thiserror::Error;

/// Errors that can occur while fetching or decoding the feed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum FeedError {
    /// The endpoint answered with something other than HTTP 200.
    #[error("feed request failed with HTTP status {status}")]
    Status {
        /// Status code of the response.
        status: u16,
    },

    /// The request could not be completed.
    #[error("network error: {0}")]
    Transport(String),

    /// The body was not the expected JSON document.
    #[error("malformed feed body: {0}")]
    Decode(String),

    /// Reading a local feed file failed.
    #[error("I/O error: {0}")]
    Io(String),

    /// The HTTP client could not be constructed.
    #[error("failed to create HTTP client: {0}")]
    ClientBuild(String),
}

impl FeedError {
    /// Returns a short message suitable for a status line.
    #[must_use]
    pub fn user_message(&self) -> &str {
        match self {
            Self::Status { .. } => "The feed server rejected the request.",
            Self::Transport(_) => "Could not reach the feed server.",
            Self::Decode(_) => "The feed returned data in an unexpected shape.",
            Self::Io(_) => "Could not read the feed file.",
            Self::ClientBuild(_) => "Could not set up the network client.",
        }
    }

    /// True for failures of the transfer itself rather than of the response status.
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_) | Self::Decode(_) | Self::Io(_))
    }
}

impl From<reqwest::Error> for FeedError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.to_string())
    }
}

impl From<std::io::Error> for FeedError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for FeedError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

/// Result type alias for feed operations.
pub type Result<T> = std::result::Result<T, FeedError>;
