use std::path::PathBuf;

use crate::error::Result;
use crate::payload::FeedPayload;
use crate::source::FeedSource;

/// Reads a saved feed response from disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileFeed {
    path: PathBuf,
}

impl FileFeed {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl FeedSource for FileFeed {
    async fn fetch(&self) -> Result<FeedPayload> {
        tracing::debug!("Reading feed from {}", self.path.display());
        let body = std::fs::read_to_string(&self.path)?;
        FeedPayload::from_json(&body)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
