use crate::client::HttpFeed;
use crate::error::Result;
use crate::file::FileFeed;
use crate::payload::FeedPayload;

/// Something that can produce the feed body once.
pub trait FeedSource {
    /// Fetches and decodes the feed.
    fn fetch(&self) -> impl Future<Output = Result<FeedPayload>>;

    /// Human-readable origin, for logs.
    fn describe(&self) -> String;
}

/// Source selected at runtime from configuration.
#[derive(Debug, Clone)]
pub enum AnyFeed {
    Http(HttpFeed),
    File(FileFeed),
}

impl FeedSource for AnyFeed {
    async fn fetch(&self) -> Result<FeedPayload> {
        match self {
            Self::Http(feed) => feed.fetch().await,
            Self::File(feed) => feed.fetch().await,
        }
    }

    fn describe(&self) -> String {
        match self {
            Self::Http(feed) => feed.describe(),
            Self::File(feed) => feed.describe(),
        }
    }
}
