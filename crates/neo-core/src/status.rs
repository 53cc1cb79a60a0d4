use std::fmt;

use neo_feed::FeedError;

/// Progress of the one-time data load.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadStatus {
    /// Nothing requested yet.
    #[default]
    Empty,
    /// A fetch is in flight.
    Loading,
    /// Data arrived and the derived state is ready.
    Populated,
    /// The last fetch failed. A new `populate` call may try again.
    Failed(FeedError),
}

impl LoadStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::Loading => "loading",
            Self::Populated => "populated",
            Self::Failed(_) => "failed",
        }
    }

    pub fn is_populated(&self) -> bool {
        matches!(self, Self::Populated)
    }

    /// Whether a new load may start from this status.
    pub fn accepts_load(&self) -> bool {
        matches!(self, Self::Empty | Self::Failed(_))
    }

    pub fn error(&self) -> Option<&FeedError> {
        match self {
            Self::Failed(error) => Some(error),
            _ => None,
        }
    }
}

impl fmt::Display for LoadStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Failed(error) => write!(f, "failed: {error}"),
            other => f.write_str(other.label()),
        }
    }
}
