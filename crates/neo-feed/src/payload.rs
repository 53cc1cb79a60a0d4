use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Result;

/// Body of the feed response.
///
/// Objects stay as raw JSON; the flattening step reads them by path so that
/// partially-populated records still produce rows.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeedPayload {
    /// Objects grouped by approach date (`YYYY-MM-DD`).
    pub near_earth_objects: BTreeMap<String, Vec<Value>>,
}

impl FeedPayload {
    /// Decodes a response body. Unknown top-level keys are ignored.
    pub fn from_json(body: &str) -> Result<Self> {
        Ok(serde_json::from_str(body)?)
    }

    /// Total number of objects across all date buckets.
    pub fn object_count(&self) -> usize {
        self.near_earth_objects.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.object_count() == 0
    }
}
