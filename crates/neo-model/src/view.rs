//! Types shared between the derivation steps and the view state.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// Length of one range-window day in milliseconds.
pub const DAY_MS: i64 = 1000 * 3600 * 24;

/// Heading shown above the dashboard.
pub const DASHBOARD_TITLE: &str = "Deep Impact?";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortDirection {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            _ => Err(ModelError::InvalidDirection(s.to_string())),
        }
    }
}

/// Summary statistics over the filtered rows.
///
/// `None` means no row carried a usable number for that statistic.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AggregateSet {
    /// Smallest miss distance in miles.
    pub closest: Option<f64>,
    /// Highest relative velocity.
    pub fastest: Option<f64>,
    /// Largest maximum estimated diameter.
    pub largest: Option<f64>,
}

impl AggregateSet {
    /// Labelled values in display order.
    pub fn entries(&self) -> [(&'static str, Option<f64>); 3] {
        [
            ("closest", self.closest),
            ("fastest", self.fastest),
            ("largest", self.largest),
        ]
    }

    pub fn is_empty(&self) -> bool {
        self.closest.is_none() && self.fastest.is_none() && self.largest.is_none()
    }
}

/// Parses a range selection coming from the presentation layer.
///
/// Accepts whole numbers (`"3"`) and decimals, which are truncated to whole
/// days (`"1.5"` is one day). Surrounding whitespace is ignored. Negative,
/// non-numeric and out-of-range values are rejected.
pub fn parse_range_days(input: &str) -> Result<u32> {
    let trimmed = input.trim();
    if let Ok(days) = trimmed.parse::<u32>() {
        return Ok(days);
    }
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 && value < f64::from(u32::MAX) + 1.0 => {
            u32::try_from(value.trunc() as u64)
                .map_err(|_| ModelError::InvalidRange(input.to_string()))
        }
        _ => Err(ModelError::InvalidRange(input.to_string())),
    }
}
