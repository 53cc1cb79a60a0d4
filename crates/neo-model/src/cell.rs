//! Loosely-typed cell values.
//!
//! Feed records carry numbers both as JSON numbers and as numeric strings
//! (`"relative_velocity": {"kilometers_per_hour": "48213.44"}`), so cells keep
//! whatever arrived and coerce on demand.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single cell of a flattened row.
///
/// `Missing` marks a value the feed did not provide. It is distinct from any
/// present value, including `false`, `0` and the empty string.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Integer(i64),
    Float(f64),
    Text(String),
    #[default]
    Missing,
}

impl CellValue {
    /// Converts a JSON value into a cell.
    ///
    /// `null` becomes [`CellValue::Missing`]. Booleans, arrays and objects are
    /// kept as their JSON text.
    pub fn from_json(value: &Value) -> Self {
        match value {
            Value::Null => Self::Missing,
            Value::Number(number) => match number.as_i64() {
                Some(int) => Self::Integer(int),
                None => number.as_f64().map_or(Self::Missing, Self::Float),
            },
            Value::String(text) => Self::Text(text.clone()),
            other => Self::Text(other.to_string()),
        }
    }

    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }

    /// Numeric coercion. Only finite values are returned.
    pub fn as_f64(&self) -> Option<f64> {
        let value = match self {
            Self::Integer(int) => *int as f64,
            Self::Float(float) => *float,
            Self::Text(text) => text.trim().parse::<f64>().ok()?,
            Self::Missing => return None,
        };
        value.is_finite().then_some(value)
    }

    /// Integer coercion; fractional values are truncated toward zero.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Integer(int) => Some(*int),
            Self::Text(text) => {
                let trimmed = text.trim();
                trimmed
                    .parse::<i64>()
                    .ok()
                    .or_else(|| Self::truncate(trimmed.parse::<f64>().ok()?))
            }
            Self::Float(float) => Self::truncate(*float),
            Self::Missing => None,
        }
    }

    /// Display text. Missing cells render as an empty string.
    pub fn as_text(&self) -> Cow<'_, str> {
        match self {
            Self::Text(text) => Cow::Borrowed(text.as_str()),
            Self::Integer(int) => Cow::Owned(int.to_string()),
            Self::Float(float) => Cow::Owned(float.to_string()),
            Self::Missing => Cow::Borrowed(""),
        }
    }

    fn truncate(value: f64) -> Option<i64> {
        // i64::MAX as f64 rounds up to 2^63, so the upper bound is exclusive
        (value.is_finite() && value >= i64::MIN as f64 && value < i64::MAX as f64)
            .then(|| value.trunc() as i64)
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_text())
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}
