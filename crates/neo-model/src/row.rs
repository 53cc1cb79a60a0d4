use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::cell::CellValue;

/// One close-approach event joined with the fields of the object it belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Row {
    /// Calendar date of the approach as reported by the feed.
    pub date: CellValue,
    /// Approach time in epoch milliseconds.
    #[serde(rename = "dVal")]
    pub epoch_ms: i64,
    pub name: CellValue,
    /// Relative velocity in km/h.
    pub velocity: CellValue,
    /// Miss distance in kilometers.
    pub miss_distance: CellValue,
    pub url: CellValue,
    /// Miss distance in miles.
    pub closest: CellValue,
    /// Maximum estimated diameter in meters.
    pub largest: CellValue,
}

/// The fields of a [`Row`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RowField {
    Date,
    #[serde(rename = "dVal")]
    EpochMs,
    Name,
    Velocity,
    MissDistance,
    Url,
    Closest,
    Largest,
}

impl RowField {
    pub const ALL: [RowField; 8] = [
        RowField::Date,
        RowField::EpochMs,
        RowField::Name,
        RowField::Velocity,
        RowField::MissDistance,
        RowField::Url,
        RowField::Closest,
        RowField::Largest,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RowField::Date => "date",
            RowField::EpochMs => "dVal",
            RowField::Name => "name",
            RowField::Velocity => "velocity",
            RowField::MissDistance => "missDistance",
            RowField::Url => "url",
            RowField::Closest => "closest",
            RowField::Largest => "largest",
        }
    }
}

impl Row {
    /// Returns the value stored in `field`.
    pub fn cell(&self, field: RowField) -> Cow<'_, CellValue> {
        match field {
            RowField::Date => Cow::Borrowed(&self.date),
            RowField::EpochMs => Cow::Owned(CellValue::Integer(self.epoch_ms)),
            RowField::Name => Cow::Borrowed(&self.name),
            RowField::Velocity => Cow::Borrowed(&self.velocity),
            RowField::MissDistance => Cow::Borrowed(&self.miss_distance),
            RowField::Url => Cow::Borrowed(&self.url),
            RowField::Closest => Cow::Borrowed(&self.closest),
            RowField::Largest => Cow::Borrowed(&self.largest),
        }
    }
}
