//! Static table column definitions.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};
use crate::row::RowField;

/// Key of a displayed column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ColumnKey {
    #[default]
    Date,
    Name,
    Velocity,
    MissDistance,
    Url,
}

/// How values of a column compare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    /// Case-insensitive text.
    String,
    /// Whole numbers.
    Int,
    /// Floating-point numbers.
    Float,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ColumnSpec {
    pub key: ColumnKey,
    pub label: &'static str,
    pub sortable: bool,
    pub field: RowField,
    #[serde(rename = "type")]
    pub kind: ColumnType,
}

/// Columns in display order.
pub static COLUMNS: [ColumnSpec; 5] = [
    ColumnSpec {
        key: ColumnKey::Date,
        label: "Date",
        sortable: true,
        field: RowField::EpochMs,
        kind: ColumnType::Int,
    },
    ColumnSpec {
        key: ColumnKey::Name,
        label: "Name",
        sortable: true,
        field: RowField::Name,
        kind: ColumnType::String,
    },
    ColumnSpec {
        key: ColumnKey::Velocity,
        label: "Velocity",
        sortable: true,
        field: RowField::Velocity,
        kind: ColumnType::Float,
    },
    ColumnSpec {
        key: ColumnKey::MissDistance,
        label: "Miss Distance",
        sortable: true,
        field: RowField::MissDistance,
        kind: ColumnType::Float,
    },
    ColumnSpec {
        key: ColumnKey::Url,
        label: "URL",
        sortable: false,
        field: RowField::Url,
        kind: ColumnType::String,
    },
];

impl ColumnKey {
    pub const ALL: [ColumnKey; 5] = [
        ColumnKey::Date,
        ColumnKey::Name,
        ColumnKey::Velocity,
        ColumnKey::MissDistance,
        ColumnKey::Url,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnKey::Date => "date",
            ColumnKey::Name => "name",
            ColumnKey::Velocity => "velocity",
            ColumnKey::MissDistance => "missDistance",
            ColumnKey::Url => "url",
        }
    }

    /// Row field shown in this column's cells.
    ///
    /// Differs from [`ColumnSpec::field`] for `date`, which sorts on the epoch
    /// timestamp but shows the calendar date.
    pub fn display_field(&self) -> RowField {
        match self {
            ColumnKey::Date => RowField::Date,
            ColumnKey::Name => RowField::Name,
            ColumnKey::Velocity => RowField::Velocity,
            ColumnKey::MissDistance => RowField::MissDistance,
            ColumnKey::Url => RowField::Url,
        }
    }

    /// Returns the static definition of this column.
    pub fn spec(&self) -> &'static ColumnSpec {
        match self {
            ColumnKey::Date => &COLUMNS[0],
            ColumnKey::Name => &COLUMNS[1],
            ColumnKey::Velocity => &COLUMNS[2],
            ColumnKey::MissDistance => &COLUMNS[3],
            ColumnKey::Url => &COLUMNS[4],
        }
    }
}

impl fmt::Display for ColumnKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColumnKey {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|key| key.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ModelError::UnknownColumn(s.to_string()))
    }
}
