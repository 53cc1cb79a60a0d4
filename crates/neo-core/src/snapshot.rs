use serde::Serialize;

use neo_model::{AggregateSet, ColumnKey, ColumnSpec, Row, SortDirection};

use crate::status::LoadStatus;

/// Everything the presentation layer reads, borrowed from the view state.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewSnapshot<'a> {
    pub title: &'static str,
    #[serde(skip)]
    pub status: &'a LoadStatus,
    pub columns: &'static [ColumnSpec],
    pub rows: &'a [Row],
    pub aggregates: &'a AggregateSet,
    /// Selected range window in days.
    pub range: u32,
    pub range_options: &'a [u32],
    /// Earliest approach, epoch milliseconds.
    pub min_date: i64,
    pub sort_key: ColumnKey,
    pub sort_direction: SortDirection,
}
