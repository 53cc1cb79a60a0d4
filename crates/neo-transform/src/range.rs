//! Day-range windows measured from the earliest approach.

use neo_model::{DAY_MS, Row};

/// Earliest and latest epoch timestamps of a row set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateSpan {
    pub min: i64,
    pub max: i64,
}

impl DateSpan {
    /// Returns `None` for an empty row set.
    pub fn of(rows: &[Row]) -> Option<Self> {
        let first = rows.first()?.epoch_ms;
        let (min, max) = rows
            .iter()
            .fold((first, first), |(min, max), row| {
                (min.min(row.epoch_ms), max.max(row.epoch_ms))
            });
        Some(Self { min, max })
    }

    /// Number of selectable days: whole days covering the span, plus one.
    pub fn day_count(&self) -> u32 {
        let width = self.max.saturating_sub(self.min);
        let days = width.div_euclid(DAY_MS) + i64::from(width.rem_euclid(DAY_MS) != 0);
        u32::try_from(days.saturating_add(1)).unwrap_or(u32::MAX)
    }
}

/// Exclusive upper bound of a window of `range_days` starting at `min_date`.
pub fn window_end(min_date: i64, range_days: u32) -> i64 {
    min_date.saturating_add(i64::from(range_days).saturating_mul(DAY_MS))
}

/// Keeps rows strictly before the end of the window.
///
/// A row sitting exactly on the boundary is outside the window, and a window
/// of zero days is empty.
pub fn filter_by_range(rows: &[Row], min_date: i64, range_days: u32) -> Vec<Row> {
    let end = window_end(min_date, range_days);
    rows.iter().filter(|row| row.epoch_ms < end).cloned().collect()
}

/// Range selector options `1..=count`.
pub fn range_options(count: u32) -> Vec<u32> {
    (1..=count).collect()
}
