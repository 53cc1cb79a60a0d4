use neo_model::{AggregateSet, CellValue, Row};

/// Computes the dashboard summary over `rows`.
///
/// Cells that do not coerce to a number are ignored; a statistic with no
/// usable values is `None`.
pub fn aggregate(rows: &[Row]) -> AggregateSet {
    AggregateSet {
        closest: fold_numbers(rows, |row| &row.closest, f64::min),
        fastest: fold_numbers(rows, |row| &row.velocity, f64::max),
        largest: fold_numbers(rows, |row| &row.largest, f64::max),
    }
}

fn fold_numbers(
    rows: &[Row],
    pick: impl Fn(&Row) -> &CellValue,
    combine: fn(f64, f64) -> f64,
) -> Option<f64> {
    rows.iter()
        .filter_map(|row| pick(row).as_f64())
        .reduce(combine)
}
