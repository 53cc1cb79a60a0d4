//! Column sorting with per-type comparison.

use std::cmp::Ordering;

use neo_model::{CellValue, ColumnSpec, ColumnType, Row, SortDirection};

/// Sorts `rows` by the column described by `spec`.
///
/// Unsortable columns return the rows untouched. The sort is stable, and
/// `Desc` reverses the comparator rather than the sorted output, so equal
/// keys keep their input order in both directions.
pub fn sort_rows(mut rows: Vec<Row>, spec: &ColumnSpec, direction: SortDirection) -> Vec<Row> {
    if !spec.sortable {
        return rows;
    }
    rows.sort_by(|a, b| compare_rows(a, b, spec, direction));
    rows
}

/// Compares two rows on one column.
pub fn compare_rows(a: &Row, b: &Row, spec: &ColumnSpec, direction: SortDirection) -> Ordering {
    let ordering = compare_cells(spec.kind, &a.cell(spec.field), &b.cell(spec.field));
    match direction {
        SortDirection::Asc => ordering,
        SortDirection::Desc => ordering.reverse(),
    }
}

/// Ascending comparison for a column type.
///
/// Values that are missing or fail to coerce order after every usable value.
pub fn compare_cells(kind: ColumnType, a: &CellValue, b: &CellValue) -> Ordering {
    match kind {
        ColumnType::String => compare_text(a, b),
        ColumnType::Int => present_first(a.as_i64(), b.as_i64(), |x, y| x.cmp(&y)),
        ColumnType::Float => present_first(a.as_f64(), b.as_f64(), |x, y| x.total_cmp(&y)),
    }
}

fn compare_text(a: &CellValue, b: &CellValue) -> Ordering {
    let upper = |cell: &CellValue| (!cell.is_missing()).then(|| cell.as_text().to_uppercase());
    present_first(upper(a), upper(b), |x, y| x.cmp(&y))
}

fn present_first<T>(a: Option<T>, b: Option<T>, cmp: impl FnOnce(T, T) -> Ordering) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => cmp(x, y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
