//! Tests for column sorting.

mod common;

use neo_model::{CellValue, ColumnKey, SortDirection};
use neo_transform::sort_rows;

use common::{names, row};

#[test]
fn string_columns_ignore_case() {
    let rows = vec![
        row("beta", 0, "1", "1", "1", 1.0),
        row("Alpha", 1, "1", "1", "1", 1.0),
        row("gamma", 2, "1", "1", "1", 1.0),
    ];

    let sorted = sort_rows(rows, ColumnKey::Name.spec(), SortDirection::Asc);

    assert_eq!(names(&sorted), vec!["Alpha", "beta", "gamma"]);
}

#[test]
fn float_columns_compare_numerically() {
    let rows = vec![
        row("a", 0, "100.5", "1", "1", 1.0),
        row("b", 1, "9.75", "1", "1", 1.0),
        row("c", 2, "20", "1", "1", 1.0),
    ];

    let asc = sort_rows(rows.clone(), ColumnKey::Velocity.spec(), SortDirection::Asc);
    let desc = sort_rows(rows, ColumnKey::Velocity.spec(), SortDirection::Desc);

    assert_eq!(names(&asc), vec!["b", "c", "a"]);
    assert_eq!(names(&desc), vec!["a", "c", "b"]);
}

#[test]
fn date_column_sorts_by_epoch() {
    let rows = vec![
        row("late", 3_000, "1", "1", "1", 1.0),
        row("early", -5, "1", "1", "1", 1.0),
        row("mid", 200, "1", "1", "1", 1.0),
    ];

    let sorted = sort_rows(rows, ColumnKey::Date.spec(), SortDirection::Asc);

    assert_eq!(names(&sorted), vec!["early", "mid", "late"]);
}

#[test]
fn unsortable_column_leaves_rows_untouched() {
    let rows = vec![
        row("z", 0, "1", "1", "1", 1.0),
        row("a", 1, "1", "1", "1", 1.0),
    ];

    let sorted = sort_rows(rows.clone(), ColumnKey::Url.spec(), SortDirection::Desc);

    assert_eq!(sorted, rows);
}

#[test]
fn ties_keep_input_order_in_both_directions() {
    let rows = vec![
        row("first", 0, "5", "1", "1", 1.0),
        row("other", 1, "1", "1", "1", 1.0),
        row("second", 2, "5", "1", "1", 1.0),
    ];

    let asc = sort_rows(rows.clone(), ColumnKey::Velocity.spec(), SortDirection::Asc);
    let desc = sort_rows(rows, ColumnKey::Velocity.spec(), SortDirection::Desc);

    assert_eq!(names(&asc), vec!["other", "first", "second"]);
    assert_eq!(names(&desc), vec!["first", "second", "other"]);
}

#[test]
fn unusable_values_sort_last_ascending_and_first_descending() {
    let mut missing = row("missing", 0, "1", "1", "1", 1.0);
    missing.miss_distance = CellValue::Missing;
    let rows = vec![
        missing,
        row("far", 1, "1", "900", "1", 1.0),
        row("garbled", 2, "1", "lots", "1", 1.0),
        row("near", 3, "1", "10", "1", 1.0),
    ];

    let asc = sort_rows(rows.clone(), ColumnKey::MissDistance.spec(), SortDirection::Asc);
    let desc = sort_rows(rows, ColumnKey::MissDistance.spec(), SortDirection::Desc);

    assert_eq!(names(&asc), vec!["near", "far", "missing", "garbled"]);
    assert_eq!(names(&desc), vec!["missing", "garbled", "far", "near"]);
}
