//! Tests for summary aggregates.

mod common;

use neo_model::{AggregateSet, CellValue};
use neo_transform::aggregate;

use common::row;

#[test]
fn aggregates_min_closest_and_max_velocity_and_size() {
    let rows = vec![
        row("a", 0, "10", "1", "5", 100.0),
        row("b", 1, "20", "1", "2", 50.0),
    ];

    assert_eq!(
        aggregate(&rows),
        AggregateSet {
            closest: Some(2.0),
            fastest: Some(20.0),
            largest: Some(100.0),
        }
    );
}

#[test]
fn string_values_compare_numerically() {
    // "9" > "10" as text, but not as numbers
    let rows = vec![row("a", 0, "9", "1", "10", 1.0), row("b", 1, "10", "1", "9", 1.0)];

    let aggregates = aggregate(&rows);

    assert_eq!(aggregates.fastest, Some(10.0));
    assert_eq!(aggregates.closest, Some(9.0));
}

#[test]
fn empty_input_has_no_aggregates() {
    let aggregates = aggregate(&[]);
    assert!(aggregates.is_empty());
    assert_eq!(aggregates, AggregateSet::default());
}

#[test]
fn unusable_cells_are_ignored() {
    let mut missing = row("a", 0, "n/a", "1", "3", 1.0);
    missing.largest = CellValue::Missing;
    let rows = vec![missing, row("b", 1, "15", "1", "x", 7.0)];

    let aggregates = aggregate(&rows);

    assert_eq!(aggregates.fastest, Some(15.0));
    assert_eq!(aggregates.closest, Some(3.0));
    assert_eq!(aggregates.largest, Some(7.0));
}
