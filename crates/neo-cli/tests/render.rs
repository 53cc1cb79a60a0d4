//! Rendering tests for the dashboard output.

use insta::assert_snapshot;
use serde_json::json;

use neo_cli::render::{
    columns_table, format_epoch_date, format_number, range_line, render_json, rows_table,
    summary_lines,
};
use neo_core::ViewState;
use neo_feed::FeedPayload;
use neo_model::{AggregateSet, ColumnKey, DAY_MS, SortDirection};

fn loaded_view() -> ViewState {
    let payload: FeedPayload = serde_json::from_value(json!({
        "near_earth_objects": {
            "2020-01-01": [{
                "name": "X",
                "nasa_jpl_url": "U",
                "estimated_diameter": {"meters": {"estimated_diameter_max": 100}},
                "close_approach_data": [
                    {
                        "close_approach_date": "2020-01-01",
                        "epoch_date_close_approach": 0,
                        "relative_velocity": {"kilometers_per_hour": "10"},
                        "miss_distance": {"kilometers": "1000", "miles": "5"}
                    },
                    {
                        "close_approach_date": "2020-01-02",
                        "epoch_date_close_approach": DAY_MS,
                        "relative_velocity": {"kilometers_per_hour": "20"},
                        "miss_distance": {"kilometers": "2000", "miles": "2"}
                    }
                ]
            }]
        }
    }))
    .expect("valid payload");
    let mut view = ViewState::new();
    assert!(view.load_payload(&payload));
    view
}

#[test]
fn summary_lines_list_each_aggregate() {
    let view = loaded_view();
    let lines = summary_lines(view.aggregates()).join("\n");
    assert_snapshot!(lines, @r"
    closest: 2
    fastest: 20
    largest: 100
    ");
}

#[test]
fn summary_lines_show_dash_without_values() {
    let lines = summary_lines(&AggregateSet::default());
    assert_eq!(lines, vec!["closest: -", "fastest: -", "largest: -"]);
}

#[test]
fn numbers_and_dates_format() {
    assert_eq!(format_number(None), "-");
    assert_eq!(format_number(Some(48213.5)), "48213.5");
    assert_eq!(format_epoch_date(0), "1970-01-01");
    assert_eq!(format_epoch_date(DAY_MS), "1970-01-02");
    assert_eq!(format_epoch_date(1_577_836_800_000), "2020-01-01");
}

#[test]
fn range_line_describes_window() {
    let mut view = loaded_view();
    assert_eq!(range_line(&view.snapshot()), "Range: 2 of 2 days from 1970-01-01");

    view.filter(1);
    assert_eq!(range_line(&view.snapshot()), "Range: 1 of 2 days from 1970-01-01");
}

#[test]
fn rows_table_marks_sort_column() {
    let mut view = loaded_view();
    let rendered = rows_table(&view.snapshot()).to_string();
    assert!(rendered.contains("Date ▲"));
    assert!(rendered.contains("2020-01-01"));
    assert!(rendered.contains("2020-01-02"));
    assert!(rendered.contains("Miss Distance"));

    view.sort(ColumnKey::Velocity, Some(SortDirection::Desc));
    let rendered = rows_table(&view.snapshot()).to_string();
    assert!(rendered.contains("Velocity ▼"));
    assert!(!rendered.contains("Date ▲"));
}

#[test]
fn rows_table_follows_filter() {
    let mut view = loaded_view();
    view.filter(1);
    let rendered = rows_table(&view.snapshot()).to_string();
    assert!(rendered.contains("2020-01-01"));
    assert!(!rendered.contains("2020-01-02"));
}

#[test]
fn columns_table_lists_every_column() {
    let rendered = columns_table().to_string();
    for key in ["date", "name", "velocity", "missDistance", "url"] {
        assert!(rendered.contains(key), "missing {key}");
    }
}

#[test]
fn json_output_carries_view() {
    let view = loaded_view();
    let rendered = render_json(&view.snapshot()).expect("serialize view");
    let value: serde_json::Value = serde_json::from_str(&rendered).expect("valid json");

    assert_eq!(value["title"], "Deep Impact?");
    assert_eq!(value["rows"].as_array().map(Vec::len), Some(2));
    assert_eq!(value["rows"][0]["name"], "X");
    assert_eq!(value["aggregates"]["fastest"], 20.0);
    assert_eq!(value["sortKey"], "date");
}
