pub mod cell;
pub mod column;
pub mod error;
pub mod row;
pub mod view;

pub use cell::CellValue;
pub use column::{COLUMNS, ColumnKey, ColumnSpec, ColumnType};
pub use error::{ModelError, Result};
pub use row::{Row, RowField};
pub use view::{AggregateSet, DASHBOARD_TITLE, DAY_MS, SortDirection, parse_range_days};

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn cell_from_json_keeps_missing_distinct() {
        assert_eq!(CellValue::from_json(&json!(null)), CellValue::Missing);
        assert_eq!(
            CellValue::from_json(&json!(false)),
            CellValue::Text("false".to_string())
        );
        assert_eq!(CellValue::from_json(&json!(0)), CellValue::Integer(0));
        assert_eq!(CellValue::from_json(&json!(1.5)), CellValue::Float(1.5));
        assert_eq!(CellValue::from_json(&json!("")), CellValue::Text(String::new()));
    }

    #[test]
    fn cell_numeric_coercion() {
        assert_eq!(CellValue::text(" 48213.44 ").as_f64(), Some(48213.44));
        assert_eq!(CellValue::text("12").as_i64(), Some(12));
        assert_eq!(CellValue::text("12.9").as_i64(), Some(12));
        assert_eq!(CellValue::Float(-3.7).as_i64(), Some(-3));
        assert_eq!(CellValue::text("fast").as_f64(), None);
        assert_eq!(CellValue::text("NaN").as_f64(), None);
        assert_eq!(CellValue::Missing.as_i64(), None);
    }

    #[test]
    fn cell_text_rendering() {
        assert_eq!(CellValue::Integer(7).as_text(), "7");
        assert_eq!(CellValue::Float(100.0).to_string(), "100");
        assert_eq!(CellValue::Missing.as_text(), "");
    }

    #[test]
    fn every_column_resolves_to_its_spec() {
        for key in ColumnKey::ALL {
            assert_eq!(key.spec().key, key);
            assert!(RowField::ALL.contains(&key.spec().field));
        }
        assert_eq!(COLUMNS.len(), ColumnKey::ALL.len());
    }

    #[test]
    fn only_url_is_unsortable() {
        let unsortable: Vec<_> = COLUMNS.iter().filter(|c| !c.sortable).map(|c| c.key).collect();
        assert_eq!(unsortable, vec![ColumnKey::Url]);
        assert_eq!(ColumnKey::Date.spec().field, RowField::EpochMs);
        assert_eq!(ColumnKey::Date.spec().kind, ColumnType::Int);
    }

    #[test]
    fn date_column_displays_the_calendar_date() {
        assert_eq!(ColumnKey::Date.display_field(), RowField::Date);
        assert_eq!(ColumnKey::Velocity.display_field(), ColumnKey::Velocity.spec().field);
    }

    #[test]
    fn column_key_parses_camel_case_keys() {
        assert_eq!("missDistance".parse::<ColumnKey>(), Ok(ColumnKey::MissDistance));
        assert_eq!("DATE".parse::<ColumnKey>(), Ok(ColumnKey::Date));
        assert!(matches!(
            "diameter".parse::<ColumnKey>(),
            Err(ModelError::UnknownColumn(_))
        ));
    }

    #[test]
    fn sort_direction_toggles_and_parses() {
        assert_eq!(SortDirection::default(), SortDirection::Asc);
        assert_eq!(SortDirection::Asc.toggled(), SortDirection::Desc);
        assert_eq!(SortDirection::Desc.toggled(), SortDirection::Asc);
        assert_eq!("Desc".parse::<SortDirection>(), Ok(SortDirection::Desc));
        assert!("up".parse::<SortDirection>().is_err());
    }

    #[test]
    fn range_days_parsing() {
        assert_eq!(parse_range_days("3"), Ok(3));
        assert_eq!(parse_range_days(" 7 "), Ok(7));
        assert_eq!(parse_range_days("2.0"), Ok(2));
        assert_eq!(parse_range_days("2.5"), Ok(2));
        assert_eq!(parse_range_days("0.9"), Ok(0));
        assert!(parse_range_days("1e12").is_err());
        assert!(parse_range_days("-1").is_err());
        assert!(parse_range_days("week").is_err());
    }

    #[test]
    fn row_serializes_with_feed_field_names() {
        let row = Row {
            date: "2020-01-01".into(),
            epoch_ms: 0,
            name: "X".into(),
            velocity: "10".into(),
            miss_distance: "1000".into(),
            url: "U".into(),
            closest: "5".into(),
            largest: CellValue::Float(100.5),
        };
        let json = serde_json::to_value(&row).expect("serialize row");
        assert_eq!(json["dVal"], 0);
        assert_eq!(json["missDistance"], "1000");
        assert_eq!(json["largest"], 100.5);
        assert_eq!(row.cell(RowField::EpochMs).as_i64(), Some(0));
    }

    #[test]
    fn missing_cell_serializes_as_null() {
        let json = serde_json::to_value(CellValue::Missing).expect("serialize cell");
        assert!(json.is_null());
    }
}
