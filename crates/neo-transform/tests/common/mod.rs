#![allow(dead_code)]

use neo_model::{CellValue, Row};

pub fn row(name: &str, epoch_ms: i64, velocity: &str, miss_km: &str, closest: &str, largest: f64) -> Row {
    Row {
        date: CellValue::text(format!("day-{}", epoch_ms / 86_400_000)),
        epoch_ms,
        name: name.into(),
        velocity: velocity.into(),
        miss_distance: miss_km.into(),
        url: CellValue::text(format!("https://ssd.jpl.nasa.gov/?sstr={name}")),
        closest: closest.into(),
        largest: CellValue::Float(largest),
    }
}

pub fn names(rows: &[Row]) -> Vec<String> {
    rows.iter().map(|row| row.name.to_string()).collect()
}
