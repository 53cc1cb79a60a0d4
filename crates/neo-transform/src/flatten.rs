//! Nested feed structure to flat rows.
//!
//! The feed groups objects by date, and each object lists one or more close
//! approaches. Every approach becomes one [`Row`].

use std::ops::RangeInclusive;

use chrono::{DateTime, Datelike};
use serde_json::Value;
use tracing::{debug, warn};

use neo_model::{CellValue, Row};

use crate::error::Result;
use crate::extract::{extract, extract_cell};

pub const NAME_PATH: &str = "name";
pub const URL_PATH: &str = "nasa_jpl_url";
pub const LARGEST_PATH: &str = "estimated_diameter.meters.estimated_diameter_max";
pub const APPROACHES_PATH: &str = "close_approach_data";
pub const DATE_PATH: &str = "close_approach_date";
pub const EPOCH_PATH: &str = "epoch_date_close_approach";
pub const VELOCITY_PATH: &str = "relative_velocity.kilometers_per_hour";
pub const MISS_KM_PATH: &str = "miss_distance.kilometers";
pub const MISS_MILES_PATH: &str = "miss_distance.miles";

/// Earliest and latest calendar years a close approach may fall in.
///
/// The feed covers 1900 through 2200. Approaches dated outside it are
/// treated as corrupt and skipped.
pub const EPOCH_YEARS: RangeInclusive<i32> = 1900..=2200;

/// Rows produced by [`flatten`] plus a count of records that were dropped.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Flattened {
    pub rows: Vec<Row>,
    /// Objects or approaches that could not be turned into rows.
    pub skipped: usize,
}

/// Object-level fields repeated on each of its rows.
struct ObjectFields {
    name: CellValue,
    url: CellValue,
    largest: CellValue,
}

/// Flattens date buckets of near-Earth objects into rows.
///
/// Rows are emitted in bucket order, then object order, then approach order.
/// Approaches without a usable epoch timestamp are skipped, since they cannot
/// be placed in a range window. An epoch is usable when it is a whole number
/// of milliseconds falling within [`EPOCH_YEARS`]. Other absent fields become
/// [`CellValue::Missing`].
pub fn flatten<I, K, V>(buckets: I) -> Flattened
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<[Value]>,
{
    let mut out = Flattened::default();
    for (date_key, objects) in buckets {
        let date_key = date_key.as_ref();
        for object in objects.as_ref() {
            flatten_object(date_key, object, &mut out);
        }
    }
    debug!(rows = out.rows.len(), skipped = out.skipped, "flattened feed");
    out
}

fn flatten_object(date_key: &str, object: &Value, out: &mut Flattened) {
    let fields = match object_fields(object) {
        Ok(fields) => fields,
        Err(error) => {
            warn!(date = %date_key, %error, "skipping malformed object");
            out.skipped += 1;
            return;
        }
    };
    let approaches = match extract(object, APPROACHES_PATH) {
        Ok(Some(Value::Array(approaches))) => approaches,
        Ok(None) => {
            debug!(date = %date_key, name = %fields.name, "object has no close approaches");
            return;
        }
        Ok(Some(_)) => {
            warn!(date = %date_key, name = %fields.name, "close_approach_data is not a list");
            out.skipped += 1;
            return;
        }
        Err(error) => {
            warn!(date = %date_key, %error, "skipping malformed object");
            out.skipped += 1;
            return;
        }
    };
    for approach in approaches {
        match approach_row(&fields, approach) {
            Ok(Some(row)) => out.rows.push(row),
            Ok(None) => {
                warn!(
                    date = %date_key,
                    name = %fields.name,
                    "skipping close approach without usable epoch timestamp"
                );
                out.skipped += 1;
            }
            Err(error) => {
                warn!(date = %date_key, name = %fields.name, %error, "skipping malformed close approach");
                out.skipped += 1;
            }
        }
    }
}

fn object_fields(object: &Value) -> Result<ObjectFields> {
    Ok(ObjectFields {
        name: extract_cell(object, NAME_PATH)?,
        url: extract_cell(object, URL_PATH)?,
        largest: extract_cell(object, LARGEST_PATH)?,
    })
}

fn approach_row(fields: &ObjectFields, approach: &Value) -> Result<Option<Row>> {
    let Some(epoch_ms) = extract_cell(approach, EPOCH_PATH)?.as_i64() else {
        return Ok(None);
    };
    if !is_usable_epoch(epoch_ms) {
        debug!(epoch_ms, "close approach epoch outside supported years");
        return Ok(None);
    }
    Ok(Some(Row {
        date: extract_cell(approach, DATE_PATH)?,
        epoch_ms,
        name: fields.name.clone(),
        velocity: extract_cell(approach, VELOCITY_PATH)?,
        miss_distance: extract_cell(approach, MISS_KM_PATH)?,
        url: fields.url.clone(),
        closest: extract_cell(approach, MISS_MILES_PATH)?,
        largest: fields.largest.clone(),
    }))
}

/// Whether `epoch_ms` is a representable date within [`EPOCH_YEARS`].
pub fn is_usable_epoch(epoch_ms: i64) -> bool {
    DateTime::from_timestamp_millis(epoch_ms).is_some_and(|date| EPOCH_YEARS.contains(&date.year()))
}
