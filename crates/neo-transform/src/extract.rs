//! Dotted-path lookups into loosely-structured feed records.

use serde_json::Value;

use neo_model::CellValue;

use crate::error::{ExtractError, Result};

/// Walks `record` along the `.`-separated `path`.
///
/// Returns `Ok(None)` when a key on the path is absent or the value found is
/// `null`. Fails only when a non-object value sits where the path still needs
/// to descend.
pub fn extract<'a>(record: &'a Value, path: &str) -> Result<Option<&'a Value>> {
    let mut current = record;
    for key in path.split('.') {
        let Value::Object(map) = current else {
            return Err(ExtractError::NotTraversable {
                path: path.to_string(),
                key: key.to_string(),
            });
        };
        match map.get(key) {
            Some(value) => current = value,
            None => return Ok(None),
        }
    }
    Ok((!current.is_null()).then_some(current))
}

/// Like [`extract`], converting the result into a cell.
pub fn extract_cell(record: &Value, path: &str) -> Result<CellValue> {
    Ok(extract(record, path)?.map_or(CellValue::Missing, CellValue::from_json))
}
