//! JSON boundary for rebuild input.
//!
//! The typed [`Carousel::rebuild`](crate::Carousel::rebuild) API cannot
//! receive a malformed shape, but hosts feeding JSON (wasm, config files)
//! can. This module validates "rows of items" before any engine state is
//! touched, so a bad payload leaves the carousel as it was.

use serde_json::Value as JsonValue;
use thiserror::Error;

/// Errors produced while validating rebuild JSON.
#[derive(Debug, Error)]
pub enum RowsError {
    #[error("rows parse error: {0}")]
    Parse(String),
    #[error("rebuild expects a 2D array (rows of items)")]
    Shape,
}

/// Parse a JSON string into rows of opaque item payloads.
pub fn parse_rows_json(s: &str) -> Result<Vec<Vec<JsonValue>>, RowsError> {
    let value: JsonValue = serde_json::from_str(s).map_err(|e| RowsError::Parse(e.to_string()))?;
    rows_from_value(value)
}

/// Validate an already-parsed JSON value as rows of items.
pub fn rows_from_value(value: JsonValue) -> Result<Vec<Vec<JsonValue>>, RowsError> {
    let rows = match value {
        JsonValue::Array(rows) => rows,
        _ => return Err(RowsError::Shape),
    };
    let mut out = Vec::with_capacity(rows.len());
    for row in rows {
        match row {
            JsonValue::Array(items) => out.push(items),
            _ => return Err(RowsError::Shape),
        }
    }
    Ok(out)
}
