//! Boundary validation for list payloads fetched from the commerce API.
//!
//! Every list endpoint answers with a JSON array. The strict decoder rejects
//! the whole payload on the first bad element; the lenient one drops bad
//! elements with a warning so one malformed product does not blank the
//! whole table.

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::warn;

use crate::error::{ModelError, ModelResult};
use crate::{Record, RecordSchema};

/// Outcome of a lenient decode.
#[derive(Debug, Clone, PartialEq)]
pub struct Decoded<T> {
    pub records: Vec<T>,
    /// Indices of the elements that failed validation.
    pub rejected: Vec<usize>,
}

fn as_array(payload: Value) -> ModelResult<Vec<Value>> {
    match payload {
        Value::Array(items) => Ok(items),
        other => Err(ModelError::InvalidField {
            field: "payload".to_string(),
            reason: format!("expected a JSON array, got {}", json_kind(&other)),
        }),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Decodes a JSON array into typed records, failing on the first bad element.
pub fn decode_list<T: DeserializeOwned>(payload: Value) -> ModelResult<Vec<T>> {
    as_array(payload)?
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            serde_json::from_value(item).map_err(|e| ModelError::InvalidRecord {
                index,
                reason: e.to_string(),
            })
        })
        .collect()
}

/// Decodes a JSON array into typed records, skipping bad elements.
pub fn decode_list_lenient<T: DeserializeOwned>(payload: Value) -> ModelResult<Decoded<T>> {
    let items = as_array(payload)?;
    let mut records = Vec::with_capacity(items.len());
    let mut rejected = Vec::new();

    for (index, item) in items.into_iter().enumerate() {
        match serde_json::from_value(item) {
            Ok(record) => records.push(record),
            Err(e) => {
                warn!("Dropping record at index {}: {}", index, e);
                rejected.push(index);
            }
        }
    }

    Ok(Decoded { records, rejected })
}

/// Decodes a JSON array into generic records checked against `schema`.
pub fn decode_records(schema: &RecordSchema, payload: Value) -> ModelResult<Decoded<Record>> {
    let items = as_array(payload)?;
    let mut records = Vec::with_capacity(items.len());
    let mut rejected = Vec::new();

    for (index, item) in items.into_iter().enumerate() {
        match Record::from_value(schema, item) {
            Ok(record) => records.push(record),
            Err(e) => {
                warn!(
                    "Dropping {} record at index {}: {}",
                    schema.entity_type, index, e
                );
                rejected.push(index);
            }
        }
    }

    Ok(Decoded { records, rejected })
}
