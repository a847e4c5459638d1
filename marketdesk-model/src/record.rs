use marketdesk_types::RecordId;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ModelError, ModelResult};
use crate::{FieldValue, RecordSchema};

/// Anything the list engine can filter, sort and page.
pub trait ListRecord {
    /// Stable identifier of the record.
    fn record_id(&self) -> RecordId;

    /// Looks up a named field. `None` means the record has no such field
    /// or the field is null.
    fn field(&self, name: &str) -> Option<FieldValue<'_>>;
}

/// A record type with a fixed, compile-time schema.
pub trait TypedRecord: ListRecord {
    fn schema() -> RecordSchema;
}

impl<T: ListRecord + ?Sized> ListRecord for &T {
    fn record_id(&self) -> RecordId {
        (**self).record_id()
    }

    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        (**self).field(name)
    }
}

/// A generic record holding an untyped JSON payload.
///
/// Used for entity types that have no dedicated Rust type; the schema the
/// record was decoded with decides how its fields are read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub id: RecordId,
    pub entity_type: String,
    pub data: Value,
}

impl Record {
    /// Creates a record with a freshly generated id.
    pub fn new(entity_type: &str, data: Value) -> Self {
        Self {
            id: RecordId::generate(),
            entity_type: entity_type.into(),
            data,
        }
    }

    /// Decodes one API object against a schema.
    ///
    /// The object must be a JSON object carrying a non-empty id under the
    /// schema's `id_field`.
    pub fn from_value(schema: &RecordSchema, data: Value) -> ModelResult<Self> {
        if !data.is_object() {
            return Err(ModelError::InvalidField {
                field: schema.entity_type.clone(),
                reason: "expected a JSON object".to_string(),
            });
        }

        let id = match data.get(&schema.id_field) {
            Some(Value::Number(n)) => RecordId::parse(&n.to_string()),
            Some(Value::String(s)) => RecordId::parse(s),
            _ => return Err(ModelError::MissingId(schema.id_field.clone())),
        }
        .map_err(|_| ModelError::MissingId(schema.id_field.clone()))?;

        Ok(Self {
            id,
            entity_type: schema.entity_type.clone(),
            data,
        })
    }

    /// Extract a string value from `data` using a JSON pointer (e.g., "/name").
    pub fn get_str(&self, pointer: &str) -> Option<&str> {
        self.data.pointer(pointer).and_then(|v| v.as_str())
    }

    /// Extract a boolean value from `data` using a JSON pointer.
    pub fn get_bool(&self, pointer: &str) -> Option<bool> {
        self.data.pointer(pointer).and_then(|v| v.as_bool())
    }

    /// Extract a numeric value from `data` using a JSON pointer.
    pub fn get_number(&self, pointer: &str) -> Option<f64> {
        self.data.pointer(pointer).and_then(|v| v.as_f64())
    }
}

impl ListRecord for Record {
    fn record_id(&self) -> RecordId {
        self.id.clone()
    }

    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        // Plain names address top-level keys; names starting with '/' are
        // JSON pointers into nested objects.
        let value = if name.starts_with('/') {
            self.data.pointer(name)
        } else {
            self.data.get(name)
        }?;

        match value {
            Value::Null | Value::Object(_) => None,
            Value::String(s) => Some(FieldValue::text(s)),
            Value::Number(n) => n.as_f64().map(FieldValue::Number),
            Value::Bool(b) => Some(FieldValue::Bool(*b)),
            Value::Array(items) => Some(FieldValue::List(items.len())),
        }
    }
}
