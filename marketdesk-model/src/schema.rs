use serde::{Deserialize, Serialize};

/// Describes a record type's listable fields.
///
/// The list engine reads two things from a schema: which text fields take
/// part in free-text search, and which fields hold timestamps (those sort
/// chronologically rather than lexicographically).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordSchema {
    pub entity_type: String,
    /// Field holding the record id in raw JSON payloads.
    #[serde(default = "default_id_field")]
    pub id_field: String,
    pub fields: Vec<SchemaField>,
}

fn default_id_field() -> String {
    "id".to_string()
}

impl RecordSchema {
    /// Creates a schema whose records carry their id under `"id"`.
    pub fn new(entity_type: &str, fields: Vec<SchemaField>) -> Self {
        Self {
            entity_type: entity_type.into(),
            id_field: default_id_field(),
            fields,
        }
    }

    /// Overrides the id field (e.g. `"product_id"`).
    #[must_use]
    pub fn with_id_field(mut self, id_field: &str) -> Self {
        self.id_field = id_field.into();
        self
    }

    /// Looks up a field by name.
    pub fn field(&self, name: &str) -> Option<&SchemaField> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Declared type of a field, if the schema knows it.
    pub fn field_type(&self, name: &str) -> Option<FieldType> {
        self.field(name).map(|f| f.field_type)
    }

    /// Names of the fields free-text search looks at, in declaration order.
    pub fn searchable_fields(&self) -> impl Iterator<Item = &str> {
        self.fields
            .iter()
            .filter(|f| f.searchable)
            .map(|f| f.name.as_str())
    }

    /// True if the field is declared as a timestamp.
    pub fn is_temporal(&self, name: &str) -> bool {
        self.field_type(name) == Some(FieldType::DateTime)
    }
}

/// A named field of a record type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemaField {
    pub name: String,
    pub field_type: FieldType,
    #[serde(default)]
    pub searchable: bool,
    /// Known values of an enum field. Informational; filters still accept
    /// values outside the list and simply match nothing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[serde(alias = "options")]
    pub enum_options: Option<Vec<String>>,
}

impl SchemaField {
    fn simple(name: &str, field_type: FieldType, searchable: bool) -> Self {
        Self {
            name: name.into(),
            field_type,
            searchable,
            enum_options: None,
        }
    }

    /// Shorthand for a text field.
    pub fn text(name: &str, searchable: bool) -> Self {
        Self::simple(name, FieldType::Text, searchable)
    }

    /// Shorthand for an enum field with fixed options.
    pub fn enumeration(name: &str, options: &[&str]) -> Self {
        Self {
            name: name.into(),
            field_type: FieldType::Enum,
            searchable: false,
            enum_options: Some(options.iter().map(|o| (*o).to_string()).collect()),
        }
    }

    /// Shorthand for an enum field whose values come from the data
    /// (category names, vendor stores).
    pub fn category(name: &str) -> Self {
        Self::simple(name, FieldType::Enum, false)
    }

    /// Shorthand for a numeric field.
    pub fn number(name: &str) -> Self {
        Self::simple(name, FieldType::Number, false)
    }

    /// Shorthand for a DateTime field.
    pub fn datetime(name: &str) -> Self {
        Self::simple(name, FieldType::DateTime, false)
    }

    /// Shorthand for a boolean field.
    pub fn bool(name: &str) -> Self {
        Self::simple(name, FieldType::Bool, false)
    }

    /// Shorthand for a nested list field; sorts by element count.
    pub fn list(name: &str) -> Self {
        Self::simple(name, FieldType::List, false)
    }
}

/// The semantic type of a record field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    Text,
    Enum,
    Number,
    DateTime,
    Bool,
    List,
}
