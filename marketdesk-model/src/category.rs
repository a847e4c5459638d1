use marketdesk_types::{RecordId, Timestamp};
use serde::{Deserialize, Serialize};

use crate::{FieldValue, ListRecord, RecordSchema, SchemaField, TypedRecord};

/// A top-level product category.
///
/// The categories endpoint is camelCase while the rest of the API is
/// snake_case, so both spellings are accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    #[serde(alias = "category_id")]
    pub id: RecordId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, alias = "imageUrl")]
    pub image_url: Option<String>,
    #[serde(alias = "createdAt")]
    pub created_at: Timestamp,
    #[serde(default, alias = "updatedAt")]
    pub updated_at: Option<Timestamp>,
    #[serde(default)]
    pub subcategories: Vec<Subcategory>,
}

/// A subcategory nested under a [`Category`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subcategory {
    pub subcategory_id: RecordId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, alias = "imageUrl")]
    pub image_url: Option<String>,
    pub category_id: RecordId,
    #[serde(alias = "createdAt")]
    pub created_at: Timestamp,
    #[serde(default, alias = "updatedAt")]
    pub updated_at: Option<Timestamp>,
}

impl Category {
    /// Finds a nested subcategory by id.
    pub fn subcategory(&self, id: &RecordId) -> Option<&Subcategory> {
        self.subcategories.iter().find(|s| &s.subcategory_id == id)
    }
}

impl ListRecord for Category {
    fn record_id(&self) -> RecordId {
        self.id.clone()
    }

    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            "id" => Some(FieldValue::text(self.id.as_str())),
            "name" => Some(FieldValue::text(&self.name)),
            "description" => self.description.as_deref().map(FieldValue::text),
            "image_url" => self.image_url.as_deref().map(FieldValue::text),
            "subcategories" => Some(FieldValue::List(self.subcategories.len())),
            "created_at" => Some(FieldValue::Timestamp(self.created_at)),
            "updated_at" => self.updated_at.map(FieldValue::Timestamp),
            _ => None,
        }
    }
}

impl TypedRecord for Category {
    fn schema() -> RecordSchema {
        RecordSchema::new(
            "category",
            vec![
                SchemaField::text("name", true),
                SchemaField::text("description", true),
                SchemaField::list("subcategories"),
                SchemaField::datetime("created_at"),
                SchemaField::datetime("updated_at"),
            ],
        )
    }
}

impl ListRecord for Subcategory {
    fn record_id(&self) -> RecordId {
        self.subcategory_id.clone()
    }

    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            "subcategory_id" | "id" => Some(FieldValue::text(self.subcategory_id.as_str())),
            "name" => Some(FieldValue::text(&self.name)),
            "description" => self.description.as_deref().map(FieldValue::text),
            "image_url" => self.image_url.as_deref().map(FieldValue::text),
            "category_id" => Some(FieldValue::text(self.category_id.as_str())),
            "created_at" => Some(FieldValue::Timestamp(self.created_at)),
            "updated_at" => self.updated_at.map(FieldValue::Timestamp),
            _ => None,
        }
    }
}

impl TypedRecord for Subcategory {
    fn schema() -> RecordSchema {
        RecordSchema::new(
            "subcategory",
            vec![
                SchemaField::text("name", true),
                SchemaField::text("description", true),
                SchemaField::category("category_id"),
                SchemaField::datetime("created_at"),
                SchemaField::datetime("updated_at"),
            ],
        )
        .with_id_field("subcategory_id")
    }
}
