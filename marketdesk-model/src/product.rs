use marketdesk_types::{RecordId, Timestamp};
use serde::{Deserialize, Serialize};

use crate::de::{int_or_string, number_or_string};
use crate::{FieldValue, ListRecord, RecordSchema, SchemaField, TypedRecord};

/// Publication state of a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductStatus {
    Active,
    Draft,
    Archived,
    /// Any status this dashboard does not know about yet.
    #[serde(other)]
    Unknown,
}

impl ProductStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Draft => "draft",
            Self::Archived => "archived",
            Self::Unknown => "unknown",
        }
    }
}

/// An image attached to a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductImage {
    #[serde(default)]
    pub image_id: Option<RecordId>,
    #[serde(alias = "url")]
    pub image_url: String,
    #[serde(default)]
    pub is_primary: bool,
}

/// A purchasable variant (size, colour) of a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductVariant {
    #[serde(default)]
    pub variant_id: Option<RecordId>,
    #[serde(alias = "variant_name")]
    pub name: String,
    #[serde(alias = "variant_price", deserialize_with = "number_or_string")]
    pub price: f64,
    #[serde(default, deserialize_with = "int_or_string")]
    pub stock_quantity: i64,
    #[serde(default)]
    pub sku: Option<String>,
}

/// A product as listed by `/api/products`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub product_id: RecordId,
    pub product_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(deserialize_with = "number_or_string")]
    pub base_price: f64,
    pub sku: String,
    #[serde(default)]
    pub category_id: Option<RecordId>,
    #[serde(default)]
    pub category_name: Option<String>,
    #[serde(default)]
    pub subcategory_id: Option<RecordId>,
    #[serde(default)]
    pub subcategory_name: Option<String>,
    #[serde(default)]
    pub store_name: Option<String>,
    #[serde(default)]
    pub vendor_id: Option<i64>,
    #[serde(default)]
    pub status: Option<ProductStatus>,
    #[serde(default)]
    pub images: Vec<ProductImage>,
    #[serde(default)]
    pub variants: Vec<ProductVariant>,
    pub created_at: Timestamp,
    #[serde(default)]
    pub updated_at: Option<Timestamp>,
}

impl Product {
    /// Stock summed over all variants.
    pub fn total_stock(&self) -> i64 {
        self.variants.iter().map(|v| v.stock_quantity).sum()
    }

    /// The image shown in the product table: the one flagged primary, else
    /// the first.
    pub fn primary_image(&self) -> Option<&ProductImage> {
        self.images
            .iter()
            .find(|img| img.is_primary)
            .or_else(|| self.images.first())
    }
}

impl ListRecord for Product {
    fn record_id(&self) -> RecordId {
        self.product_id.clone()
    }

    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            "product_id" | "id" => Some(FieldValue::text(self.product_id.as_str())),
            "product_name" | "name" => Some(FieldValue::text(&self.product_name)),
            "description" => Some(FieldValue::text(&self.description)),
            "sku" => Some(FieldValue::text(&self.sku)),
            "base_price" | "price" => Some(FieldValue::Number(self.base_price)),
            "category_id" => self.category_id.as_ref().map(|id| FieldValue::text(id.as_str())),
            "category_name" => self.category_name.as_deref().map(FieldValue::text),
            "subcategory_id" => self
                .subcategory_id
                .as_ref()
                .map(|id| FieldValue::text(id.as_str())),
            "subcategory_name" => self.subcategory_name.as_deref().map(FieldValue::text),
            "store_name" => self.store_name.as_deref().map(FieldValue::text),
            "vendor_id" => self.vendor_id.map(FieldValue::from),
            "status" => self.status.map(|s| FieldValue::text(s.as_str())),
            "stock" => Some(FieldValue::from(self.total_stock())),
            "images" => Some(FieldValue::List(self.images.len())),
            "variants" => Some(FieldValue::List(self.variants.len())),
            "created_at" => Some(FieldValue::Timestamp(self.created_at)),
            "updated_at" => self.updated_at.map(FieldValue::Timestamp),
            _ => None,
        }
    }
}

impl TypedRecord for Product {
    fn schema() -> RecordSchema {
        RecordSchema::new(
            "product",
            vec![
                SchemaField::text("product_name", true),
                SchemaField::text("sku", true),
                SchemaField::text("description", false),
                SchemaField::category("category_id"),
                SchemaField::category("category_name"),
                SchemaField::category("subcategory_name"),
                SchemaField::category("store_name"),
                SchemaField::enumeration("status", &["active", "draft", "archived"]),
                SchemaField::number("base_price"),
                SchemaField::number("stock"),
                SchemaField::list("images"),
                SchemaField::list("variants"),
                SchemaField::datetime("created_at"),
                SchemaField::datetime("updated_at"),
            ],
        )
        .with_id_field("product_id")
    }
}
