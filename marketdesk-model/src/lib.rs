//! Entity model for MarketDesk.
//!
//! Defines the shapes every list screen of the admin dashboard works with:
//! - [`RecordSchema`]: declares a record type's searchable, categorical,
//!   numeric and temporal fields
//! - [`FieldValue`]: a single field as the list engine sees it
//! - [`ListRecord`]: id and named-field access, implemented by every entity
//! - [`Record`]: a generic record over an untyped JSON payload
//! - typed entities ([`Product`], [`Category`], [`Subcategory`], [`User`],
//!   [`RecentOrder`]) validated when data enters from the commerce API
//!
//! Write payloads and image decoding for the product editor live here too.

mod category;
mod dashboard;
mod de;
mod decode;
mod error;
mod payload;
mod product;
mod record;
mod schema;
mod upload;
mod user;
mod value;

pub use category::{Category, Subcategory};
pub use dashboard::{DashboardStats, RecentOrder, TrendData, Trends};
pub use decode::{decode_list, decode_list_lenient, decode_records, Decoded};
pub use error::{ModelError, ModelResult};
pub use payload::{
    CreateProductPayload, CreateUserPayload, ImagePayload, ProductForm, UploadResponse,
    UploadedImage, VariantForm, VariantPayload,
};
pub use product::{Product, ProductImage, ProductStatus, ProductVariant};
pub use record::{ListRecord, Record, TypedRecord};
pub use schema::{FieldType, RecordSchema, SchemaField};
pub use upload::{partition_images, ImageSource, ImageUpload};
pub use user::{User, UserRole};
pub use value::FieldValue;
