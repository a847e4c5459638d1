//! Write payloads sent to the commerce API, and the form data they are
//! built from.

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, ModelResult};
use crate::{ProductStatus, UserRole};

fn invalid(field: &str, reason: &str) -> ModelError {
    ModelError::InvalidField {
        field: field.to_string(),
        reason: reason.to_string(),
    }
}

/// A variant row of the product form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariantForm {
    pub name: String,
    pub price: f64,
    pub stock_quantity: i64,
    pub sku: String,
}

/// The product editor's submitted values.
///
/// `images` holds either URLs of images already stored on the server or
/// `data:` URLs of freshly picked files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductForm {
    pub product_name: String,
    #[serde(default)]
    pub description: String,
    pub base_price: f64,
    pub category_id: i64,
    pub subcategory_id: String,
    pub sku: String,
    pub status: ProductStatus,
    #[serde(default)]
    pub variants: Vec<VariantForm>,
    pub images: Vec<String>,
}

impl ProductForm {
    /// Applies the editor's validation rules.
    pub fn validate(&self) -> ModelResult<()> {
        if self.product_name.trim().is_empty() {
            return Err(invalid("product_name", "name is required"));
        }
        if !(self.base_price >= 0.0) {
            return Err(invalid("base_price", "price must be positive"));
        }
        if self.sku.trim().is_empty() {
            return Err(invalid("sku", "SKU is required"));
        }
        if self.images.is_empty() {
            return Err(invalid("images", "at least one image is required"));
        }
        for (i, variant) in self.variants.iter().enumerate() {
            let field = |name: &str| format!("variants[{i}].{name}");
            if variant.name.trim().is_empty() {
                return Err(invalid(&field("name"), "variant name is required"));
            }
            if !(variant.price >= 0.0) {
                return Err(invalid(&field("price"), "price must be positive"));
            }
            if variant.stock_quantity < 0 {
                return Err(invalid(&field("stock_quantity"), "stock must be positive"));
            }
            if variant.sku.trim().is_empty() {
                return Err(invalid(&field("sku"), "SKU is required"));
            }
        }
        Ok(())
    }
}

/// Response of `/api/upload-multiple`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadResponse {
    pub images: Vec<UploadedImage>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadedImage {
    #[serde(rename = "imageUrl")]
    pub image_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariantPayload {
    pub name: String,
    pub price: f64,
    pub stock_quantity: i64,
    pub sku: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImagePayload {
    pub url: String,
    pub is_primary: bool,
}

/// Body of `POST /api/products` and `PUT /api/products/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateProductPayload {
    pub vendor_id: i64,
    pub category_id: i64,
    pub subcategory_id: String,
    pub product_name: String,
    pub description: String,
    pub base_price: f64,
    pub sku: String,
    pub variants: Vec<VariantPayload>,
    pub images: Vec<ImagePayload>,
}

impl CreateProductPayload {
    /// Builds the payload from a validated form and the final image URLs.
    ///
    /// The first URL becomes the primary image.
    pub fn from_form(form: &ProductForm, vendor_id: i64, image_urls: &[String]) -> ModelResult<Self> {
        form.validate()?;
        if image_urls.is_empty() {
            return Err(invalid("images", "at least one image is required"));
        }

        Ok(Self {
            vendor_id,
            category_id: form.category_id,
            subcategory_id: form.subcategory_id.clone(),
            product_name: form.product_name.trim().to_string(),
            description: form.description.clone(),
            base_price: form.base_price,
            sku: form.sku.trim().to_string(),
            variants: form
                .variants
                .iter()
                .map(|v| VariantPayload {
                    name: v.name.clone(),
                    price: v.price,
                    stock_quantity: v.stock_quantity,
                    sku: v.sku.clone(),
                })
                .collect(),
            images: image_urls
                .iter()
                .enumerate()
                .map(|(index, url)| ImagePayload {
                    url: url.clone(),
                    is_primary: index == 0,
                })
                .collect(),
        })
    }
}

/// Body of `POST /api/users`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateUserPayload {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub role: UserRole,
}

impl CreateUserPayload {
    pub fn validate(&self) -> ModelResult<()> {
        let email = self.email.trim();
        match email.split_once('@') {
            Some((local, domain)) if !local.is_empty() && domain.contains('.') => {}
            _ => return Err(invalid("email", "not a valid email address")),
        }
        if self.password.is_empty() {
            return Err(invalid("password", "password is required"));
        }
        if self.first_name.trim().is_empty() {
            return Err(invalid("first_name", "first name is required"));
        }
        Ok(())
    }
}
