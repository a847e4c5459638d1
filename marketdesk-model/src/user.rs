use marketdesk_types::{RecordId, Timestamp};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;
use crate::{FieldValue, ListRecord, RecordSchema, SchemaField, TypedRecord};

/// Administrative role of a dashboard user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    /// Sees every vendor's data and manages users.
    SuperAdmin,
    /// Manages a single vendor's catalogue.
    VendorAdmin,
    Staff,
}

impl UserRole {
    pub const ALL: [UserRole; 3] = [Self::SuperAdmin, Self::VendorAdmin, Self::Staff];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SuperAdmin => "super_admin",
            Self::VendorAdmin => "vendor_admin",
            Self::Staff => "staff",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| ModelError::InvalidField {
                field: "role".to_string(),
                reason: format!("unknown role {s:?}"),
            })
    }
}

/// A dashboard user as listed on the settings page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub user_id: RecordId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role: UserRole,
    pub created_at: Timestamp,
}

impl User {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

impl ListRecord for User {
    fn record_id(&self) -> RecordId {
        self.user_id.clone()
    }

    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            "user_id" | "id" => Some(FieldValue::text(self.user_id.as_str())),
            "first_name" => Some(FieldValue::text(&self.first_name)),
            "last_name" => Some(FieldValue::text(&self.last_name)),
            "name" => Some(FieldValue::owned(self.full_name())),
            "email" => Some(FieldValue::text(&self.email)),
            "role" => Some(FieldValue::text(self.role.as_str())),
            "created_at" => Some(FieldValue::Timestamp(self.created_at)),
            _ => None,
        }
    }
}

impl TypedRecord for User {
    fn schema() -> RecordSchema {
        RecordSchema::new(
            "user",
            vec![
                SchemaField::text("first_name", true),
                SchemaField::text("last_name", true),
                SchemaField::text("email", true),
                SchemaField::text("name", false),
                SchemaField::enumeration("role", &["super_admin", "vendor_admin", "staff"]),
                SchemaField::datetime("created_at"),
            ],
        )
        .with_id_field("user_id")
    }
}
