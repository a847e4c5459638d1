//! Which products a user may list.

use serde::{Deserialize, Serialize};

use crate::error::{SessionError, SessionResult};
use crate::session::SessionUser;
use marketdesk_model::UserRole;

/// The slice of the catalogue a session can see.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "scope", content = "vendor_id")]
pub enum ProductScope {
    /// Every vendor's products.
    All,
    /// One vendor's products.
    Vendor(i64),
}

impl ProductScope {
    /// Super admins see everything; every other role is bound to its vendor.
    pub fn for_user(user: &SessionUser) -> SessionResult<Self> {
        match (user.role, user.vendor_id) {
            (UserRole::SuperAdmin, _) => Ok(Self::All),
            (_, Some(vendor_id)) => Ok(Self::Vendor(vendor_id)),
            (role, None) => Err(SessionError::MissingVendor(role.to_string())),
        }
    }

    /// API path the product list is fetched from.
    pub fn api_path(&self) -> String {
        match self {
            Self::All => "/api/products".to_string(),
            Self::Vendor(id) => format!("/api/products/vendor/{id}"),
        }
    }

    /// Whether a record owned by `vendor_id` falls inside this scope.
    pub fn permits(&self, vendor_id: Option<i64>) -> bool {
        match self {
            Self::All => true,
            Self::Vendor(id) => vendor_id == Some(*id),
        }
    }
}
