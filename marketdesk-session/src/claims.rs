//! JWT payload decoding.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use marketdesk_types::RecordId;
use serde::{Deserialize, Serialize};

use crate::error::{SessionError, SessionResult};

/// Claims the commerce API puts in a login token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    pub id: Option<RecordId>,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub vendor_id: Option<i64>,
    /// Expiry, seconds since the epoch.
    #[serde(default)]
    pub exp: Option<i64>,
}

impl Claims {
    /// Decodes the payload segment of `token` without checking the signature.
    pub fn decode(token: &str) -> SessionResult<Self> {
        let parts: Vec<&str> = token.trim().split('.').collect();
        if parts.len() != 3 {
            return Err(SessionError::InvalidTokenFormat(format!(
                "expected 3 segments, found {}",
                parts.len()
            )));
        }

        // Some issuers pad the payload; the URL-safe engine here does not accept it.
        let payload = URL_SAFE_NO_PAD.decode(parts[1].trim_end_matches('='))?;
        Ok(serde_json::from_slice(&payload)?)
    }
}
