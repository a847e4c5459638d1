//! Shared test helpers for session tests.

#![allow(dead_code)]

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};

/// Builds an unsigned JWT-shaped token around `payload_json`.
pub fn token(payload_json: &str) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let payload = URL_SAFE_NO_PAD.encode(payload_json.as_bytes());
    format!("{header}.{payload}.c2lnbmF0dXJl")
}

pub fn super_admin_token() -> String {
    token(r#"{"id":1,"email":"admin@example.com","name":"Admin User","role":"super_admin"}"#)
}

pub fn vendor_token(vendor_id: i64) -> String {
    token(&format!(
        r#"{{"id":"7","email":"shop@example.com","name":"Shop Owner","role":"vendor_admin","vendor_id":{vendor_id}}}"#
    ))
}

/// A vendor admin token that expires at `exp` (seconds since epoch).
pub fn expiring_token(exp: i64) -> String {
    token(&format!(
        r#"{{"id":3,"email":"staff@example.com","name":"Staff","role":"staff","vendor_id":4,"exp":{exp}}}"#
    ))
}
