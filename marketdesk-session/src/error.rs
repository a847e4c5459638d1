//! Error types for session handling.

use thiserror::Error;

/// Session-specific errors.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Token is not three dot-separated segments.
    #[error("invalid token format: {0}")]
    InvalidTokenFormat(String),

    /// Payload segment is not valid base64url.
    #[error("invalid token encoding: {0}")]
    InvalidEncoding(#[from] base64::DecodeError),

    /// Payload is not the expected JSON object.
    #[error("invalid token payload: {0}")]
    InvalidPayload(#[from] serde_json::Error),

    /// A required claim is missing or empty.
    #[error("token is missing claim {0:?}")]
    MissingClaim(&'static str),

    /// Role claim is not one the dashboard knows.
    #[error("unknown role {0:?}")]
    UnknownRole(String),

    /// Token `exp` has passed.
    #[error("session expired at {0}")]
    Expired(String),

    /// A vendor-bound role carries no vendor id.
    #[error("{0} session has no vendor_id")]
    MissingVendor(String),

    /// No one is logged in.
    #[error("not logged in")]
    NotLoggedIn,
}

/// Result type for session operations.
pub type SessionResult<T> = Result<T, SessionError>;
