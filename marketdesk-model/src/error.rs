//! Error types for the entity model.

use thiserror::Error;

/// Errors raised while validating data entering from the commerce API or
/// from admin forms.
#[derive(Debug, Error)]
pub enum ModelError {
    /// Malformed JSON or a shape serde could not map.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// One element of a list payload failed validation.
    #[error("invalid record at index {index}: {reason}")]
    InvalidRecord { index: usize, reason: String },

    /// A single field failed validation.
    #[error("invalid field `{field}`: {reason}")]
    InvalidField { field: String, reason: String },

    /// The record carries no usable identifier.
    #[error("missing record id in field `{0}`")]
    MissingId(String),

    /// Image data was not a base64 `data:` URL.
    #[error("invalid data URL: {0}")]
    InvalidDataUrl(String),
}

/// Result type for model operations.
pub type ModelResult<T> = Result<T, ModelError>;
