//! Decoding of images picked in the product editor.
//!
//! The editor previews new files as base64 `data:` URLs. Before the product
//! is saved they are turned back into named binary files for
//! `/api/upload-multiple`; URLs of images already on the server pass through.

use base64::{engine::general_purpose::STANDARD, Engine};
use marketdesk_types::Timestamp;

use crate::error::{ModelError, ModelResult};

const DEFAULT_MIME: &str = "image/png";

/// A decoded image ready for multipart upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUpload {
    pub file_name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

impl ImageUpload {
    /// Decodes a `data:<mime>;base64,<payload>` URL.
    ///
    /// A missing mime type falls back to `image/png`. The file is named
    /// `image-<millis>-<index>.<subtype>` so several images picked in the
    /// same instant still get distinct names.
    pub fn from_data_url(url: &str, at: Timestamp, index: usize) -> ModelResult<Self> {
        let rest = url
            .strip_prefix("data:")
            .ok_or_else(|| ModelError::InvalidDataUrl("missing `data:` prefix".to_string()))?;

        let (header, payload) = rest
            .split_once(',')
            .ok_or_else(|| ModelError::InvalidDataUrl("missing `,` separator".to_string()))?;

        let mut params = header.split(';');
        let mime = match params.next() {
            Some(m) if !m.is_empty() => m,
            _ => DEFAULT_MIME,
        };
        if !params.any(|p| p == "base64") {
            return Err(ModelError::InvalidDataUrl(
                "only base64 data URLs are supported".to_string(),
            ));
        }

        let bytes = STANDARD
            .decode(payload.trim())
            .map_err(|e| ModelError::InvalidDataUrl(format!("invalid base64: {e}")))?;

        let extension = mime.split_once('/').map(|(_, sub)| sub).unwrap_or("png");

        Ok(Self {
            file_name: format!("image-{}-{}.{}", at.as_millis(), index, extension),
            mime: mime.to_string(),
            bytes,
        })
    }
}

/// An entry of the editor's image list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    /// Already stored; sent back unchanged.
    Existing(String),
    /// Newly picked; must be uploaded first.
    Upload(ImageUpload),
}

impl ImageSource {
    pub fn classify(raw: &str, at: Timestamp, index: usize) -> ModelResult<Self> {
        if raw.starts_with("data:") {
            ImageUpload::from_data_url(raw, at, index).map(Self::Upload)
        } else {
            Ok(Self::Existing(raw.to_string()))
        }
    }
}

/// Splits the editor's image list into kept URLs and files to upload,
/// preserving order within each group. Uploads are numbered by their
/// position in the upload batch.
pub fn partition_images(
    images: &[String],
    at: Timestamp,
) -> ModelResult<(Vec<String>, Vec<ImageUpload>)> {
    let mut existing = Vec::new();
    let mut uploads = Vec::new();

    for raw in images {
        match ImageSource::classify(raw, at, uploads.len())? {
            ImageSource::Existing(url) => existing.push(url),
            ImageSource::Upload(upload) => uploads.push(upload),
        }
    }

    Ok((existing, uploads))
}
