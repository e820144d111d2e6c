//! Data URL encoding for persisted blobs
//!
//! Uploaded files are stored in the key/value layer as self-describing
//! `data:<mime>;base64,<payload>` strings, the same shape the value must take
//! to be handed straight to an image or document consumer.

use crate::error::EncodingError;
use base64::{engine::general_purpose::STANDARD, Engine};

/// A decoded blob: the original bytes plus their MIME type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedBlob {
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

/// Encode raw bytes into a data URL
pub fn encode(mime_type: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", mime_type, STANDARD.encode(bytes))
}

/// Decode a data URL back into bytes and MIME type
///
/// Callers that can degrade (cover thumbnails, the public gallery) should
/// treat an error as "blob unavailable" rather than surfacing it.
pub fn decode(data_url: &str) -> Result<DecodedBlob, EncodingError> {
    let rest = data_url
        .strip_prefix("data:")
        .ok_or_else(|| EncodingError::MalformedDataUrl("missing data: prefix".to_string()))?;

    let (mime_type, payload) = rest
        .split_once(";base64,")
        .ok_or_else(|| EncodingError::MalformedDataUrl("missing base64 marker".to_string()))?;

    let bytes = STANDARD.decode(payload)?;
    Ok(DecodedBlob {
        mime_type: mime_type.to_string(),
        bytes,
    })
}

/// Guess a MIME type from a file extension
///
/// The original upload path got the MIME type from the browser; outside a
/// browser the extension is all we have. Unknown extensions fall back to
/// `application/octet-stream`.
pub fn mime_for_extension(extension: &str) -> &'static str {
    match extension.to_ascii_lowercase().as_str() {
        "pdf" => "application/pdf",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        _ => "application/octet-stream",
    }
}
