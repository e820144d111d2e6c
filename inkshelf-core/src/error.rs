//! Error types for Inkshelf Core

use thiserror::Error;

/// Result type alias using ShelfError
pub type Result<T> = std::result::Result<T, ShelfError>;

/// Top-level error type for all Inkshelf operations
#[derive(Debug, Error)]
pub enum ShelfError {
    #[error("book {0} not found")]
    NotFound(u64),

    #[error("encoding error: {0}")]
    Encoding(#[from] EncodingError),

    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("viewer error: {0}")]
    Viewer(#[from] ViewerError),
}

/// Errors raised while turning files into persistable blobs and back
#[derive(Debug, Error)]
pub enum EncodingError {
    #[error("file could not be read: {0}")]
    Read(#[from] std::io::Error),

    #[error("malformed data url: {0}")]
    MalformedDataUrl(String),

    #[error("invalid base64 payload: {0}")]
    Base64(#[from] base64::DecodeError),
}

/// Errors raised by the key/value storage layer
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("key not found: {0}")]
    NotFound(String),

    #[error("invalid key: {0}")]
    InvalidKey(String),

    #[error("backend error: {0}")]
    Backend(String),
}

/// Errors raised while opening and painting documents
#[derive(Debug, Error)]
pub enum ViewerError {
    #[error("document not found")]
    DocumentNotFound,

    #[error("failed to parse document: {0}")]
    Parse(String),

    #[error("failed to render page {page}: {reason}")]
    Render { page: u32, reason: String },
}
