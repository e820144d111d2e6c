//! Uploaded file input

use crate::dataurl;
use crate::error::EncodingError;
use std::path::Path;

/// An uploaded file headed for the blob store
///
/// The typed stand-in for a browser `File`: name, MIME type, bytes. Encoding
/// happens later, inside the catalog store, so a failed read never leaves a
/// half-written blob behind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Upload {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl Upload {
    pub fn new(
        file_name: impl Into<String>,
        mime_type: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            mime_type: mime_type.into(),
            bytes,
        }
    }

    /// Read an upload from disk, guessing the MIME type from the extension
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, EncodingError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)?;

        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("upload")
            .to_string();
        let mime_type = path
            .extension()
            .and_then(|e| e.to_str())
            .map(dataurl::mime_for_extension)
            .unwrap_or("application/octet-stream")
            .to_string();

        Ok(Self {
            file_name,
            mime_type,
            bytes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_path_missing_file_is_read_error() {
        let err = Upload::from_path("/definitely/not/here.pdf").unwrap_err();
        assert!(matches!(err, EncodingError::Read(_)));
    }

    #[test]
    fn test_from_path_reads_and_guesses_mime() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cover.png");
        std::fs::write(&path, b"png bytes").unwrap();

        let upload = Upload::from_path(&path).unwrap();
        assert_eq!(upload.file_name, "cover.png");
        assert_eq!(upload.mime_type, "image/png");
        assert_eq!(upload.bytes, b"png bytes");
    }
}
