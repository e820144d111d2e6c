//! Inkshelf Core Library
//!
//! This crate provides the core of the Inkshelf catalog manager: the book
//! record model, the key/value-backed catalog store with its blob encoding,
//! the document viewer state machine, and the admin session gate. The
//! presentation surfaces (CLI, gallery) live in their own crates and only
//! call into what is exported here.

pub mod catalog;
pub mod dataurl;
pub mod error;
pub mod notice;
pub mod session;
pub mod storage;
pub mod types;
pub mod viewer;

pub use catalog::{Catalog, CATALOG_KEY};
pub use dataurl::DecodedBlob;
pub use error::{EncodingError, Result, ShelfError, StorageError, ViewerError};
pub use notice::{Notice, Severity};
pub use session::SessionGate;
pub use storage::{DirStore, KeyStore, MemoryStore};
pub use types::{Book, BookDraft, BookPatch, BookStatus, Upload};
pub use viewer::{
    DocumentHandle, DocumentViewer, PageFrame, PageRenderer, RenderSurface, ViewerState,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_empty_catalog_from_fresh_store() {
        let catalog = Catalog::load(MemoryStore::new()).await.unwrap();
        assert!(catalog.list().is_empty());
        assert_eq!(catalog.get(1), None);
    }
}
