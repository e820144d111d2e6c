//! The catalog store
//!
//! Owns the record list and the blobs the records reference. The persisted
//! catalog is the single source of truth: the in-memory list is loaded once
//! at startup and written back wholesale after every mutation, so by the time
//! a mutating call returns the new state is durable.

use crate::dataurl::{self, DecodedBlob};
use crate::error::{Result, ShelfError, StorageError};
use crate::storage::KeyStore;
use crate::types::{Book, BookDraft, BookPatch, Upload};
use tracing::{debug, warn};

/// Fixed key the record list is persisted under
pub const CATALOG_KEY: &str = "books";

/// Prefix shared by all blob reference keys
pub const UPLOADS_PREFIX: &str = "uploads/";

/// The catalog: an ordered list of records plus their blob store
pub struct Catalog<S: KeyStore> {
    store: S,
    books: Vec<Book>,
}

impl<S: KeyStore> Catalog<S> {
    /// Load the catalog from storage; an absent entry is an empty catalog
    pub async fn load(store: S) -> Result<Self> {
        let books = match store.read(CATALOG_KEY).await {
            Ok(json) => serde_json::from_str(&json)
                .map_err(|e| StorageError::Backend(format!("corrupt catalog entry: {}", e)))?,
            Err(StorageError::NotFound(_)) => Vec::new(),
            Err(e) => return Err(e.into()),
        };
        debug!(count = books.len(), "catalog loaded");
        Ok(Self { store, books })
    }

    /// All records, in insertion order
    pub fn list(&self) -> &[Book] {
        &self.books
    }

    /// Point lookup by id
    pub fn get(&self, id: u64) -> Option<&Book> {
        self.books.iter().find(|b| b.id == id)
    }

    /// Create a record, persisting any uploaded cover/PDF as blobs first
    pub async fn create(
        &mut self,
        draft: BookDraft,
        cover: Option<Upload>,
        pdf: Option<Upload>,
    ) -> Result<Book> {
        let cover_ref = match cover {
            Some(upload) => self.stash_upload("covers", "cover", upload).await?,
            None => String::new(),
        };
        let pdf_ref = match pdf {
            Some(upload) => self.stash_upload("pdfs", "pdf", upload).await?,
            None => String::new(),
        };

        let book = Book {
            id: self.next_id(),
            title: draft.title,
            author: draft.author,
            category: draft.category,
            description: draft.description,
            status: draft.status,
            cover: cover_ref,
            pdf_url: pdf_ref,
        };

        self.books.push(book.clone());
        self.persist().await?;
        debug!(id = book.id, title = %book.title, "book created");
        Ok(book)
    }

    /// Update a record in place
    ///
    /// A supplied upload replaces the corresponding reference with a fresh
    /// blob; the prior blob stays in storage until a sweep. Without an upload
    /// the existing reference is kept unchanged.
    pub async fn update(
        &mut self,
        id: u64,
        patch: BookPatch,
        cover: Option<Upload>,
        pdf: Option<Upload>,
    ) -> Result<Book> {
        if !self.books.iter().any(|b| b.id == id) {
            return Err(ShelfError::NotFound(id));
        }

        // Encode and persist new blobs before touching the record, so a
        // failure here leaves the catalog entry as it was
        let cover_ref = match cover {
            Some(upload) => Some(self.stash_upload("covers", "cover", upload).await?),
            None => None,
        };
        let pdf_ref = match pdf {
            Some(upload) => Some(self.stash_upload("pdfs", "pdf", upload).await?),
            None => None,
        };

        let book = self
            .books
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or(ShelfError::NotFound(id))?;

        patch.apply(book);
        if let Some(cover_ref) = cover_ref {
            book.cover = cover_ref;
        }
        if let Some(pdf_ref) = pdf_ref {
            book.pdf_url = pdf_ref;
        }

        let book = book.clone();
        self.persist().await?;
        debug!(id, "book updated");
        Ok(book)
    }

    /// Remove a record; its blobs are left in storage
    pub async fn delete(&mut self, id: u64) -> Result<()> {
        let before = self.books.len();
        self.books.retain(|b| b.id != id);
        if self.books.len() == before {
            return Err(ShelfError::NotFound(id));
        }
        self.persist().await?;
        debug!(id, "book deleted");
        Ok(())
    }

    /// Resolve a blob reference to its decoded contents
    ///
    /// Missing keys and undecodable values both come back as `None`; a record
    /// pointing at a blob that is gone renders as "no image / no document",
    /// it never fails the caller.
    pub async fn resolve_blob(&self, reference: &str) -> Option<DecodedBlob> {
        if reference.is_empty() {
            return None;
        }
        let value = match self.store.read(reference).await {
            Ok(v) => v,
            Err(_) => return None,
        };
        match dataurl::decode(&value) {
            Ok(blob) => Some(blob),
            Err(e) => {
                warn!(%reference, error = %e, "stored blob is not a valid data url");
                None
            }
        }
    }

    /// Delete every blob no current record references, returning the removed keys
    ///
    /// Replacing an upload or deleting a record leaves the old blob behind;
    /// this reconciliation pass is how that storage gets reclaimed.
    pub async fn sweep_orphans(&mut self) -> Result<Vec<String>> {
        let referenced: std::collections::HashSet<&str> = self
            .books
            .iter()
            .flat_map(|b| [b.cover_ref(), b.pdf_ref()])
            .flatten()
            .collect();

        let mut removed = Vec::new();
        for key in self.store.list(UPLOADS_PREFIX).await? {
            if !referenced.contains(key.as_str()) {
                self.store.delete(&key).await?;
                removed.push(key);
            }
        }
        debug!(count = removed.len(), "orphaned blobs swept");
        Ok(removed)
    }

    /// Next record id: max(existing ids) + 1, starting at 1
    fn next_id(&self) -> u64 {
        self.books.iter().map(|b| b.id).max().unwrap_or(0) + 1
    }

    /// Encode an upload as a data URL and persist it under a fresh reference key
    async fn stash_upload(&self, folder: &str, prefix: &str, upload: Upload) -> Result<String> {
        let reference = blob_key(folder, prefix, &upload.file_name);
        let value = dataurl::encode(&upload.mime_type, &upload.bytes);
        self.store.write(&reference, value).await?;
        debug!(%reference, bytes = upload.bytes.len(), "blob persisted");
        Ok(reference)
    }

    /// Write the full record list back to storage
    async fn persist(&self) -> Result<()> {
        let json = serde_json::to_string(&self.books)
            .map_err(|e| StorageError::Backend(e.to_string()))?;
        self.store.write(CATALOG_KEY, json).await?;
        Ok(())
    }
}

/// Build a blob reference key: `uploads/<folder>/<prefix>_<timestamp>_<name>`
fn blob_key(folder: &str, prefix: &str, file_name: &str) -> String {
    let timestamp = chrono::Utc::now().timestamp_millis();
    format!("{}{}/{}_{}_{}", UPLOADS_PREFIX, folder, prefix, timestamp, file_name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use crate::types::BookStatus;

    fn draft(title: &str) -> BookDraft {
        BookDraft {
            title: title.to_string(),
            author: "Author".to_string(),
            category: "Category".to_string(),
            description: String::new(),
            status: BookStatus::Active,
        }
    }

    #[tokio::test]
    async fn test_load_empty_store_is_empty_catalog() {
        let catalog = Catalog::load(MemoryStore::new()).await.unwrap();
        assert!(catalog.list().is_empty());
    }

    #[tokio::test]
    async fn test_create_assigns_max_plus_one() {
        let mut catalog = Catalog::load(MemoryStore::new()).await.unwrap();
        let a = catalog.create(draft("A"), None, None).await.unwrap();
        let b = catalog.create(draft("B"), None, None).await.unwrap();
        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);

        // Deleting the highest id frees it for reuse; ids stay unique
        catalog.delete(2).await.unwrap();
        let c = catalog.create(draft("C"), None, None).await.unwrap();
        assert_eq!(c.id, 2);
    }

    #[tokio::test]
    async fn test_mutations_are_durable_immediately() {
        let store = MemoryStore::new();
        let mut catalog = Catalog::load(store.clone()).await.unwrap();
        catalog.create(draft("A"), None, None).await.unwrap();

        // A second catalog loaded from the same store sees the write
        let reloaded = Catalog::load(store).await.unwrap();
        assert_eq!(reloaded.list().len(), 1);
        assert_eq!(reloaded.list()[0].title, "A");
    }

    #[tokio::test]
    async fn test_update_missing_id_is_not_found() {
        let mut catalog = Catalog::load(MemoryStore::new()).await.unwrap();
        let err = catalog
            .update(42, BookPatch::default(), None, None)
            .await
            .unwrap_err();
        assert!(matches!(err, ShelfError::NotFound(42)));
    }

    #[tokio::test]
    async fn test_update_keeps_references_without_new_upload() {
        let mut catalog = Catalog::load(MemoryStore::new()).await.unwrap();
        let pdf = Upload::new("doc.pdf", "application/pdf", b"%PDF".to_vec());
        let created = catalog.create(draft("A"), None, Some(pdf)).await.unwrap();
        assert!(created.pdf_url.starts_with("uploads/pdfs/pdf_"));

        let updated = catalog
            .update(created.id, BookPatch::default(), None, None)
            .await
            .unwrap();
        assert_eq!(updated.pdf_url, created.pdf_url);
    }

    #[tokio::test]
    async fn test_replacing_upload_orphans_old_blob() {
        let store = MemoryStore::new();
        let mut catalog = Catalog::load(store.clone()).await.unwrap();
        let created = catalog
            .create(
                draft("A"),
                Some(Upload::new("c.png", "image/png", b"one".to_vec())),
                None,
            )
            .await
            .unwrap();
        let old_ref = created.cover.clone();

        let updated = catalog
            .update(
                created.id,
                BookPatch::default(),
                Some(Upload::new("c.png", "image/png", b"two".to_vec())),
                None,
            )
            .await
            .unwrap();
        assert_ne!(updated.cover, old_ref);

        // The old blob is still there until a sweep
        assert!(store.exists(&old_ref).await.unwrap());
        let removed = catalog.sweep_orphans().await.unwrap();
        assert_eq!(removed, vec![old_ref.clone()]);
        assert!(!store.exists(&old_ref).await.unwrap());
        assert!(store.exists(&updated.cover).await.unwrap());
    }

    #[tokio::test]
    async fn test_delete_leaves_blobs_until_sweep() {
        let store = MemoryStore::new();
        let mut catalog = Catalog::load(store.clone()).await.unwrap();
        let created = catalog
            .create(
                draft("A"),
                None,
                Some(Upload::new("d.pdf", "application/pdf", b"%PDF".to_vec())),
            )
            .await
            .unwrap();

        catalog.delete(created.id).await.unwrap();
        assert!(store.exists(&created.pdf_url).await.unwrap());

        let removed = catalog.sweep_orphans().await.unwrap();
        assert_eq!(removed, vec![created.pdf_url]);
    }

    #[tokio::test]
    async fn test_resolve_blob_round_trip() {
        let mut catalog = Catalog::load(MemoryStore::new()).await.unwrap();
        let created = catalog
            .create(
                draft("A"),
                Some(Upload::new("c.png", "image/png", b"pixels".to_vec())),
                None,
            )
            .await
            .unwrap();

        let blob = catalog.resolve_blob(&created.cover).await.unwrap();
        assert_eq!(blob.mime_type, "image/png");
        assert_eq!(blob.bytes, b"pixels");
    }

    #[tokio::test]
    async fn test_resolve_blob_absent_is_none() {
        let catalog = Catalog::load(MemoryStore::new()).await.unwrap();
        assert!(catalog.resolve_blob("uploads/pdfs/never_written").await.is_none());
        assert!(catalog.resolve_blob("").await.is_none());
    }

    #[tokio::test]
    async fn test_resolve_blob_undecodable_is_none() {
        let store = MemoryStore::new();
        store
            .write("uploads/covers/bad", "not a data url".to_string())
            .await
            .unwrap();
        let catalog = Catalog::load(store).await.unwrap();
        assert!(catalog.resolve_blob("uploads/covers/bad").await.is_none());
    }

    #[tokio::test]
    async fn test_corrupt_catalog_entry_is_an_error() {
        let store = MemoryStore::new();
        store.write(CATALOG_KEY, "{not json".to_string()).await.unwrap();
        assert!(Catalog::load(store).await.is_err());
    }
}
