//! Key/value storage layer
//!
//! The catalog persists everything (the record list, uploaded blobs, the
//! session flag) as string values under string keys. This module abstracts
//! that medium behind the `KeyStore` trait so the catalog, session gate, and
//! tests can share one contract.

use crate::error::StorageError;
use async_trait::async_trait;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, RwLock};

/// Result type for storage operations
pub type StorageResult<T> = std::result::Result<T, StorageError>;

/// Abstract string-valued key/value store
#[async_trait]
pub trait KeyStore: Send + Sync {
    /// Read the value at the given key
    async fn read(&self, key: &str) -> StorageResult<String>;

    /// Write a value, creating or replacing the key. Durable by return.
    async fn write(&self, key: &str, value: String) -> StorageResult<()>;

    /// Delete a key
    async fn delete(&self, key: &str) -> StorageResult<()>;

    /// List all keys starting with the given prefix
    async fn list(&self, prefix: &str) -> StorageResult<Vec<String>>;

    /// Check whether a key exists
    async fn exists(&self, key: &str) -> StorageResult<bool>;
}

/// Filesystem-backed store: one file per key under a root directory
#[derive(Debug, Clone)]
pub struct DirStore {
    root: PathBuf,
}

impl DirStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Resolve a key to a path, rejecting components that escape the root
    fn full_path(&self, key: &str) -> StorageResult<PathBuf> {
        use std::path::Component;

        let mut normalized = PathBuf::new();
        for component in std::path::Path::new(key).components() {
            match component {
                Component::Normal(c) => normalized.push(c),
                Component::CurDir => {}
                Component::ParentDir | Component::Prefix(_) | Component::RootDir => {
                    return Err(StorageError::InvalidKey(key.to_string()));
                }
            }
        }

        Ok(self.root.join(normalized))
    }

    /// Collect keys under `dir`, depth-first, relative to the root
    async fn collect_keys(
        &self,
        dir: PathBuf,
        rel: String,
        out: &mut Vec<String>,
    ) -> StorageResult<()> {
        let mut stack = vec![(dir, rel)];
        while let Some((dir, rel)) = stack.pop() {
            let mut read_dir = match tokio::fs::read_dir(&dir).await {
                Ok(rd) => rd,
                // A prefix that matches nothing on disk is an empty listing
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => continue,
                Err(e) => return Err(StorageError::Backend(e.to_string())),
            };

            while let Some(entry) = read_dir
                .next_entry()
                .await
                .map_err(|e| StorageError::Backend(e.to_string()))?
            {
                let Some(name) = entry.file_name().to_str().map(str::to_string) else {
                    continue;
                };
                let key = if rel.is_empty() {
                    name
                } else {
                    format!("{}/{}", rel, name)
                };
                let file_type = entry
                    .file_type()
                    .await
                    .map_err(|e| StorageError::Backend(e.to_string()))?;
                if file_type.is_dir() {
                    stack.push((entry.path(), key));
                } else {
                    out.push(key);
                }
            }
        }
        Ok(())
    }
}

#[async_trait]
impl KeyStore for DirStore {
    async fn read(&self, key: &str) -> StorageResult<String> {
        let path = self.full_path(key)?;
        match tokio::fs::read_to_string(path).await {
            Ok(value) => Ok(value),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(StorageError::NotFound(key.to_string()))
            }
            Err(e) => Err(StorageError::Backend(e.to_string())),
        }
    }

    async fn write(&self, key: &str, value: String) -> StorageResult<()> {
        let path = self.full_path(key)?;
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| StorageError::Backend(e.to_string()))?;
        }
        tokio::fs::write(path, value)
            .await
            .map_err(|e| StorageError::Backend(e.to_string()))
    }

    async fn delete(&self, key: &str) -> StorageResult<()> {
        let path = self.full_path(key)?;
        match tokio::fs::remove_file(path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(StorageError::NotFound(key.to_string()))
            }
            Err(e) => Err(StorageError::Backend(e.to_string())),
        }
    }

    async fn list(&self, prefix: &str) -> StorageResult<Vec<String>> {
        // Walk the whole tree and filter; key counts here are small
        let mut keys = Vec::new();
        self.collect_keys(self.root.clone(), String::new(), &mut keys)
            .await?;
        keys.retain(|k| k.starts_with(prefix));
        keys.sort();
        Ok(keys)
    }

    async fn exists(&self, key: &str) -> StorageResult<bool> {
        let path = self.full_path(key)?;
        tokio::fs::try_exists(path)
            .await
            .map_err(|e| StorageError::Backend(e.to_string()))
    }
}

/// In-memory store, the analog of a fresh browser profile
///
/// Clones share the same underlying map so the catalog and the session gate
/// can be handed the same store.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    data: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KeyStore for MemoryStore {
    async fn read(&self, key: &str) -> StorageResult<String> {
        self.data
            .read()
            .unwrap()
            .get(key)
            .cloned()
            .ok_or_else(|| StorageError::NotFound(key.to_string()))
    }

    async fn write(&self, key: &str, value: String) -> StorageResult<()> {
        self.data.write().unwrap().insert(key.to_string(), value);
        Ok(())
    }

    async fn delete(&self, key: &str) -> StorageResult<()> {
        self.data
            .write()
            .unwrap()
            .remove(key)
            .ok_or_else(|| StorageError::NotFound(key.to_string()))?;
        Ok(())
    }

    async fn list(&self, prefix: &str) -> StorageResult<Vec<String>> {
        let mut keys: Vec<String> = self
            .data
            .read()
            .unwrap()
            .keys()
            .filter(|k| k.starts_with(prefix))
            .cloned()
            .collect();
        keys.sort();
        Ok(keys)
    }

    async fn exists(&self, key: &str) -> StorageResult<bool> {
        Ok(self.data.read().unwrap().contains_key(key))
    }
}
