//! Admin session gate
//!
//! A boolean flag in the key/value store, nothing more. The admin surface
//! checks `is_authorized` before running a mutation; what to do on "no"
//! (redirect, refuse, prompt) is the surrounding shell's business. This is
//! not a security boundary.

use crate::storage::{KeyStore, StorageResult};
use tracing::debug;

/// Key the admin flag lives under
pub const SESSION_KEY: &str = "session/admin";

/// The login gate for the admin surface
pub struct SessionGate<S: KeyStore> {
    store: S,
}

impl<S: KeyStore> SessionGate<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Set the admin flag
    pub async fn login(&self) -> StorageResult<()> {
        self.store.write(SESSION_KEY, "1".to_string()).await?;
        debug!("admin session opened");
        Ok(())
    }

    /// Clear the admin flag; harmless when not logged in
    pub async fn logout(&self) -> StorageResult<()> {
        match self.store.delete(SESSION_KEY).await {
            Ok(()) => {
                debug!("admin session closed");
                Ok(())
            }
            Err(crate::error::StorageError::NotFound(_)) => Ok(()),
            Err(e) => Err(e),
        }
    }

    /// Is the caller allowed to use the admin surface?
    pub async fn is_authorized(&self) -> StorageResult<bool> {
        self.store.exists(SESSION_KEY).await
    }
}
