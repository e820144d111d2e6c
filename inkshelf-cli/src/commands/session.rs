//! Login/logout command implementations

use super::present;
use anyhow::Result;
use inkshelf_core::{DirStore, Notice, SessionGate};

/// Open the admin session
pub async fn login(store: DirStore) -> Result<()> {
    let gate = SessionGate::new(store);
    gate.login().await?;
    present(&Notice::success("Admin session opened"));
    Ok(())
}

/// Close the admin session
pub async fn logout(store: DirStore) -> Result<()> {
    let gate = SessionGate::new(store);
    gate.logout().await?;
    present(&Notice::info("Admin session closed"));
    Ok(())
}
