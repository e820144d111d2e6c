//! Sweep command implementation

use super::{present, require_admin};
use anyhow::Result;
use inkshelf_core::{Catalog, DirStore, Notice};
use tracing::info;

/// Delete blobs no current record references
pub async fn sweep(store: DirStore) -> Result<()> {
    require_admin(&store).await?;

    let mut catalog = Catalog::load(store).await?;
    let removed = catalog.sweep_orphans().await?;
    info!(count = removed.len(), "sweep finished");

    if removed.is_empty() {
        present(&Notice::info("No orphaned blobs found"));
    } else {
        for key in &removed {
            println!("removed {}", key);
        }
        present(&Notice::success(format!(
            "Swept {} orphaned blob(s)",
            removed.len()
        )));
    }
    Ok(())
}
