//! Remove command implementation

use super::{present, require_admin};
use anyhow::Result;
use inkshelf_core::{Catalog, DirStore, Notice};
use tracing::info;

/// Hard-delete a record. Its blobs stay behind until a sweep.
pub async fn remove(store: DirStore, id: u64) -> Result<()> {
    require_admin(&store).await?;

    let mut catalog = Catalog::load(store).await?;
    catalog.delete(id).await?;
    info!(id, "book removed");

    present(&Notice::success("Book deleted successfully"));
    Ok(())
}
