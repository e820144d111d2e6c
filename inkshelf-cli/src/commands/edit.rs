//! Edit command implementation

use super::{present, require_admin};
use anyhow::{Context, Result};
use inkshelf_core::{BookPatch, BookStatus, Catalog, DirStore, Notice, Upload};
use std::path::PathBuf;
use tracing::info;

/// Fields the edit form may resubmit; `None` keeps the current value
pub struct EditArgs {
    pub title: Option<String>,
    pub author: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub status: Option<BookStatus>,
    pub cover: Option<PathBuf>,
    pub pdf: Option<PathBuf>,
}

/// Update an existing record
pub async fn edit(store: DirStore, id: u64, args: EditArgs) -> Result<()> {
    require_admin(&store).await?;

    let cover = args
        .cover
        .map(|p| Upload::from_path(&p).with_context(|| format!("failed to read {}", p.display())))
        .transpose()?;
    let pdf = args
        .pdf
        .map(|p| Upload::from_path(&p).with_context(|| format!("failed to read {}", p.display())))
        .transpose()?;

    let patch = BookPatch {
        title: args.title,
        author: args.author,
        category: args.category,
        description: args.description,
        status: args.status,
    };

    let mut catalog = Catalog::load(store).await?;
    catalog.update(id, patch, cover, pdf).await?;
    info!(id, "book edited");

    present(&Notice::success("Book updated successfully"));
    Ok(())
}
