//! Add command implementation

use super::{present, require_admin};
use anyhow::{Context, Result};
use inkshelf_core::{BookDraft, BookStatus, Catalog, DirStore, Notice, Upload};
use std::path::PathBuf;
use tracing::info;

/// Everything the add form collects
pub struct AddArgs {
    pub title: String,
    pub author: String,
    pub category: String,
    pub description: String,
    pub status: BookStatus,
    pub cover: Option<PathBuf>,
    pub pdf: Option<PathBuf>,
}

/// Create a new catalog record, uploading cover/PDF files if given
pub async fn add(store: DirStore, args: AddArgs) -> Result<()> {
    require_admin(&store).await?;

    let cover = args
        .cover
        .map(|p| Upload::from_path(&p).with_context(|| format!("failed to read {}", p.display())))
        .transpose()?;
    let pdf = args
        .pdf
        .map(|p| Upload::from_path(&p).with_context(|| format!("failed to read {}", p.display())))
        .transpose()?;

    let draft = BookDraft {
        title: args.title,
        author: args.author,
        category: args.category,
        description: args.description,
        status: args.status,
    };

    let mut catalog = Catalog::load(store).await?;
    let book = catalog.create(draft, cover, pdf).await?;
    info!(id = book.id, title = %book.title, "book added");

    present(&Notice::success(format!(
        "Book added successfully (id {})",
        book.id
    )));
    Ok(())
}
