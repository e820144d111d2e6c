//! Info command implementation

use anyhow::{bail, Result};
use inkshelf_core::{Catalog, DirStore};

/// Display one record in detail
///
/// Blob references are resolved so the output says whether the stored cover
/// and PDF are actually present; a dangling reference shows as missing, the
/// same placeholder treatment the gallery gives it.
pub async fn info(store: DirStore, id: u64, json: bool) -> Result<()> {
    let catalog = Catalog::load(store).await?;
    let Some(book) = catalog.get(id) else {
        bail!("book {} not found", id);
    };

    if json {
        println!("{}", serde_json::to_string_pretty(book)?);
        return Ok(());
    }

    let cover = match book.cover_ref() {
        Some(r) => match catalog.resolve_blob(r).await {
            Some(blob) => format!("{} ({} bytes)", r, blob.bytes.len()),
            None => format!("{} (missing)", r),
        },
        None => "none".to_string(),
    };
    let pdf = match book.pdf_ref() {
        Some(r) => match catalog.resolve_blob(r).await {
            Some(blob) => format!("{} ({} bytes)", r, blob.bytes.len()),
            None => format!("{} (missing)", r),
        },
        None => "none".to_string(),
    };

    println!("Id:          {}", book.id);
    println!("Title:       {}", book.title);
    println!("Author:      {}", book.author);
    println!("Category:    {}", book.category);
    println!("Status:      {} ({})", book.status, book.status.severity());
    if book.description.is_empty() {
        println!("Description: No description available.");
    } else {
        println!("Description: {}", book.description);
    }
    println!("Cover:       {}", cover);
    println!("PDF:         {}", pdf);

    Ok(())
}
