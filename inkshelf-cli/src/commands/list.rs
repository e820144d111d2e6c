//! List command implementation

use anyhow::Result;
use inkshelf_core::{Catalog, DirStore};
use tracing::debug;

/// Print the catalog as a table, one record per row
pub async fn list(store: DirStore) -> Result<()> {
    let catalog = Catalog::load(store).await?;
    debug!(count = catalog.list().len(), "catalog listed");

    if catalog.list().is_empty() {
        println!("Catalog is empty.");
        return Ok(());
    }

    println!("{:>4}  {:<30} {:<20} {:<15} {}", "ID", "TITLE", "AUTHOR", "CATEGORY", "STATUS");
    for book in catalog.list() {
        println!(
            "{:>4}  {:<30} {:<20} {:<15} {}",
            book.id, book.title, book.author, book.category, book.status
        );
    }

    Ok(())
}
