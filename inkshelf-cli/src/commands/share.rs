//! Share command implementation

use anyhow::{bail, Result};
use inkshelf_core::{Catalog, DirStore};

/// Print a shareable blurb and link for a book
pub async fn share(store: DirStore, id: u64) -> Result<()> {
    let catalog = Catalog::load(store).await?;
    let Some(book) = catalog.get(id) else {
        bail!("book {} not found", id);
    };

    println!("Check out \"{}\" by {}", book.title, book.author);
    println!("inkshelf://book/{}", book.id);
    Ok(())
}
