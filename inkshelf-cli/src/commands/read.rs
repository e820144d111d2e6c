//! Read command implementation
//!
//! Drives the viewer state machine from a small prompt loop, the terminal
//! stand-in for the viewer modal's buttons and keyboard shortcuts.

use super::present;
use crate::render::TextRenderer;
use anyhow::{bail, Result};
use inkshelf_core::{
    Catalog, DirStore, DocumentViewer, Notice, PageFrame, RenderSurface, ViewerState,
};
use std::io::{BufRead, Write};
use tracing::debug;

/// Paints page frames to stdout
struct TermSurface;

impl RenderSurface for TermSurface {
    fn paint(&mut self, frame: PageFrame) {
        println!();
        println!(
            "--- page {}/{} @ {:.1}x ({:.0}x{:.0}pt) ---",
            frame.page, frame.page_count, frame.zoom, frame.width, frame.height
        );
        println!("{}", frame.body.trim_end());
    }
}

/// Open a book's PDF and navigate it interactively
pub async fn read(store: DirStore, id: u64) -> Result<()> {
    let catalog = Catalog::load(store).await?;
    let Some(book) = catalog.get(id) else {
        bail!("book {} not found", id);
    };
    let Some(reference) = book.pdf_ref() else {
        present(&Notice::warning("No PDF available for this book"));
        return Ok(());
    };
    let reference = reference.to_string();
    debug!(%reference, "opening viewer");

    let mut viewer = DocumentViewer::new(TextRenderer::new());
    let mut surface = TermSurface;

    if let Err(e) = viewer.open(&catalog, &reference, &mut surface).await {
        present(&Notice::danger(format!("Error loading PDF: {}", e)));
        viewer.close();
        return Ok(());
    }

    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        if !matches!(viewer.state(), ViewerState::Ready { .. }) {
            break;
        }
        print!("[n]ext [p]rev [+]zoom in [-]zoom out [q]uit> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next() else { break };
        let outcome = match line?.trim() {
            "n" => viewer.next_page(&mut surface).await,
            "p" => viewer.prev_page(&mut surface).await,
            "+" => viewer.zoom_in(&mut surface).await,
            "-" => viewer.zoom_out(&mut surface).await,
            "q" => break,
            "" => Ok(()),
            other => {
                present(&Notice::info(format!("unknown command: {}", other)));
                Ok(())
            }
        };
        // A failed page render leaves the viewer usable; report and continue
        if let Err(e) = outcome {
            present(&Notice::warning(format!("Error rendering page: {}", e)));
        }
    }

    viewer.close();
    Ok(())
}
