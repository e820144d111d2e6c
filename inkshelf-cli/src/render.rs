//! Text-mode page renderer
//!
//! The shipped `PageRenderer` implementation: lopdf parses the document and
//! exposes the page tree, and a page "renders" as its extracted text. The
//! viewport is reported at US Letter size scaled by the zoom level; extracted
//! text carries no intrinsic geometry.

use async_trait::async_trait;
use inkshelf_core::{DocumentHandle, PageFrame, PageRenderer, RenderSurface, ViewerError};

const PAGE_WIDTH_PT: f32 = 612.0;
const PAGE_HEIGHT_PT: f32 = 792.0;

/// Renderer backed by lopdf text extraction
pub struct TextRenderer;

impl TextRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// A parsed PDF
#[derive(Debug)]
pub struct TextDocument {
    doc: lopdf::Document,
    pages: u32,
}

impl PageRenderer for TextRenderer {
    type Handle = TextDocument;

    fn parse(&self, bytes: &[u8]) -> Result<Self::Handle, ViewerError> {
        let doc = lopdf::Document::load_mem(bytes).map_err(|e| ViewerError::Parse(e.to_string()))?;
        let pages = doc.get_pages().len() as u32;
        if pages == 0 {
            return Err(ViewerError::Parse("document has no pages".to_string()));
        }
        Ok(TextDocument { doc, pages })
    }
}

#[async_trait]
impl DocumentHandle for TextDocument {
    fn page_count(&self) -> u32 {
        self.pages
    }

    async fn render_page(
        &self,
        page: u32,
        zoom: f32,
        surface: &mut dyn RenderSurface,
    ) -> Result<(), ViewerError> {
        let body = self
            .doc
            .extract_text(&[page])
            .map_err(|e| ViewerError::Render {
                page,
                reason: e.to_string(),
            })?;

        surface.paint(PageFrame {
            page,
            page_count: self.pages,
            zoom,
            width: PAGE_WIDTH_PT * zoom,
            height: PAGE_HEIGHT_PT * zoom,
            body,
        });
        Ok(())
    }
}
