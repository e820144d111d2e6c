//! The document viewer state machine
//!
//! A viewer instance moves between `Closed`, `Loading`, `Ready` and `Failed`.
//! The actual painting is behind the `PageRenderer`/`DocumentHandle` seam, so
//! the state machine owns only the page index and zoom level, both clamped.
//!
//! All transitions take `&mut self` and await their render before returning,
//! which serializes renders per viewer instance: a slow render cannot be
//! overtaken by a later navigation, and nothing can repaint after `close`
//! because closing drops the document handle.

use crate::catalog::Catalog;
use crate::dataurl::DecodedBlob;
use crate::error::ViewerError;
use crate::storage::KeyStore;
use async_trait::async_trait;
use tracing::debug;

/// Zoom level a freshly opened document starts at
pub const DEFAULT_ZOOM: f32 = 1.5;
/// Multiplier applied per zoom step
pub const ZOOM_STEP: f32 = 1.2;
pub const MIN_ZOOM: f32 = 0.5;
pub const MAX_ZOOM: f32 = 3.0;

/// One rendered page, handed to the drawing surface
#[derive(Debug, Clone, PartialEq)]
pub struct PageFrame {
    pub page: u32,
    pub page_count: u32,
    pub zoom: f32,
    /// Viewport size at the current zoom, in points
    pub width: f32,
    pub height: f32,
    /// Page content as the renderer produces it
    pub body: String,
}

/// A caller-provided drawing surface the viewer paints into
pub trait RenderSurface: Send {
    fn paint(&mut self, frame: PageFrame);
}

/// A parsed, navigable document
#[async_trait]
pub trait DocumentHandle: Send + Sync {
    /// Total number of pages; always at least 1 for a parsed document
    fn page_count(&self) -> u32;

    /// Paint one page at the given zoom into the surface
    async fn render_page(
        &self,
        page: u32,
        zoom: f32,
        surface: &mut dyn RenderSurface,
    ) -> Result<(), ViewerError>;
}

/// The seam to the external rendering library
pub trait PageRenderer {
    type Handle: DocumentHandle;

    /// Parse raw document bytes into a navigable handle
    fn parse(&self, bytes: &[u8]) -> Result<Self::Handle, ViewerError>;
}

/// Where the viewer currently is
#[derive(Debug, Clone, PartialEq)]
pub enum ViewerState {
    Closed,
    Loading,
    Ready { page: u32, zoom: f32 },
    Failed(String),
}

/// A single viewer instance
pub struct DocumentViewer<R: PageRenderer> {
    renderer: R,
    handle: Option<R::Handle>,
    state: ViewerState,
}

impl<R: PageRenderer> DocumentViewer<R> {
    pub fn new(renderer: R) -> Self {
        Self {
            renderer,
            handle: None,
            state: ViewerState::Closed,
        }
    }

    pub fn state(&self) -> &ViewerState {
        &self.state
    }

    /// Open a document by blob reference and render its first page
    ///
    /// An unresolvable reference or unparseable bytes land in `Failed` with
    /// no render attempted. A failed first render leaves the viewer `Ready`;
    /// navigation stays usable.
    pub async fn open<S: KeyStore>(
        &mut self,
        catalog: &Catalog<S>,
        reference: &str,
        surface: &mut dyn RenderSurface,
    ) -> Result<(), ViewerError> {
        self.handle = None;
        self.state = ViewerState::Loading;

        let DecodedBlob { bytes, .. } = match catalog.resolve_blob(reference).await {
            Some(blob) => blob,
            None => {
                self.state = ViewerState::Failed("not found".to_string());
                return Err(ViewerError::DocumentNotFound);
            }
        };

        let handle = match self.renderer.parse(&bytes) {
            Ok(handle) => handle,
            Err(e) => {
                self.state = ViewerState::Failed(e.to_string());
                return Err(e);
            }
        };

        debug!(pages = handle.page_count(), "document opened");
        self.handle = Some(handle);
        self.state = ViewerState::Ready {
            page: 1,
            zoom: DEFAULT_ZOOM,
        };
        self.render_current(surface).await
    }

    /// Advance one page, clamped at the last page
    pub async fn next_page(&mut self, surface: &mut dyn RenderSurface) -> Result<(), ViewerError> {
        self.transition(surface, |page, zoom, count| ((page + 1).min(count), zoom))
            .await
    }

    /// Go back one page, clamped at page 1
    pub async fn prev_page(&mut self, surface: &mut dyn RenderSurface) -> Result<(), ViewerError> {
        self.transition(surface, |page, zoom, _| (page.saturating_sub(1).max(1), zoom))
            .await
    }

    /// Zoom in one step, clamped at 3.0x
    pub async fn zoom_in(&mut self, surface: &mut dyn RenderSurface) -> Result<(), ViewerError> {
        self.transition(surface, |page, zoom, _| (page, (zoom * ZOOM_STEP).min(MAX_ZOOM)))
            .await
    }

    /// Zoom out one step, clamped at 0.5x
    pub async fn zoom_out(&mut self, surface: &mut dyn RenderSurface) -> Result<(), ViewerError> {
        self.transition(surface, |page, zoom, _| (page, (zoom / ZOOM_STEP).max(MIN_ZOOM)))
            .await
    }

    /// Dismiss the viewer from any state, dropping the document handle
    pub fn close(&mut self) {
        self.handle = None;
        self.state = ViewerState::Closed;
    }

    /// Apply a page/zoom adjustment and render the result
    ///
    /// The new state is committed only after the render succeeds, so a
    /// failing page leaves the previous page and zoom intact. Outside of
    /// `Ready` this is a no-op.
    async fn transition<F>(
        &mut self,
        surface: &mut dyn RenderSurface,
        adjust: F,
    ) -> Result<(), ViewerError>
    where
        F: FnOnce(u32, f32, u32) -> (u32, f32),
    {
        let (page, zoom) = match &self.state {
            ViewerState::Ready { page, zoom } => (*page, *zoom),
            _ => return Ok(()),
        };
        let Some(handle) = &self.handle else {
            return Ok(());
        };

        let (new_page, new_zoom) = adjust(page, zoom, handle.page_count());
        handle.render_page(new_page, new_zoom, surface).await?;
        self.state = ViewerState::Ready {
            page: new_page,
            zoom: new_zoom,
        };
        Ok(())
    }

    /// Render the page the state machine currently points at
    async fn render_current(&mut self, surface: &mut dyn RenderSurface) -> Result<(), ViewerError> {
        self.transition(surface, |page, zoom, _| (page, zoom)).await
    }
}
