use std::path::{Path, PathBuf};

use log::{debug, error, info, warn};

use crate::controllers::viewer::data::frame_data::FrameData;
use crate::controllers::viewer::errors::ViewerError;
use crate::controllers::viewer::state::{RenderKey, ViewState};
use crate::core::actions::compose_frame::compose_frame;
use crate::core::actions::draw_rect_outline::draw_rect_outline;
use crate::core::actions::fit_scale::fit_scale;
use crate::core::actions::invert_pixel_buffer::invert_pixel_buffer;
use crate::core::actions::rotate_pixel_buffer::rotate_pixel_buffer;
use crate::core::actions::search_text::{MAX_SEARCH_HITS, search_text};
use crate::core::data::colour::Colour;
use crate::core::data::page_layout::PageLayout;
use crate::core::data::page_rect::PageRect;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::rotation::Rotation;
use crate::core::document::ports::document::DocumentPort;
use crate::core::document::ports::document_factory::DocumentFactoryPort;

const HIGHLIGHT_THICKNESS: u32 = 2;

struct OpenDocument {
    path: PathBuf,
    handle: Box<dyn DocumentPort>,
}

struct CachedFrame {
    key: RenderKey,
    frame: FrameData,
}

pub struct ViewerController<F: DocumentFactoryPort> {
    factory: F,
    document: Option<OpenDocument>,
    state: ViewState,
    frame: Option<CachedFrame>,
    /// View whose last draw failed; cleared by the next successful draw.
    failed: Option<RenderKey>,
}

impl<F: DocumentFactoryPort> ViewerController<F> {
    pub fn new(factory: F) -> Self {
        Self {
            factory,
            document: None,
            state: ViewState::default(),
            frame: None,
            failed: None,
        }
    }

    /// Opens `path` and shows its first page.
    ///
    /// On failure the currently open document, if any, stays open.
    pub fn open(&mut self, path: impl AsRef<Path>) -> Result<(), ViewerError> {
        let path = path.as_ref();
        let mut handle = self.factory.open(path)?;
        handle.load_page(0)?;

        self.close();
        info!("Showing {:?} ({} pages)", path, handle.page_count());

        self.document = Some(OpenDocument {
            path: path.to_path_buf(),
            handle,
        });
        self.state.reset_for_document();

        Ok(())
    }

    pub fn close(&mut self) {
        self.frame = None;

        if let Some(document) = self.document.take() {
            debug!("Closing {:?}", document.path);
            drop(document);
            self.state.reset_for_document();
        }
    }

    #[must_use]
    pub fn has_document(&self) -> bool {
        self.document.is_some()
    }

    #[must_use]
    pub fn document_path(&self) -> Option<&Path> {
        self.document.as_ref().map(|document| document.path.as_path())
    }

    /// Zero while no document is open.
    #[must_use]
    pub fn page_count(&self) -> usize {
        self.document
            .as_ref()
            .map_or(0, |document| document.handle.page_count())
    }

    /// Zero-based index of the shown page.
    #[must_use]
    pub fn current_page(&self) -> Option<usize> {
        self.document.as_ref().map(|_| self.state.current_page)
    }

    #[must_use]
    pub fn rotation(&self) -> Rotation {
        self.state.rotation
    }

    #[must_use]
    pub fn is_inverted(&self) -> bool {
        self.state.inverted
    }

    #[must_use]
    pub fn search_hits(&self) -> &[PageRect] {
        self.state.hits()
    }

    #[must_use]
    pub fn last_search(&self) -> &str {
        self.state.needle()
    }

    /// Shows page `page`; an index outside the document is a no-op.
    ///
    /// Returns whether the shown page changed.
    pub fn goto_page(&mut self, page: usize) -> Result<bool, ViewerError> {
        let Some(document) = self.document.as_mut() else {
            return Ok(false);
        };

        let page_count = document.handle.page_count();
        if page >= page_count {
            warn!("Page {} out of max pages {}", page, page_count);
            return Ok(false);
        }

        if page == self.state.current_page && document.handle.loaded_page() == Some(page) {
            return Ok(false);
        }

        // The port releases the shown page before loading its replacement
        if let Err(err) = document.handle.load_page(page) {
            let shown = self.state.current_page;
            warn!("Cannot load page {}, staying on page {}", page + 1, shown + 1);

            if let Err(reload) = document.handle.load_page(shown) {
                error!("Cannot reload page {}: {}", shown + 1, reload);
                self.close();
            }

            return Err(err.into());
        }

        self.state.move_to_page(page);

        Ok(true)
    }

    fn step(&mut self, delta: isize) -> Result<bool, ViewerError> {
        if self.document.is_none() {
            return Ok(false);
        }

        let target = self.state.current_page as isize + delta;
        if target < 0 || target as usize >= self.page_count() {
            debug!("No next/prev page.");
            return Ok(false);
        }

        self.goto_page(target as usize)
    }

    pub fn next_page(&mut self) -> Result<bool, ViewerError> {
        self.step(1)
    }

    pub fn previous_page(&mut self) -> Result<bool, ViewerError> {
        self.step(-1)
    }

    pub fn first_page(&mut self) -> Result<bool, ViewerError> {
        self.goto_page(0)
    }

    pub fn last_page(&mut self) -> Result<bool, ViewerError> {
        match self.page_count() {
            0 => Ok(false),
            count => self.goto_page(count - 1),
        }
    }

    pub fn set_rotation(&mut self, rotation: Rotation) {
        self.state.rotation = rotation;
    }

    pub fn rotate_clockwise(&mut self) {
        self.state.rotation = self.state.rotation.rotate_clockwise();
    }

    pub fn rotate_counter_clockwise(&mut self) {
        self.state.rotation = self.state.rotation.rotate_counter_clockwise();
    }

    pub fn set_inverted(&mut self, inverted: bool) {
        self.state.inverted = inverted;
    }

    pub fn toggle_invert(&mut self) {
        self.state.inverted = !self.state.inverted;
    }

    /// Searches the shown page and highlights the hits.
    ///
    /// Returns the number of hits. A blank needle clears the highlights.
    pub fn search(&mut self, needle: &str) -> Result<usize, ViewerError> {
        let document = self.document.as_ref().ok_or(ViewerError::NoDocument)?;

        if needle.trim().is_empty() {
            self.state.clear_hits();
            return Ok(0);
        }

        let lines = document.handle.text_lines()?;
        let hits = search_text(&lines, needle, MAX_SEARCH_HITS);
        let count = hits.len();

        info!(
            "Search for {:?} on page {}: {} hits",
            needle,
            self.state.current_page + 1,
            count
        );
        self.state.set_hits(needle, hits);

        Ok(count)
    }

    pub fn clear_search(&mut self) {
        self.state.clear_hits();
    }

    /// Draws the current view into a `width` x `height` surface.
    ///
    /// The result is cached; asking again without any view change returns
    /// the same frame without touching the document.
    pub fn render_frame(&mut self, width: u32, height: u32) -> Result<&FrameData, ViewerError> {
        let surface = PixelRect::from_size(width, height)?;
        let key = self.state.render_key(self.document.is_some(), width, height);

        let cached = match self.frame.take() {
            Some(cached) if cached.key == key => cached,
            _ => match self.draw(surface) {
                Ok(frame) => CachedFrame { key, frame },
                Err(err) => {
                    self.failed = Some(key);
                    return Err(err);
                }
            },
        };

        self.failed = None;
        Ok(&self.frame.insert(cached).frame)
    }

    /// Whether drawing the current view at this size already failed.
    ///
    /// Any view change (page, rotation, inversion, search, size, document)
    /// makes the next draw worth trying again.
    #[must_use]
    pub fn render_failed(&self, width: u32, height: u32) -> bool {
        self.failed == Some(self.state.render_key(self.document.is_some(), width, height))
    }

    fn draw(&self, surface: PixelRect) -> Result<FrameData, ViewerError> {
        debug!("Redrawing canvas {}x{}", surface.width(), surface.height());

        let Some(document) = &self.document else {
            return Ok(FrameData {
                pixel_buffer: PixelBuffer::filled(surface, Colour::PLACEHOLDER),
                layout: None,
                page: None,
            });
        };

        let page_bounds = document.handle.page_bounds()?;
        let scale = fit_scale(page_bounds, surface.width(), surface.height(), self.state.rotation)?;
        let page = document.handle.render(scale)?;
        let (rendered_width, rendered_height) = (page.width(), page.height());

        let mut page = rotate_pixel_buffer(page, self.state.rotation);
        if self.state.inverted {
            invert_pixel_buffer(&mut page);
        }

        let (mut pixel_buffer, offset) = compose_frame(surface, Colour::BACKGROUND, &page);

        let layout = PageLayout {
            page_bounds,
            scale,
            rotation: self.state.rotation,
            rendered_width,
            rendered_height,
            offset,
            surface,
        };

        for hit in self.state.hits() {
            if let Some(rect) = layout.map_rect(*hit) {
                draw_rect_outline(&mut pixel_buffer, rect, Colour::HIGHLIGHT, HIGHLIGHT_THICKNESS);
            }
        }

        Ok(FrameData {
            pixel_buffer,
            layout: Some(layout),
            page: Some(self.state.current_page),
        })
    }
}
