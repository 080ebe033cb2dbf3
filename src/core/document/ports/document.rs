use crate::core::data::page_rect::PageRect;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::text_line::TextLine;
use crate::core::document::errors::DocumentError;

/// An open document with at most one loaded page.
///
/// Loading a page releases the previously loaded one first. Every page
/// operation acts on the loaded page and fails with
/// [`DocumentError::NoPageLoaded`] when there is none.
pub trait DocumentPort {
    fn page_count(&self) -> usize;

    fn load_page(&mut self, index: usize) -> Result<(), DocumentError>;

    fn loaded_page(&self) -> Option<usize>;

    /// Page size at 72 DPI.
    fn page_bounds(&self) -> Result<PageRect, DocumentError>;

    /// Rasterizes the loaded page to packed RGB at `scale` x 72 DPI.
    fn render(&self, scale: f32) -> Result<PixelBuffer, DocumentError>;

    /// Runs text extraction on the loaded page, coordinates in page space.
    fn text_lines(&self) -> Result<Vec<TextLine>, DocumentError>;
}
