use std::path::PathBuf;

use thiserror::Error;

use crate::core::data::pixel_buffer::PixelBufferError;

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("can't load document '{}': {reason}", path.display())]
    Open { path: PathBuf, reason: String },

    #[error("document '{}' has no pages", path.display())]
    Empty { path: PathBuf },

    #[error("page {page} out of range, document has {page_count} pages")]
    PageOutOfRange { page: usize, page_count: usize },

    #[error("no page loaded")]
    NoPageLoaded,

    #[error("page has an empty bounding box")]
    EmptyPage,

    #[error("PDF library: {0}")]
    Library(String),

    #[error("bitmap: {0}")]
    Bitmap(#[from] PixelBufferError),
}
