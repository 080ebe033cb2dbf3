use thiserror::Error;

use crate::core::actions::fit_scale::FitScaleError;
use crate::core::data::pixel_rect::PixelRectError;
use crate::core::document::errors::DocumentError;

#[derive(Debug, Error)]
pub enum ViewerError {
    #[error("no document open")]
    NoDocument,

    #[error(transparent)]
    Document(#[from] DocumentError),

    #[error("layout: {0}")]
    Layout(#[from] FitScaleError),

    #[error("surface: {0}")]
    Surface(#[from] PixelRectError),
}
