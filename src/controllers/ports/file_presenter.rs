use std::io;
use std::path::Path;

use crate::core::data::pixel_buffer::PixelBuffer;

/// Writes a composed page frame to an image file.
pub trait FilePresenterPort {
    fn present(&self, frame: &PixelBuffer, filepath: impl AsRef<Path>) -> io::Result<()>;
}
