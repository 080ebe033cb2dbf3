use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::pixel_buffer::PixelBuffer;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Writes frames as binary PPM (P6).
#[derive(Debug, Default)]
pub struct PpmFilePresenter {}

impl PpmFilePresenter {
    pub fn new() -> Self {
        Self {}
    }

    pub fn encode(buffer: &PixelBuffer, out: &mut impl Write) -> std::io::Result<()> {
        // P6: binary RGB, then width, height and max colour value
        writeln!(out, "P6")?;
        writeln!(out, "{} {}", buffer.width(), buffer.height())?;
        writeln!(out, "255")?;
        out.write_all(buffer.buffer())
    }
}

impl FilePresenterPort for PpmFilePresenter {
    fn present(&self, buffer: &PixelBuffer, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        let mut out = BufWriter::new(File::create(filepath)?);
        Self::encode(buffer, &mut out)?;
        out.flush()
    }
}
