use std::path::Path;

use log::debug;
use mupdf::text_page::TextBlockType;
use mupdf::{Colorspace, Document, Matrix, Page, TextPageFlags};

use crate::core::data::page_rect::PageRect;
use crate::core::data::pixel_buffer::{BYTES_PER_PIXEL, PixelBuffer};
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::text_line::{Glyph, TextLine};
use crate::core::document::errors::DocumentError;
use crate::core::document::ports::document::DocumentPort;

fn library(err: mupdf::error::Error) -> DocumentError {
    DocumentError::Library(err.to_string())
}

pub struct MupdfDocument {
    document: Document,
    page_count: usize,
    page: Option<(usize, Page)>,
}

impl MupdfDocument {
    pub fn open(path: &Path) -> Result<Self, DocumentError> {
        let document = Document::open(path.to_string_lossy().as_ref()).map_err(|err| DocumentError::Open {
            path: path.to_path_buf(),
            reason: err.to_string(),
        })?;

        let page_count = document.page_count().map_err(|err| DocumentError::Open {
            path: path.to_path_buf(),
            reason: err.to_string(),
        })?;

        if page_count <= 0 {
            return Err(DocumentError::Empty {
                path: path.to_path_buf(),
            });
        }

        Ok(Self {
            document,
            page_count: page_count as usize,
            page: None,
        })
    }

    fn page(&self) -> Result<&Page, DocumentError> {
        self.page
            .as_ref()
            .map(|(_, page)| page)
            .ok_or(DocumentError::NoPageLoaded)
    }
}

impl DocumentPort for MupdfDocument {
    fn page_count(&self) -> usize {
        self.page_count
    }

    fn load_page(&mut self, index: usize) -> Result<(), DocumentError> {
        if index >= self.page_count {
            return Err(DocumentError::PageOutOfRange {
                page: index,
                page_count: self.page_count,
            });
        }

        // Release the old page before loading its replacement.
        self.page = None;

        let page = self.document.load_page(index as i32).map_err(library)?;
        debug!("Loaded page {index}");
        self.page = Some((index, page));

        Ok(())
    }

    fn loaded_page(&self) -> Option<usize> {
        self.page.as_ref().map(|(index, _)| *index)
    }

    fn page_bounds(&self) -> Result<PageRect, DocumentError> {
        let bounds = self.page()?.bounds().map_err(library)?;

        debug!(
            "Page bounding box {}x{} - {}x{}",
            bounds.x0, bounds.y0, bounds.x1, bounds.y1
        );

        Ok(PageRect::new(bounds.x0, bounds.y0, bounds.x1, bounds.y1))
    }

    fn render(&self, scale: f32) -> Result<PixelBuffer, DocumentError> {
        let page = self.page()?;
        let rgb = Colorspace::device_rgb();
        let pixmap = page
            .to_pixmap(&Matrix::new_scale(scale, scale), &rgb, false, false)
            .map_err(library)?;

        pack_rgb_samples(
            pixmap.samples(),
            pixmap.width() as u32,
            pixmap.height() as u32,
            pixmap.stride() as usize,
            pixmap.n() as usize,
        )
    }

    fn text_lines(&self) -> Result<Vec<TextLine>, DocumentError> {
        let text_page = self
            .page()?
            .to_text_page(TextPageFlags::empty())
            .map_err(library)?;

        let mut lines = Vec::new();

        for block in text_page.blocks() {
            if block.r#type() != TextBlockType::Text {
                continue;
            }

            for line in block.lines() {
                let bbox = line.bounds();
                let chars: Vec<_> = line.chars().collect();
                let mut glyphs = Vec::with_capacity(chars.len());

                for (i, ch) in chars.iter().enumerate() {
                    let Some(c) = ch.char() else {
                        continue;
                    };

                    let x0 = ch.origin().x;
                    let x1 = chars
                        .get(i + 1)
                        .map_or(bbox.x1, |next| next.origin().x)
                        .max(x0);

                    glyphs.push(Glyph { ch: c, x0, x1 });
                }

                if !glyphs.is_empty() {
                    lines.push(TextLine {
                        bounds: PageRect::new(bbox.x0, bbox.y0, bbox.x1, bbox.y1),
                        glyphs,
                    });
                }
            }
        }

        Ok(lines)
    }
}

/// Repacks strided pixmap samples into a packed RGB buffer.
///
/// Pixmaps with more than three components (alpha, CMYK spot channels) keep
/// their first three; fewer than three is rejected.
pub(crate) fn pack_rgb_samples(
    samples: &[u8],
    width: u32,
    height: u32,
    stride: usize,
    components: usize,
) -> Result<PixelBuffer, DocumentError> {
    if components < BYTES_PER_PIXEL {
        return Err(DocumentError::Library(format!(
            "unsupported pixmap format: {components} channels"
        )));
    }

    let pixel_rect = PixelRect::from_size(width, height).map_err(|_| DocumentError::EmptyPage)?;
    let row_bytes = width as usize * components;

    if row_bytes > stride || samples.len() < stride * (height as usize - 1) + row_bytes {
        return Err(DocumentError::Library("pixmap buffer size mismatch".to_string()));
    }

    let mut packed = Vec::with_capacity(width as usize * height as usize * BYTES_PER_PIXEL);

    for row in samples.chunks(stride).take(height as usize) {
        let row = &row[..row_bytes];
        if components == BYTES_PER_PIXEL {
            packed.extend_from_slice(row);
        } else {
            for pixel in row.chunks_exact(components) {
                packed.extend_from_slice(&pixel[..BYTES_PER_PIXEL]);
            }
        }
    }

    Ok(PixelBuffer::from_data(pixel_rect, packed)?)
}
