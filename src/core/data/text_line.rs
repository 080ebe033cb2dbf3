use crate::core::data::page_rect::PageRect;

/// One extracted character and its horizontal extent in page space.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Glyph {
    pub ch: char,
    pub x0: f32,
    pub x1: f32,
}

/// A line of extracted text as reported by the PDF library.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TextLine {
    pub bounds: PageRect,
    pub glyphs: Vec<Glyph>,
}
