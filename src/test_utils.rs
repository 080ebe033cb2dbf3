//! In-memory document fakes for exercising the viewer without MuPDF.

use std::cell::RefCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use crate::core::data::colour::Colour;
use crate::core::data::page_rect::PageRect;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::text_line::{Glyph, TextLine};
use crate::core::document::errors::DocumentError;
use crate::core::document::ports::document::DocumentPort;
use crate::core::document::ports::document_factory::DocumentFactoryPort;

/// Calls made on fake documents, in order.
#[derive(Debug, Clone, PartialEq)]
pub enum DocumentEvent {
    Opened(PathBuf),
    Loaded { path: PathBuf, page: usize },
    Released { path: PathBuf, page: usize },
    Rendered { page: usize, scale: f32 },
    TextExtracted { page: usize },
    Closed(PathBuf),
}

pub type EventLog = Rc<RefCell<Vec<DocumentEvent>>>;

#[derive(Debug, Clone)]
pub struct FakePage {
    pub bounds: PageRect,
    pub colour: Colour,
    pub lines: Vec<TextLine>,
    pub fails_to_load: bool,
    pub fails_to_render: bool,
}

impl FakePage {
    pub fn new(width: f32, height: f32, colour: Colour) -> Self {
        Self {
            bounds: PageRect::new(0.0, 0.0, width, height),
            colour,
            lines: Vec::new(),
            fails_to_load: false,
            fails_to_render: false,
        }
    }

    /// A damaged page: loading it fails after the previous page was released.
    pub fn failing_to_load(mut self) -> Self {
        self.fails_to_load = true;
        self
    }

    /// Loads fine but cannot be rasterized.
    pub fn failing_to_render(mut self) -> Self {
        self.fails_to_render = true;
        self
    }

    pub fn with_line(mut self, text: &str, x: f32, y: f32) -> Self {
        self.lines.push(text_line(text, x, y));
        self
    }
}

/// A line whose glyphs are 10pt wide and 12pt tall, starting at `x`, `y`.
pub fn text_line(text: &str, x: f32, y: f32) -> TextLine {
    let glyphs: Vec<Glyph> = text
        .chars()
        .enumerate()
        .map(|(i, ch)| Glyph {
            ch,
            x0: x + i as f32 * 10.0,
            x1: x + (i + 1) as f32 * 10.0,
        })
        .collect();

    TextLine {
        bounds: PageRect::new(x, y, x + glyphs.len() as f32 * 10.0, y + 12.0),
        glyphs,
    }
}

pub struct FakeDocument {
    path: PathBuf,
    pages: Vec<FakePage>,
    loaded: Option<usize>,
    events: EventLog,
}

impl DocumentPort for FakeDocument {
    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn load_page(&mut self, index: usize) -> Result<(), DocumentError> {
        if index >= self.pages.len() {
            return Err(DocumentError::PageOutOfRange {
                page: index,
                page_count: self.pages.len(),
            });
        }

        if let Some(page) = self.loaded.take() {
            self.events.borrow_mut().push(DocumentEvent::Released {
                path: self.path.clone(),
                page,
            });
        }

        if self.pages[index].fails_to_load {
            return Err(DocumentError::Library(format!("page {index} is damaged")));
        }

        self.loaded = Some(index);
        self.events.borrow_mut().push(DocumentEvent::Loaded {
            path: self.path.clone(),
            page: index,
        });

        Ok(())
    }

    fn loaded_page(&self) -> Option<usize> {
        self.loaded
    }

    fn page_bounds(&self) -> Result<PageRect, DocumentError> {
        let page = self.loaded.ok_or(DocumentError::NoPageLoaded)?;
        Ok(self.pages[page].bounds)
    }

    fn render(&self, scale: f32) -> Result<PixelBuffer, DocumentError> {
        let index = self.loaded.ok_or(DocumentError::NoPageLoaded)?;
        let page = &self.pages[index];

        self.events
            .borrow_mut()
            .push(DocumentEvent::Rendered { page: index, scale });

        if page.fails_to_render {
            return Err(DocumentError::Library(format!("cannot rasterize page {index}")));
        }

        let width = (page.bounds.width() * scale).round().max(1.0) as u32;
        let height = (page.bounds.height() * scale).round().max(1.0) as u32;
        let pixel_rect = PixelRect::from_size(width, height).map_err(|_| DocumentError::EmptyPage)?;

        Ok(PixelBuffer::filled(pixel_rect, page.colour))
    }

    fn text_lines(&self) -> Result<Vec<TextLine>, DocumentError> {
        let index = self.loaded.ok_or(DocumentError::NoPageLoaded)?;

        self.events
            .borrow_mut()
            .push(DocumentEvent::TextExtracted { page: index });

        Ok(self.pages[index].lines.clone())
    }
}

impl Drop for FakeDocument {
    fn drop(&mut self) {
        if let Some(page) = self.loaded.take() {
            self.events.borrow_mut().push(DocumentEvent::Released {
                path: self.path.clone(),
                page,
            });
        }
        self.events
            .borrow_mut()
            .push(DocumentEvent::Closed(self.path.clone()));
    }
}

/// Serves fake documents by path; unknown paths fail like a broken file.
#[derive(Default)]
pub struct FakeDocumentFactory {
    documents: HashMap<PathBuf, Vec<FakePage>>,
    events: EventLog,
}

impl FakeDocumentFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_document(mut self, path: impl Into<PathBuf>, pages: Vec<FakePage>) -> Self {
        self.documents.insert(path.into(), pages);
        self
    }

    /// Shared handle to the call log, usable after the factory moved.
    pub fn events(&self) -> EventLog {
        Rc::clone(&self.events)
    }
}

impl DocumentFactoryPort for FakeDocumentFactory {
    fn open(&self, path: &Path) -> Result<Box<dyn DocumentPort>, DocumentError> {
        let pages = self.documents.get(path).ok_or_else(|| DocumentError::Open {
            path: path.to_path_buf(),
            reason: "no such fake document".to_string(),
        })?;

        if pages.is_empty() {
            return Err(DocumentError::Empty {
                path: path.to_path_buf(),
            });
        }

        self.events
            .borrow_mut()
            .push(DocumentEvent::Opened(path.to_path_buf()));

        Ok(Box::new(FakeDocument {
            path: path.to_path_buf(),
            pages: pages.clone(),
            loaded: None,
            events: Rc::clone(&self.events),
        }))
    }
}
