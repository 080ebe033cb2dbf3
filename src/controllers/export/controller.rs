use std::path::{Path, PathBuf};
use std::time::Instant;

use log::info;

use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::controllers::viewer::{ViewerController, ViewerError};
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::rotation::Rotation;
use crate::core::document::errors::DocumentError;
use crate::core::document::ports::document_factory::DocumentFactoryPort;

/// One page of one document, drawn the way the viewer would show it.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportRequest {
    pub document: PathBuf,
    /// Zero-based.
    pub page: usize,
    pub rotation: Rotation,
    pub inverted: bool,
    pub search: Option<String>,
    pub width: u32,
    pub height: u32,
}

pub struct ExportController<F: DocumentFactoryPort, P: FilePresenterPort> {
    viewer: ViewerController<F>,
    presenter: P,
    buffer: Option<PixelBuffer>,
}

impl<F: DocumentFactoryPort, P: FilePresenterPort> ExportController<F, P> {
    pub fn new(factory: F, presenter: P) -> Self {
        Self {
            viewer: ViewerController::new(factory),
            presenter,
            buffer: None,
        }
    }

    /// Renders the requested page; returns the number of search hits.
    pub fn generate(&mut self, request: &ExportRequest) -> Result<usize, ViewerError> {
        self.viewer.open(&request.document)?;

        let page_count = self.viewer.page_count();
        if request.page >= page_count {
            return Err(DocumentError::PageOutOfRange {
                page: request.page,
                page_count,
            }
            .into());
        }
        self.viewer.goto_page(request.page)?;

        self.viewer.set_rotation(request.rotation);
        self.viewer.set_inverted(request.inverted);

        let hits = match &request.search {
            Some(needle) => self.viewer.search(needle)?,
            None => 0,
        };

        let start = Instant::now();
        let frame = self.viewer.render_frame(request.width, request.height)?;
        info!(
            "Rendered page {} of {:?} at {}x{} in {:?}",
            request.page + 1,
            request.document,
            request.width,
            request.height,
            start.elapsed()
        );

        self.buffer = Some(frame.pixel_buffer.clone());

        Ok(hits)
    }

    #[must_use]
    pub fn buffer(&self) -> Option<&PixelBuffer> {
        self.buffer.as_ref()
    }

    pub fn write(&self, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        if let Some(buffer) = &self.buffer {
            self.presenter.present(buffer, filepath)?
        }

        Ok(())
    }
}
