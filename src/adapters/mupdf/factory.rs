use std::path::Path;

use log::info;

use crate::adapters::mupdf::document::MupdfDocument;
use crate::core::document::errors::DocumentError;
use crate::core::document::ports::document::DocumentPort;
use crate::core::document::ports::document_factory::DocumentFactoryPort;

#[derive(Debug, Default)]
pub struct MupdfDocumentFactory {}

impl MupdfDocumentFactory {
    pub fn new() -> Self {
        Self {}
    }
}

impl DocumentFactoryPort for MupdfDocumentFactory {
    fn open(&self, path: &Path) -> Result<Box<dyn DocumentPort>, DocumentError> {
        let document = MupdfDocument::open(path)?;
        info!("Opened {:?}, {} pages", path, document.page_count());

        Ok(Box::new(document))
    }
}
