//! MuPDF binding for the document port.

mod document;
mod factory;

pub use document::MupdfDocument;
pub use factory::MupdfDocumentFactory;
