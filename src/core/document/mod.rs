//! Seam between the viewer and the PDF library.
//!
//! The viewer only talks to [`ports::DocumentPort`]; the MuPDF binding in
//! `adapters::mupdf` is one implementation, test fakes are another.

pub mod errors;
pub mod ports;
