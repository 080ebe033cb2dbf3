pub mod mupdf;
#[cfg(feature = "gui")]
pub mod pixel_format;
