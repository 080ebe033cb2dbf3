use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;

use crate::controllers::export::ExportRequest;
use crate::core::data::rotation::Rotation;

fn parse_rotation(value: &str) -> Result<Rotation, String> {
    let degrees: i32 = value
        .parse()
        .map_err(|_| format!("`{value}` is not a whole number of degrees"))?;

    Rotation::from_degrees(degrees).map_err(|err| err.to_string())
}

fn parse_page(value: &str) -> Result<usize, String> {
    match value.parse::<usize>() {
        Ok(page) if page >= 1 => Ok(page),
        _ => Err(format!("`{value}` is not a page number (pages start at 1)")),
    }
}

/// View a PDF document.
#[derive(Debug, Clone, Parser)]
#[command(name = "pdf_viewer", version)]
pub struct ViewerOptions {
    /// Document to open
    pub file: Option<PathBuf>,

    /// Page to show first, starting at 1
    #[arg(short, long, default_value = "1", value_parser = parse_page)]
    pub page: usize,

    /// Clockwise rotation in degrees (multiples of 90)
    #[arg(short, long, default_value = "0", value_parser = parse_rotation, allow_negative_numbers = true)]
    pub rotate: Rotation,

    /// Show the page with inverted colours
    #[arg(short, long)]
    pub invert: bool,

    /// Highlight this text on the first page shown
    #[arg(short, long)]
    pub search: Option<String>,

    /// Render to a PPM file instead of opening a window
    #[arg(long, value_name = "OUT.ppm")]
    pub export: Option<PathBuf>,

    /// Export width in pixels
    #[arg(long, default_value_t = 800, value_parser = clap::value_parser!(u32).range(1..))]
    pub width: u32,

    /// Export height in pixels
    #[arg(long, default_value_t = 1000, value_parser = clap::value_parser!(u32).range(1..))]
    pub height: u32,

    /// off, error, warn, info, debug or trace
    #[arg(long, default_value = "warn")]
    pub log_level: LevelFilter,

    /// Write the log here instead of stderr
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl ViewerOptions {
    /// The zero-based page to start on.
    #[must_use]
    pub fn page_index(&self) -> usize {
        self.page - 1
    }

    /// Builds the headless render described by `--export`, if one was asked
    /// for and a document was given.
    #[must_use]
    pub fn export_request(&self) -> Option<ExportRequest> {
        self.export.as_ref()?;

        Some(ExportRequest {
            document: self.file.clone()?,
            page: self.page_index(),
            rotation: self.rotate,
            inverted: self.invert,
            search: self.search.clone(),
            width: self.width,
            height: self.height,
        })
    }
}
