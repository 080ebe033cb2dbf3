pub mod adapters;
pub mod controllers;
pub mod core;
pub mod input;
pub mod logging;
pub mod presenters;
pub mod test_utils;

pub use adapters::mupdf::MupdfDocumentFactory;
pub use controllers::export::{ExportController, ExportRequest};
pub use controllers::ports::file_presenter::FilePresenterPort;
pub use controllers::viewer::{ViewerController, ViewerError};
pub use input::cli::options::ViewerOptions;
pub use presenters::file::ppm::PpmFilePresenter;

#[cfg(feature = "gui")]
pub use input::gui::RunGuiCommand;
#[cfg(feature = "gui")]
pub use presenters::pixels::factory::PixelsPresenterFactory;
