//! Viewer controller: the dispatch table between UI actions and the
//! document port.
//!
//! Every toolbar button, key binding and textbox in the GUI ends up as one
//! call on [`ViewerController`]. The controller owns the open document, the
//! view state and the last composed frame.

mod controller;
pub mod data;
pub mod errors;
mod state;

pub use controller::ViewerController;
pub use data::frame_data::FrameData;
pub use errors::ViewerError;
