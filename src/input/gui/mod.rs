//! Windowed viewer: winit for the window, pixels for the page framebuffer
//! and egui for the toolbar and dialogs.

pub mod app;
pub mod commands;

pub use commands::run_gui::RunGuiCommand;
