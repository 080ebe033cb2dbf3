//! Input adapters: the command line and the window.

pub mod cli;
#[cfg(feature = "gui")]
pub mod gui;
