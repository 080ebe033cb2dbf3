mod controller;

pub use controller::{ExportController, ExportRequest};
