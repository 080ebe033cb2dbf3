pub mod gui_app;
pub mod key_bindings;
pub mod page_number_input;
pub mod ports;
