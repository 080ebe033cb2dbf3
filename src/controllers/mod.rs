pub mod export;
pub mod ports;
pub mod viewer;
