//! Command line surface.

pub mod options;
