use std::path::Path;

use crate::core::document::errors::DocumentError;
use crate::core::document::ports::document::DocumentPort;

pub trait DocumentFactoryPort {
    fn open(&self, path: &Path) -> Result<Box<dyn DocumentPort>, DocumentError>;
}
