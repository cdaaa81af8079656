/// Serializing record collections to and from text.
pub mod export;

pub use export::{ExportError, ExportFormat, ImportError};
