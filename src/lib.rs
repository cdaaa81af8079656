//! In-memory Product Requirements Document management
//!
//! Records are kept in an ordered collection that can be filtered, searched,
//! summarised and exported as text.

pub mod domain;
pub use domain::{Category, Config, Manager, NewRecord, Record, Statistics, Status};

/// Text export and import of record collections.
pub mod storage;
pub use storage::{ExportError, ExportFormat, ImportError};
