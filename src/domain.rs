//! Domain models for product requirements management.
//!
//! This module contains the core domain types: records, their status and
//! category, the in-memory manager, and configuration.

/// Record domain model and construction defaults.
pub mod record;
pub use record::{NewRecord, Record, priority};

mod status;
pub use status::{Status, UnknownStatus};

mod category;
pub use category::{Category, UnknownCategory};

/// The in-memory collection of records.
pub mod manager;
pub use manager::Manager;

mod statistics;
pub use statistics::Statistics;

/// Fixture data for seeding a manager.
pub mod samples;

mod config;
pub use config::Config;
