use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{Category, Status};

/// Conventional priority levels.
///
/// Priorities are plain integers and are not range checked.
pub mod priority {
    /// High priority.
    pub const HIGH: u8 = 1;
    /// Medium priority.
    pub const MEDIUM: u8 = 2;
    /// Low priority, and the default.
    pub const LOW: u8 = 3;
}

/// The version every new record starts at.
pub const DEFAULT_VERSION: &str = "1.0.0";

/// A Product Requirements Document and its metadata.
///
/// Records are created from a [`NewRecord`], which fills in identity and
/// timestamps. Only the status (and with it, the last-modified timestamp) can
/// change afterwards.
///
/// Deserialization goes through the same defaults as [`NewRecord`], so a
/// stored `last_modified` earlier than `created_date` is raised to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "StoredRecord")]
pub struct Record {
    title: String,
    description: String,
    author: String,
    category: Category,
    status: Status,
    id: String,
    created_date: DateTime<Utc>,
    last_modified: DateTime<Utc>,
    version: String,
    priority: u8,
    estimated_effort: u32,
}

impl Record {
    /// The unique identifier of the record.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The record's title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The record's description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Who wrote the record.
    #[must_use]
    pub fn author(&self) -> &str {
        &self.author
    }

    /// The kind of work described.
    #[must_use]
    pub const fn category(&self) -> Category {
        self.category
    }

    /// The current lifecycle stage.
    #[must_use]
    pub const fn status(&self) -> Status {
        self.status
    }

    /// Priority; 1 is high, 3 is low.
    #[must_use]
    pub const fn priority(&self) -> u8 {
        self.priority
    }

    /// Estimated effort, in points or hours.
    #[must_use]
    pub const fn estimated_effort(&self) -> u32 {
        self.estimated_effort
    }

    /// When the record was created.
    #[must_use]
    pub const fn created_date(&self) -> DateTime<Utc> {
        self.created_date
    }

    /// When the status last changed, or the creation time if it never has.
    #[must_use]
    pub const fn last_modified(&self) -> DateTime<Utc> {
        self.last_modified
    }

    /// The document version string.
    #[must_use]
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Sets the status and stamps the modification time.
    ///
    /// The timestamp never moves backwards, even if the clock does.
    pub(crate) fn set_status(&mut self, status: Status, now: DateTime<Utc>) {
        self.status = status;
        self.last_modified = now.max(self.last_modified);
    }
}

/// Generates an opaque record identifier such as `PRD-1a2b3c4d`.
#[must_use]
pub fn generate_id() -> String {
    let uuid = Uuid::new_v4().simple().to_string();
    format!("PRD-{}", &uuid[..8])
}

/// The arguments used to construct a [`Record`].
///
/// Only the descriptive fields are required. Everything else has a default,
/// applied when the record is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRecord {
    /// Title of the document.
    pub title: String,
    /// Detailed description.
    pub description: String,
    /// Author name.
    pub author: String,
    /// Category of work.
    pub category: Category,
    /// Priority level. Defaults to [`priority::LOW`].
    pub priority: u8,
    /// Effort estimate. Defaults to 0.
    pub estimated_effort: u32,
    /// Initial status. Defaults to [`Status::Draft`].
    pub status: Status,
    /// Version string. Defaults to [`DEFAULT_VERSION`].
    pub version: String,
    /// Identifier. Generated when absent.
    pub id: Option<String>,
    /// Creation time. The current time when absent.
    pub created_date: Option<DateTime<Utc>>,
    /// Modification time. Copied from the creation time when absent.
    pub last_modified: Option<DateTime<Utc>>,
}

impl NewRecord {
    /// Creates a new record description with default priority and effort.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        author: impl Into<String>,
        category: Category,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            author: author.into(),
            category,
            priority: priority::LOW,
            estimated_effort: 0,
            status: Status::Draft,
            version: DEFAULT_VERSION.to_string(),
            id: None,
            created_date: None,
            last_modified: None,
        }
    }

    /// Sets the priority.
    #[must_use]
    pub fn with_priority(mut self, priority: u8) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the effort estimate.
    #[must_use]
    pub fn with_effort(mut self, estimated_effort: u32) -> Self {
        self.estimated_effort = estimated_effort;
        self
    }

    /// Sets the initial status.
    #[must_use]
    pub fn with_status(mut self, status: Status) -> Self {
        self.status = status;
        self
    }

    /// Uses the given identifier instead of generating one.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Uses the given creation time instead of the current time.
    #[must_use]
    pub fn with_created_date(mut self, created_date: DateTime<Utc>) -> Self {
        self.created_date = Some(created_date);
        self
    }
}

impl From<NewRecord> for Record {
    fn from(new: NewRecord) -> Self {
        let NewRecord {
            title,
            description,
            author,
            category,
            priority,
            estimated_effort,
            status,
            version,
            id,
            created_date,
            last_modified,
        } = new;

        let id = id.unwrap_or_else(generate_id);
        let created_date = created_date.unwrap_or_else(Utc::now);
        let last_modified = last_modified.map_or(created_date, |t| t.max(created_date));

        Self {
            title,
            description,
            author,
            category,
            status,
            id,
            created_date,
            last_modified,
            version,
            priority,
            estimated_effort,
        }
    }
}

/// The serialized shape of a [`Record`].
#[derive(Debug, Deserialize)]
struct StoredRecord {
    title: String,
    description: String,
    author: String,
    category: Category,
    status: Status,
    id: String,
    created_date: DateTime<Utc>,
    last_modified: DateTime<Utc>,
    version: String,
    priority: u8,
    estimated_effort: u32,
}

impl From<StoredRecord> for Record {
    fn from(stored: StoredRecord) -> Self {
        let StoredRecord {
            title,
            description,
            author,
            category,
            status,
            id,
            created_date,
            last_modified,
            version,
            priority,
            estimated_effort,
        } = stored;

        Self::from(NewRecord {
            title,
            description,
            author,
            category,
            priority,
            estimated_effort,
            status,
            version,
            id: Some(id),
            created_date: Some(created_date),
            last_modified: Some(last_modified),
        })
    }
}
