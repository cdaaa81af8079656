use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// The lifecycle stage of a [`Record`](crate::Record).
///
/// Serializes as its display string, e.g. `"In Review"`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Status {
    /// Initial state of every new record.
    #[default]
    Draft,
    /// Under review by stakeholders.
    #[serde(rename = "In Review")]
    InReview,
    /// Approved for implementation.
    Approved,
    /// Built and shipped.
    Implemented,
    /// No longer active.
    Archived,
}

impl Status {
    /// Every status, in lifecycle order.
    pub const ALL: [Self; 5] = [
        Self::Draft,
        Self::InReview,
        Self::Approved,
        Self::Implemented,
        Self::Archived,
    ];

    /// The display string of the status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "Draft",
            Self::InReview => "In Review",
            Self::Approved => "Approved",
            Self::Implemented => "Implemented",
            Self::Archived => "Archived",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string does not name a [`Status`].
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error(
    "Unknown status '{0}': expected one of Draft, In Review, Approved, Implemented, Archived"
)]
pub struct UnknownStatus(String);

impl FromStr for Status {
    type Err = UnknownStatus;

    /// Parses a display string, ignoring case.
    ///
    /// `-` and `_` are accepted in place of spaces, so `in-review` and
    /// `IN_REVIEW` both parse as [`Status::InReview`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalise(s);
        Self::ALL
            .into_iter()
            .find(|status| normalise(status.as_str()) == wanted)
            .ok_or_else(|| UnknownStatus(s.to_string()))
    }
}

/// Lowercases and folds `-`/`_` separators into single spaces.
pub(crate) fn normalise(s: &str) -> String {
    s.trim()
        .split(|c: char| c.is_whitespace() || c == '-' || c == '_')
        .filter(|part| !part.is_empty())
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}
