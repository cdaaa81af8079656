use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::status::normalise;

/// The kind of work a [`Record`](crate::Record) describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    /// A new capability.
    Feature,
    /// A defect correction.
    #[serde(rename = "Bug Fix")]
    BugFix,
    /// An improvement to an existing capability.
    Enhancement,
    /// A new product line.
    #[serde(rename = "New Product")]
    NewProduct,
    /// Upkeep work.
    Maintenance,
}

impl Category {
    /// Every category.
    pub const ALL: [Self; 5] = [
        Self::Feature,
        Self::BugFix,
        Self::Enhancement,
        Self::NewProduct,
        Self::Maintenance,
    ];

    /// The display string of the category.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Feature => "Feature",
            Self::BugFix => "Bug Fix",
            Self::Enhancement => "Enhancement",
            Self::NewProduct => "New Product",
            Self::Maintenance => "Maintenance",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string does not name a [`Category`].
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error(
    "Unknown category '{0}': expected one of Feature, Bug Fix, Enhancement, New Product, Maintenance"
)]
pub struct UnknownCategory(String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalise(s);
        Self::ALL
            .into_iter()
            .find(|category| normalise(category.as_str()) == wanted)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_multi_word_categories() {
        assert_eq!("bug-fix".parse::<Category>().unwrap(), Category::BugFix);
        assert_eq!(
            "New Product".parse::<Category>().unwrap(),
            Category::NewProduct
        );
        assert_eq!(
            "  maintenance ".parse::<Category>().unwrap(),
            Category::Maintenance
        );
    }

    #[test]
    fn rejects_unknown_category() {
        assert!("Refactor".parse::<Category>().is_err());
        assert!("".parse::<Category>().is_err());
    }

    #[test]
    fn serializes_as_display_string() {
        let yaml = serde_yaml::to_string(&Category::BugFix).unwrap();
        assert_eq!(yaml.trim(), "Bug Fix");
    }
}
