use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{domain::record::priority, storage::ExportFormat};

/// Configuration for the command line tool.
///
/// This struct holds the defaults applied when a manager is opened and when
/// new records are added.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Versions", into = "Versions")]
pub struct Config {
    /// Whether a manager that is not loaded from a file starts with the
    /// fixture records.
    pub seed_samples: bool,

    /// Priority given to new records when none is specified.
    default_priority: u8,

    /// Effort given to new records when none is specified.
    default_effort: u32,

    /// The format used when exporting without an explicit format.
    pub export_format: ExportFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed_samples: true,
            default_priority: default_priority(),
            default_effort: 0,
            export_format: ExportFormat::default(),
        }
    }
}

impl Config {
    /// Loads the configuration from a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or if the TOML content is
    /// invalid.
    pub fn load(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file: {e}"))?;
        toml::from_str(&content).map_err(|e| format!("Failed to parse config file: {e}"))
    }

    /// Saves the configuration to a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be serialized to TOML or if
    /// the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), String> {
        let content =
            toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize config: {e}"))?;
        std::fs::write(path, content).map_err(|e| format!("Failed to write config file: {e}"))
    }

    /// Priority for new records.
    #[must_use]
    pub const fn default_priority(&self) -> u8 {
        self.default_priority
    }

    /// Effort estimate for new records.
    #[must_use]
    pub const fn default_effort(&self) -> u32 {
        self.default_effort
    }

    /// Sets the priority for new records.
    pub const fn set_default_priority(&mut self, value: u8) {
        self.default_priority = value;
    }

    /// Sets the effort estimate for new records.
    pub const fn set_default_effort(&mut self, value: u32) {
        self.default_effort = value;
    }
}

const fn default_priority() -> u8 {
    priority::LOW
}

const fn default_seed_samples() -> bool {
    true
}

/// The serialized versions of the configuration.
/// This allows for future changes to the configuration format and to the domain
/// type without breaking compatibility.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "_version")]
enum Versions {
    #[serde(rename = "1")]
    V1 {
        #[serde(default = "default_seed_samples")]
        seed_samples: bool,

        #[serde(default = "default_priority")]
        default_priority: u8,

        #[serde(default)]
        default_effort: u32,

        #[serde(default)]
        export_format: ExportFormat,
    },
}

impl From<Versions> for Config {
    fn from(versions: Versions) -> Self {
        match versions {
            Versions::V1 {
                seed_samples,
                default_priority,
                default_effort,
                export_format,
            } => Self {
                seed_samples,
                default_priority,
                default_effort,
                export_format,
            },
        }
    }
}

impl From<Config> for Versions {
    fn from(config: Config) -> Self {
        Self::V1 {
            seed_samples: config.seed_samples,
            default_priority: config.default_priority,
            default_effort: config.default_effort,
            export_format: config.export_format,
        }
    }
}
