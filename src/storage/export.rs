//! Text serialization of record collections.
//!
//! Records serialize with every field. Enums are written as their display
//! strings and timestamps as RFC 3339.

use std::{
    fmt, io,
    path::{Path, PathBuf},
    str::FromStr,
};

use serde::{Deserialize, Serialize};

use crate::Record;

/// The text format used for exports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Pretty-printed JSON, two-space indented.
    #[default]
    Json,
    /// YAML sequence of mappings.
    Yaml,
}

impl ExportFormat {
    /// Picks a format from a file extension.
    ///
    /// `.yaml` and `.yml` select YAML; anything else is JSON.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
                Self::Yaml
            }
            _ => Self::Json,
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => f.write_str("json"),
            Self::Yaml => f.write_str("yaml"),
        }
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            other => Err(format!("Unknown export format '{other}'")),
        }
    }
}

/// Errors that can occur when exporting records.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// The records could not be serialized as JSON.
    #[error("failed to serialize records as JSON")]
    Json(#[from] serde_json::Error),
    /// The records could not be serialized as YAML.
    #[error("failed to serialize records as YAML")]
    Yaml(#[from] serde_yaml::Error),
    /// The export file could not be written.
    #[error("failed to write export to {}", .path.display())]
    Write {
        /// Destination of the export.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },
}

/// Errors that can occur when reading an export back.
#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    /// The text is not a valid JSON export.
    #[error("failed to parse JSON export")]
    Json(#[from] serde_json::Error),
    /// The text is not a valid YAML export.
    #[error("failed to parse YAML export")]
    Yaml(#[from] serde_yaml::Error),
    /// Two records in the export share an identifier.
    #[error("duplicate record id '{0}'")]
    DuplicateId(String),
}

/// Serializes records to text.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_text(records: &[Record], format: ExportFormat) -> Result<String, ExportError> {
    let text = match format {
        ExportFormat::Json => serde_json::to_string_pretty(records)?,
        ExportFormat::Yaml => serde_yaml::to_string(records)?,
    };
    Ok(text)
}

/// Writes exported text to a file, replacing any existing content.
///
/// # Errors
///
/// Returns [`ExportError::Write`] if the file cannot be written.
pub fn write_text(path: &Path, text: &str) -> Result<(), ExportError> {
    std::fs::write(path, text).map_err(|source| ExportError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!("Records exported to {}", path.display());
    Ok(())
}

/// Parses text produced by [`to_text`].
///
/// # Errors
///
/// Returns an error if the text is not a valid export in the given format.
pub fn from_text(text: &str, format: ExportFormat) -> Result<Vec<Record>, ImportError> {
    let records = match format {
        ExportFormat::Json => serde_json::from_str(text)?,
        ExportFormat::Yaml => serde_yaml::from_str(text)?,
    };
    Ok(records)
}
