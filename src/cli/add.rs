use std::path::PathBuf;

use clap::Parser;
use prd::{Category, Config, Manager, NewRecord};
use tracing::instrument;

#[derive(Debug, Parser)]
#[command(about = "Add a new record in Draft status")]
pub struct Add {
    /// Title of the document
    #[arg(long)]
    title: String,

    /// Detailed description
    #[arg(long, default_value = "")]
    description: String,

    /// Author name
    #[arg(long)]
    author: String,

    /// Category (Feature, Bug Fix, Enhancement, New Product, Maintenance)
    #[arg(long, value_parser = super::parse_category)]
    category: Category,

    /// Priority, 1 (high) to 3 (low). Defaults to the configured priority.
    #[arg(long)]
    priority: Option<u8>,

    /// Estimated effort in points or hours. Defaults to the configured effort.
    #[arg(long)]
    effort: Option<u32>,

    /// Write all records to this file afterwards
    #[arg(long, value_name = "FILE")]
    save: Option<PathBuf>,
}

impl Add {
    #[instrument(level = "debug", skip_all)]
    pub fn run(self, mut manager: Manager, config: &Config) -> anyhow::Result<()> {
        let record = NewRecord::new(self.title, self.description, self.author, self.category)
            .with_priority(self.priority.unwrap_or_else(|| config.default_priority()))
            .with_effort(self.effort.unwrap_or_else(|| config.default_effort()));

        let id = manager.add(record);
        println!("{id}");

        if let Some(path) = self.save {
            super::save(&manager, &path)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use prd::{ExportFormat, Status};
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn add_uses_configured_defaults_and_saves() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("prds.json");
        let mut config = Config::default();
        config.set_default_priority(2);
        config.set_default_effort(5);

        let add = Add {
            title: "Audit Log".to_string(),
            description: "Record every admin action".to_string(),
            author: "Security Team".to_string(),
            category: Category::Feature,
            priority: None,
            effort: None,
            save: Some(path.clone()),
        };
        add.run(Manager::new(), &config).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let manager = Manager::import(&text, ExportFormat::Json).unwrap();
        let [record] = manager.records() else {
            panic!("expected exactly one record");
        };
        assert_eq!(record.title(), "Audit Log");
        assert_eq!(record.priority(), 2);
        assert_eq!(record.estimated_effort(), 5);
        assert_eq!(record.status(), Status::Draft);
    }
}
