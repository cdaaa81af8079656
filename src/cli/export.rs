use std::path::PathBuf;

use clap::Parser;
use prd::{Config, ExportFormat, Manager};
use tracing::instrument;

#[derive(Debug, Parser)]
#[command(about = "Serialize every record as JSON or YAML")]
pub struct Export {
    /// Output format (json, yaml). Defaults to the configured export format.
    #[arg(long)]
    format: Option<ExportFormat>,

    /// Write the export to this file instead of standard output
    #[arg(long, value_name = "FILE")]
    path: Option<PathBuf>,
}

impl Export {
    #[instrument(level = "debug", skip_all)]
    pub fn run(self, manager: &Manager, config: &Config) -> anyhow::Result<()> {
        let format = self.format.unwrap_or(config.export_format);
        let text = manager.export_as(format, self.path.as_deref())?;

        match self.path {
            Some(path) => println!(
                "Exported {} PRDs as {format} to {}",
                manager.len(),
                path.display()
            ),
            None => println!("{}", text.trim_end()),
        }
        Ok(())
    }
}
