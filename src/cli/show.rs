use clap::Parser;
use prd::Manager;
use tracing::instrument;

use super::{
    OutputFormat,
    terminal::{Colorize, status_label},
};

#[derive(Debug, Parser)]
#[command(about = "Display every field of a record")]
pub struct Show {
    /// The ID of the record to display
    id: String,

    /// Output format
    #[arg(long, value_enum, default_value_t)]
    output: OutputFormat,
}

impl Show {
    #[instrument(level = "debug", skip(self), fields(id = %self.id))]
    pub fn run(self, manager: &Manager) -> anyhow::Result<()> {
        let Some(record) = manager.find_by_id(&self.id) else {
            anyhow::bail!("PRD with ID {} not found", self.id);
        };

        match self.output {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(record)?),
            OutputFormat::Table => {
                println!("{} {}", record.id().info(), record.title());
                println!("{}", "─".repeat(40).dim());
                println!("Status:        {}", status_label(record.status(), 0));
                println!("Category:      {}", record.category());
                println!("Author:        {}", record.author());
                println!("Priority:      {}", record.priority());
                println!("Effort:        {}", record.estimated_effort());
                println!("Version:       {}", record.version());
                println!("Created:       {}", record.created_date().to_rfc3339());
                println!("Last modified: {}", record.last_modified().to_rfc3339());
                if !record.description().is_empty() {
                    println!();
                    println!("{}", record.description());
                }
            }
        }
        Ok(())
    }
}
