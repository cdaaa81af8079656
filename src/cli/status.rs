use std::path::PathBuf;

use clap::Parser;
use prd::{Manager, Status};
use tracing::instrument;

#[derive(Debug, Parser)]
#[command(about = "Move a record to a new lifecycle status")]
pub struct SetStatus {
    /// The ID of the record to update
    id: String,

    /// The new status (Draft, In Review, Approved, Implemented, Archived)
    #[arg(value_parser = super::parse_status)]
    status: Status,

    /// Write all records to this file afterwards
    #[arg(long, value_name = "FILE")]
    save: Option<PathBuf>,
}

impl SetStatus {
    #[instrument(level = "debug", skip_all, fields(id = %self.id))]
    pub fn run(self, mut manager: Manager) -> anyhow::Result<()> {
        if !manager.update_status(&self.id, self.status) {
            anyhow::bail!("PRD with ID {} not found", self.id);
        }
        println!("{} status updated to: {}", self.id, self.status);

        if let Some(path) = self.save {
            super::save(&manager, &path)?;
        }
        Ok(())
    }
}
