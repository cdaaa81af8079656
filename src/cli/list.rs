use clap::Parser;
use prd::{Category, Manager, Record, Status};
use tracing::instrument;

use super::{
    OutputFormat,
    terminal::{Colorize, is_narrow, status_label},
};

/// Command arguments for `prd list`.
#[derive(Debug, Parser)]
#[command(about = "List records, optionally filtered by status, category or priority")]
pub struct List {
    /// Only records with this status.
    #[arg(long, value_parser = super::parse_status)]
    pub(crate) status: Option<Status>,

    /// Only records in this category.
    #[arg(long, value_parser = super::parse_category)]
    pub(crate) category: Option<Category>,

    /// Only records with this priority (1 = high, 3 = low).
    #[arg(long)]
    priority: Option<u8>,

    /// Output format (default: table).
    #[arg(long, value_enum, default_value_t)]
    output: OutputFormat,
}

impl List {
    #[instrument(level = "debug", skip_all)]
    pub fn run(self, manager: &Manager) -> anyhow::Result<()> {
        print_records(&self.select(manager), self.output)
    }

    /// The records matching every filter that was given, in collection order.
    fn select<'a>(&self, manager: &'a Manager) -> Vec<&'a Record> {
        let mut records = match self.status {
            Some(status) => manager.filter_by_status(status),
            None => manager.records().iter().collect(),
        };
        if let Some(category) = self.category {
            records.retain(|record| record.category() == category);
        }
        if let Some(priority) = self.priority {
            records.retain(|record| record.priority() == priority);
        }
        records
    }
}

/// Command arguments for `prd search`.
#[derive(Debug, Parser)]
#[command(about = "Find records whose title or description contains a term")]
pub struct Search {
    /// Case-insensitive substring to look for.
    term: String,

    /// Output format (default: table).
    #[arg(long, value_enum, default_value_t)]
    output: OutputFormat,
}

impl Search {
    #[instrument(level = "debug", skip_all, fields(term = %self.term))]
    pub fn run(self, manager: &Manager) -> anyhow::Result<()> {
        print_records(&manager.search(&self.term), self.output)
    }
}

pub fn print_records(records: &[&Record], output: OutputFormat) -> anyhow::Result<()> {
    match output {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(records)?),
        OutputFormat::Table if records.is_empty() => println!("No matching PRDs."),
        OutputFormat::Table if is_narrow() => {
            for record in records {
                println!("{} {}", record.id(), record.title());
                println!(
                    "  {} · P{} · {}",
                    status_label(record.status(), 0),
                    record.priority(),
                    record.category()
                );
            }
        }
        OutputFormat::Table => {
            println!(
                "{:<12} {:<12} {:<12} {:<4} {:<6} Title",
                "ID", "Status", "Category", "Pri", "Effort"
            );
            println!("{}", "─".repeat(64).dim());
            for record in records {
                println!(
                    "{:<12} {} {:<12} {:<4} {:<6} {}",
                    record.id(),
                    status_label(record.status(), 12),
                    record.category().as_str(),
                    record.priority(),
                    record.estimated_effort(),
                    record.title()
                );
            }
        }
    }
    Ok(())
}
