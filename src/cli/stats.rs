use clap::Parser;
use prd::{Manager, Statistics};
use tracing::instrument;

use super::{
    OutputFormat,
    terminal::{Colorize, is_narrow},
};

#[derive(Debug, Parser, Default)]
#[command(about = "Show record counts by status, category and priority")]
pub struct Stats {
    /// Output format (table, json)
    #[arg(long, value_enum, default_value_t)]
    output: OutputFormat,
}

impl Stats {
    #[instrument(level = "debug", skip_all)]
    pub fn run(self, manager: &Manager) -> anyhow::Result<()> {
        let statistics = manager.statistics();

        match self.output {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&statistics)?),
            OutputFormat::Table => {
                if statistics.total == 0 {
                    println!("No PRDs yet. Create one with 'prd add'.");
                } else {
                    output_table(&statistics);
                }
            }
        }
        Ok(())
    }
}

pub fn output_table(statistics: &Statistics) {
    let narrow = is_narrow();

    section("By status", narrow, statistics.by_status.iter());
    section("By category", narrow, statistics.by_category.iter());
    section(
        "By priority",
        narrow,
        statistics
            .by_priority
            .iter()
            .map(|(level, count)| (priority_name(*level), count)),
    );

    println!(
        "Total: {}   Average effort: {:.1}",
        statistics.total.to_string().info(),
        statistics.average_effort
    );
}

fn section<'a, K: std::fmt::Display>(
    heading: &str,
    narrow: bool,
    rows: impl Iterator<Item = (K, &'a usize)>,
) {
    println!("{heading}");
    println!("{}", "─".repeat(heading.chars().count()).dim());

    for (key, count) in rows {
        let count = if *count == 0 {
            count.to_string().dim()
        } else {
            count.to_string()
        };
        if narrow {
            println!("{key}: {count}");
        } else {
            println!("{:<14} {count}", key.to_string());
        }
    }
    println!();
}

fn priority_name(level: u8) -> String {
    match level {
        1 => "1 (High)".to_string(),
        2 => "2 (Medium)".to_string(),
        3 => "3 (Low)".to_string(),
        other => other.to_string(),
    }
}
