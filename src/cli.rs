use std::path::{Path, PathBuf};

mod add;
mod demo;
mod export;
mod list;
mod show;
mod stats;
mod status;
mod terminal;

use add::Add;
use anyhow::Context;
use clap::ArgAction;
use demo::Demo;
use export::Export;
use list::{List, Search};
use prd::{Category, Config, ExportFormat, Manager, Status};
use show::Show;
use stats::Stats;
use status::SetStatus;
use tracing::instrument;

/// Parse a status from its display name, ignoring case.
fn parse_status(s: &str) -> Result<Status, String> {
    s.parse().map_err(|e| format!("{e}"))
}

/// Parse a category from its display name, ignoring case.
fn parse_category(s: &str) -> Result<Category, String> {
    s.parse().map_err(|e| format!("{e}"))
}

#[derive(Debug, clap::Parser)]
#[command(version, about)]
pub struct Cli {
    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// The path to the configuration file
    #[arg(short, long, default_value = "prd.toml", global = true)]
    config: PathBuf,

    /// Load records from a previous export instead of the sample data
    #[arg(short, long, global = true)]
    input: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        Self::setup_logging(self.verbose);

        let config = load_config(&self.config);
        let manager = open_manager(self.input.as_deref(), &config)?;

        self.command
            .unwrap_or_else(|| Command::Stats(Stats::default()))
            .run(manager, &config)
    }

    fn setup_logging(verbosity: u8) {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let level = match verbosity {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        };

        let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into());

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_target(false)
            .with_thread_names(false)
            .with_line_number(false)
            .with_writer(std::io::stderr);

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .init();
    }
}

#[derive(Debug, clap::Parser)]
pub enum Command {
    /// Show summary statistics (default)
    Stats(Stats),

    /// List records, optionally filtered
    List(List),

    /// Search titles and descriptions
    Search(Search),

    /// Show a single record
    Show(Show),

    /// Add a new record
    Add(Add),

    /// Change the status of a record
    SetStatus(SetStatus),

    /// Export all records as JSON or YAML
    Export(Export),

    /// Run the demonstration sequence
    ///
    /// Prints statistics, searches for 'login' and moves the first record
    /// into review.
    Demo,
}

impl Command {
    fn run(self, manager: Manager, config: &Config) -> anyhow::Result<()> {
        match self {
            Self::Stats(command) => command.run(&manager)?,
            Self::List(command) => command.run(&manager)?,
            Self::Search(command) => command.run(&manager)?,
            Self::Show(command) => command.run(&manager)?,
            Self::Add(command) => command.run(manager, config)?,
            Self::SetStatus(command) => command.run(manager)?,
            Self::Export(command) => command.run(&manager, config)?,
            Self::Demo => Demo::run(manager),
        }
        Ok(())
    }
}

/// Output formats shared by the read-only commands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
enum OutputFormat {
    #[default]
    Table,
    Json,
}

fn load_config(path: &Path) -> Config {
    if !path.exists() {
        tracing::debug!("No config file at {}, using defaults", path.display());
        return Config::default();
    }
    Config::load(path).unwrap_or_else(|e| {
        tracing::debug!("Failed to load config: {e}");
        Config::default()
    })
}

#[instrument(level = "debug", skip(config))]
fn open_manager(input: Option<&Path>, config: &Config) -> anyhow::Result<Manager> {
    match input {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            Manager::import(&text, ExportFormat::from_path(path))
                .with_context(|| format!("Failed to load records from {}", path.display()))
        }
        None if config.seed_samples => Ok(Manager::with_sample_records()),
        None => Ok(Manager::new()),
    }
}

/// Writes every record to `path`, picking the format from its extension.
fn save(manager: &Manager, path: &Path) -> anyhow::Result<()> {
    manager.export_as(ExportFormat::from_path(path), Some(path))?;
    Ok(())
}
