//! CLI command definitions.

pub mod calendars;
pub mod events;

use clap::{Parser, Subcommand, ValueEnum};

/// CLI client for the UoA calendar API.
#[derive(Debug, Parser)]
#[command(name = "uoacal-client")]
#[command(about = "CLI client for the UoA calendar API", long_about = None)]
pub struct Cli {
    /// Server base URL.
    #[arg(long, env = "UOACAL_URL", default_value = crate::config::DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Bearer token sent with every request.
    #[arg(long, env = "UOACAL_API_TOKEN", hide_env_values = true)]
    pub api_token: String,

    /// Output format.
    #[arg(long, default_value = "pretty")]
    pub format: OutputFormat,

    /// Suppress non-essential output.
    #[arg(long)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Raw JSON output.
    Json,
    /// Human-readable output.
    #[default]
    Pretty,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Calendar management.
    Calendars(calendars::CalendarsCommand),
    /// Event management and range queries.
    Events(events::EventsCommand),
}
