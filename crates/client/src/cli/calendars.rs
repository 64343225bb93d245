//! Calendar CLI commands.

use clap::{Parser, Subcommand};
use uoacal_core::calendar::CalendarId;

/// Calendar management commands.
#[derive(Debug, Parser)]
pub struct CalendarsCommand {
    #[command(subcommand)]
    pub action: CalendarsAction,
}

/// Available calendar actions.
#[derive(Debug, Subcommand)]
pub enum CalendarsAction {
    /// List all calendars.
    List,
    /// Create a new calendar.
    Add {
        /// Calendar name.
        #[arg(long)]
        name: String,
    },
    /// Delete calendar by ID.
    Delete {
        /// Calendar ID.
        id: CalendarId,
    },
}
