//! Event CLI commands.

use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use uoacal_core::calendar::{CalendarId, EventId};
use uoacal_core::instant::parse_instant;

/// Event management commands.
#[derive(Debug, Parser)]
pub struct EventsCommand {
    #[command(subcommand)]
    pub action: EventsAction,
}

/// Available event actions.
#[derive(Debug, Subcommand)]
pub enum EventsAction {
    /// Create an event in a calendar.
    Add {
        /// Calendar ID.
        #[arg(long)]
        calendar_id: CalendarId,
        /// Event title.
        #[arg(long)]
        title: String,
        /// Start (RFC 3339 or YYYY-MM-DD).
        #[arg(long, value_parser = parse_instant)]
        start: DateTime<Utc>,
        /// End (RFC 3339 or YYYY-MM-DD).
        #[arg(long, value_parser = parse_instant)]
        end: DateTime<Utc>,
    },
    /// Find events overlapping a window.
    Find {
        /// Calendar ID.
        #[arg(long)]
        calendar_id: CalendarId,
        /// Window start (RFC 3339 or YYYY-MM-DD).
        #[arg(long, value_parser = parse_instant)]
        start: DateTime<Utc>,
        /// Window end (RFC 3339 or YYYY-MM-DD).
        #[arg(long, value_parser = parse_instant)]
        end: DateTime<Utc>,
    },
    /// Delete event by ID.
    Delete {
        /// Calendar ID.
        #[arg(long)]
        calendar_id: CalendarId,
        /// Event ID.
        id: EventId,
    },
}
