//! Pretty output formatting.

use uoacal_core::calendar::{Calendar, Event};

/// Format a calendar for display.
pub fn format_calendar(calendar: &Calendar) -> String {
    format!("{}\n  ID: {}", calendar.name, calendar.id)
}

/// Format calendars for display.
pub fn format_calendars(calendars: &[Calendar]) -> String {
    if calendars.is_empty() {
        return "No calendars found.".to_string();
    }
    let mut output = format!("CALENDARS ({})\n", calendars.len());
    output.push_str(&"-".repeat(40));
    for calendar in calendars {
        output.push_str(&format!("\n{}", format_calendar(calendar)));
        output.push('\n');
    }
    output
}

/// Format an event for display.
pub fn format_event(event: &Event) -> String {
    format!(
        "{}\n  ID: {}\n  Start: {}\n  End: {}",
        event.title,
        event.id,
        event.start.to_rfc3339(),
        event.end.to_rfc3339()
    )
}

/// Format events for display.
pub fn format_events(events: &[Event]) -> String {
    if events.is_empty() {
        return "No events found.".to_string();
    }
    let mut output = format!("EVENTS ({})\n", events.len());
    output.push_str(&"-".repeat(40));
    for event in events {
        output.push_str(&format!("\n{}", format_event(event)));
        output.push('\n');
    }
    output
}
