//! REST endpoint paths.

use crate::calendar::{CalendarId, EventId};

/// Collection path for calendars.
pub const CALENDARS_PATH: &str = "/api/calendars";

/// Path of a single calendar.
pub fn calendar_path(calendar_id: CalendarId) -> String {
    format!("{CALENDARS_PATH}/{calendar_id}")
}

/// Collection path for the events of a calendar.
pub fn events_path(calendar_id: CalendarId) -> String {
    format!("{CALENDARS_PATH}/{calendar_id}/events")
}

/// Path of a single event within a calendar.
pub fn event_path(calendar_id: CalendarId, event_id: EventId) -> String {
    format!("{CALENDARS_PATH}/{calendar_id}/events/{event_id}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        assert_eq!(calendar_path(1), "/api/calendars/1");
        assert_eq!(events_path(12), "/api/calendars/12/events");
        assert_eq!(event_path(3, 44), "/api/calendars/3/events/44");
    }
}
