use super::error::{CalendarError, EventError};
use super::types::{Event, NewEvent, TimeRange};

const MAX_NAME_LEN: usize = 100;
const MAX_TITLE_LEN: usize = 200;

/// Filters events that overlap with a time range.
/// An event overlaps if it starts before or at the range end AND ends at or after the range start.
pub fn filter_events_by_range<'a>(events: &'a [Event], range: &TimeRange) -> Vec<&'a Event> {
    events.iter().filter(|event| event.overlaps(range)).collect()
}

/// Validates a calendar name before creation.
pub fn validate_calendar_name(name: &str) -> Result<(), CalendarError> {
    if name.trim().is_empty() {
        return Err(CalendarError::EmptyName);
    }
    if name.chars().count() > MAX_NAME_LEN {
        return Err(CalendarError::NameTooLong);
    }
    Ok(())
}

/// Validates an event payload before creation.
pub fn validate_event(event: &NewEvent) -> Result<(), EventError> {
    if event.title.trim().is_empty() {
        return Err(EventError::EmptyTitle);
    }
    if event.title.chars().count() > MAX_TITLE_LEN {
        return Err(EventError::TitleTooLong);
    }
    if event.end < event.start {
        return Err(EventError::InvalidTimeRange);
    }
    Ok(())
}
