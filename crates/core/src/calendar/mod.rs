mod error;
mod operations;
mod requests;
mod types;

pub use error::{CalendarError, EventError, RangeError};
pub use operations::{filter_events_by_range, validate_calendar_name, validate_event};
pub use requests::{CreateCalendarRequest, FindEventsQuery};
pub use types::{Calendar, CalendarId, Event, EventId, NewEvent, TimeRange};
