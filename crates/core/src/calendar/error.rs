use thiserror::Error;

/// Errors that can occur when validating a calendar.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CalendarError {
    #[error("Calendar name cannot be empty")]
    EmptyName,
    #[error("Calendar name too long (max 100 characters)")]
    NameTooLong,
}

/// Errors that can occur when validating an event.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EventError {
    #[error("Event title cannot be empty")]
    EmptyTitle,
    #[error("Event title too long (max 200 characters)")]
    TitleTooLong,
    #[error("Event end must be after or equal to its start")]
    InvalidTimeRange,
}

/// Errors that can occur when constructing a query window.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RangeError {
    #[error("Invalid range: start must be before or equal to end")]
    InvalidRange,
}
