use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Server-assigned calendar identifier.
pub type CalendarId = u64;

/// Server-assigned event identifier.
pub type EventId = u64;

/// A named calendar that contains events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Calendar {
    pub id: CalendarId,
    pub name: String,
}

impl Calendar {
    /// Creates a calendar with the given server-assigned id.
    pub fn new(id: CalendarId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// The caller-owned payload used to create an event.
///
/// Instants are forwarded to the server unmodified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewEvent {
    pub title: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl NewEvent {
    /// Creates a new event payload.
    pub fn new(title: impl Into<String>, start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self {
            title: title.into(),
            start,
            end,
        }
    }

    /// Attaches a server-assigned id, producing a stored event.
    pub fn into_event(self, id: EventId) -> Event {
        Event {
            id,
            title: self.title,
            start: self.start,
            end: self.end,
        }
    }
}

/// A titled time interval `[start, end]` belonging to one calendar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    pub title: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl Event {
    /// Returns true if `[start, end]` shares at least one instant with `range`.
    pub fn overlaps(&self, range: &TimeRange) -> bool {
        self.start <= range.end && self.end >= range.start
    }
}

/// An inclusive query window. Only constructible with `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeRange {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl TimeRange {
    /// Creates a new range, validating that start <= end.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self, super::RangeError> {
        if start > end {
            return Err(super::RangeError::InvalidRange);
        }
        Ok(Self { start, end })
    }

    /// A range covering a single instant.
    pub fn at(instant: DateTime<Utc>) -> Self {
        Self {
            start: instant,
            end: instant,
        }
    }

    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    pub fn end(&self) -> DateTime<Utc> {
        self.end
    }
}
