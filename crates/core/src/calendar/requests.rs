//! API request types for calendar operations.
//!
//! These types are shared between the server and client for type-safe API communication.
//! Following the Functional Core pattern, these are pure data types with no I/O.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::types::TimeRange;

/// Request payload for creating a new calendar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateCalendarRequest {
    pub name: String,
}

impl CreateCalendarRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Query parameters for the event range lookup.
///
/// Serialized as `?rangeStart=...&rangeEnd=...` with RFC 3339 instants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FindEventsQuery {
    pub range_start: DateTime<Utc>,
    pub range_end: DateTime<Utc>,
}

impl FindEventsQuery {
    pub fn new(range_start: DateTime<Utc>, range_end: DateTime<Utc>) -> Self {
        Self {
            range_start,
            range_end,
        }
    }

    /// Converts into a validated window.
    pub fn to_range(&self) -> Result<TimeRange, super::RangeError> {
        TimeRange::new(self.range_start, self.range_end)
    }
}
