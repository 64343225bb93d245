//! Continuation-style wrappers around the core operations.
//!
//! Each `*_then` method takes a success handler and a failure handler and runs
//! exactly one of them, exactly once. Both are `FnOnce`, so neither can be
//! invoked twice, and the outcome is a `Result`, so one of them always runs.

use chrono::{DateTime, Utc};
use uoacal_core::calendar::{Calendar, CalendarId, Event, NewEvent};

use super::{CalendarClient, RawResponse, Reply};
use crate::error::{ClientError, Result};

/// Route an outcome to one of two handlers.
pub fn dispatch<T, S, F>(outcome: Result<Reply<T>>, on_success: S, on_failure: F)
where
    S: FnOnce(&RawResponse, T),
    F: FnOnce(ClientError),
{
    match outcome {
        Ok(Reply { raw, data }) => on_success(&raw, data),
        Err(err) => on_failure(err),
    }
}

impl CalendarClient {
    /// [`add_calendar`](Self::add_calendar) with continuations.
    pub async fn add_calendar_then<S, F>(&self, name: impl Into<String>, on_success: S, on_failure: F)
    where
        S: FnOnce(&RawResponse, Calendar),
        F: FnOnce(ClientError),
    {
        dispatch(self.add_calendar(name).await, on_success, on_failure);
    }

    /// [`add_event`](Self::add_event) with continuations.
    pub async fn add_event_then<S, F>(
        &self,
        calendar_id: CalendarId,
        event: &NewEvent,
        on_success: S,
        on_failure: F,
    ) where
        S: FnOnce(&RawResponse, Event),
        F: FnOnce(ClientError),
    {
        dispatch(
            self.add_event(calendar_id, event).await,
            on_success,
            on_failure,
        );
    }

    /// [`find_events`](Self::find_events) with continuations.
    pub async fn find_events_then<S, F>(
        &self,
        calendar_id: CalendarId,
        range_start: DateTime<Utc>,
        range_end: DateTime<Utc>,
        on_success: S,
        on_failure: F,
    ) where
        S: FnOnce(&RawResponse, Vec<Event>),
        F: FnOnce(ClientError),
    {
        dispatch(
            self.find_events(calendar_id, range_start, range_end).await,
            on_success,
            on_failure,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn raw(status: u16) -> RawResponse {
        RawResponse {
            status,
            body: String::new(),
        }
    }

    #[test]
    fn test_dispatch_success_runs_only_success() {
        let successes = Cell::new(0);
        let failures = Cell::new(0);

        dispatch(
            Ok(Reply {
                raw: raw(200),
                data: 5u64,
            }),
            |raw, data| {
                assert_eq!(raw.status, 200);
                assert_eq!(data, 5);
                successes.set(successes.get() + 1);
            },
            |_| failures.set(failures.get() + 1),
        );

        assert_eq!((successes.get(), failures.get()), (1, 0));
    }

    #[test]
    fn test_dispatch_failure_runs_only_failure() {
        let successes = Cell::new(0);
        let failures = Cell::new(0);

        dispatch::<u64, _, _>(
            Err(ClientError::from_status(raw(401))),
            |_, _| successes.set(successes.get() + 1),
            |err| {
                assert_eq!(err.status(), Some(401));
                failures.set(failures.get() + 1);
            },
        );

        assert_eq!((successes.get(), failures.get()), (0, 1));
    }
}
