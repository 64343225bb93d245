//! Event API operations.

use chrono::{DateTime, Utc};
use reqwest::Method;
use uoacal_core::api::{event_path, events_path};
use uoacal_core::calendar::{CalendarId, Event, EventId, FindEventsQuery, NewEvent};

use super::{CalendarClient, Reply};
use crate::error::Result;

impl CalendarClient {
    /// Create an event in a calendar.
    ///
    /// `event` is only borrowed; the server-assigned id comes back on the
    /// returned [`Event`].
    pub async fn add_event(
        &self,
        calendar_id: CalendarId,
        event: &NewEvent,
    ) -> Result<Reply<Event>> {
        let request = self
            .request(Method::POST, &events_path(calendar_id))
            .json(event);
        let raw = self.send(request).await?;
        self.handle_response(raw)
    }

    /// Find every event of a calendar whose `[start, end]` overlaps
    /// `[range_start, range_end]`.
    ///
    /// Results come back in server order.
    pub async fn find_events(
        &self,
        calendar_id: CalendarId,
        range_start: DateTime<Utc>,
        range_end: DateTime<Utc>,
    ) -> Result<Reply<Vec<Event>>> {
        let request = self
            .request(Method::GET, &events_path(calendar_id))
            .query(&FindEventsQuery::new(range_start, range_end));
        let raw = self.send(request).await?;
        self.handle_response(raw)
    }

    /// Delete event by ID.
    pub async fn delete_event(
        &self,
        calendar_id: CalendarId,
        event_id: EventId,
    ) -> Result<Reply<()>> {
        let raw = self
            .send(self.request(Method::DELETE, &event_path(calendar_id, event_id)))
            .await?;
        self.handle_delete_response(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClientConfig;
    use chrono::TimeZone;

    #[test]
    fn test_find_events_query_string() {
        let client = CalendarClient::new(ClientConfig::new("t").with_base_url("http://cal.test"));
        let day = Utc.with_ymd_and_hms(2015, 12, 2, 0, 0, 0).unwrap();

        let request = client
            .request(Method::GET, &events_path(1))
            .query(&FindEventsQuery::new(day, day))
            .build()
            .unwrap();

        assert_eq!(
            request.url().as_str(),
            "http://cal.test/api/calendars/1/events?rangeStart=2015-12-02T00%3A00%3A00Z&rangeEnd=2015-12-02T00%3A00%3A00Z"
        );
    }
}
