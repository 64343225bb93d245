//! In-memory calendar store.

use std::collections::BTreeMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use uoacal_core::calendar::{
    filter_events_by_range, Calendar, CalendarId, Event, EventId, NewEvent, TimeRange,
};

use crate::error::ApiError;

#[derive(Debug, Default)]
struct Inner {
    calendars: BTreeMap<CalendarId, Calendar>,
    /// Events keyed by calendar, then by event id.
    events: BTreeMap<CalendarId, BTreeMap<EventId, Event>>,
    last_calendar_id: CalendarId,
    last_event_id: EventId,
}

/// Storage backend for the mock server.
///
/// Ids are assigned sequentially starting at 1, so every id handed out is > 0.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    inner: Arc<RwLock<Inner>>,
}

impl InMemoryStore {
    /// Creates a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a calendar. Duplicate names are allowed.
    pub async fn create_calendar(&self, name: String) -> Calendar {
        let mut inner = self.inner.write().await;
        inner.last_calendar_id += 1;
        let calendar = Calendar::new(inner.last_calendar_id, name);
        inner.calendars.insert(calendar.id, calendar.clone());
        inner.events.insert(calendar.id, BTreeMap::new());
        calendar
    }

    pub async fn list_calendars(&self) -> Vec<Calendar> {
        self.inner.read().await.calendars.values().cloned().collect()
    }

    /// Deletes a calendar together with its events.
    pub async fn delete_calendar(&self, calendar_id: CalendarId) -> Result<(), ApiError> {
        let mut inner = self.inner.write().await;
        inner
            .calendars
            .remove(&calendar_id)
            .ok_or_else(|| ApiError::calendar_not_found(calendar_id))?;
        inner.events.remove(&calendar_id);
        Ok(())
    }

    pub async fn create_event(
        &self,
        calendar_id: CalendarId,
        new_event: NewEvent,
    ) -> Result<Event, ApiError> {
        let mut inner = self.inner.write().await;
        if !inner.calendars.contains_key(&calendar_id) {
            return Err(ApiError::calendar_not_found(calendar_id));
        }
        inner.last_event_id += 1;
        let event = new_event.into_event(inner.last_event_id);
        inner
            .events
            .entry(calendar_id)
            .or_default()
            .insert(event.id, event.clone());
        Ok(event)
    }

    /// Returns the events of a calendar overlapping `range`, ordered by id.
    pub async fn find_events(
        &self,
        calendar_id: CalendarId,
        range: TimeRange,
    ) -> Result<Vec<Event>, ApiError> {
        let inner = self.inner.read().await;
        let events = inner
            .events
            .get(&calendar_id)
            .ok_or_else(|| ApiError::calendar_not_found(calendar_id))?;
        let events: Vec<Event> = events.values().cloned().collect();
        Ok(filter_events_by_range(&events, &range)
            .into_iter()
            .cloned()
            .collect())
    }

    pub async fn delete_event(
        &self,
        calendar_id: CalendarId,
        event_id: EventId,
    ) -> Result<(), ApiError> {
        let mut inner = self.inner.write().await;
        let events = inner
            .events
            .get_mut(&calendar_id)
            .ok_or_else(|| ApiError::calendar_not_found(calendar_id))?;
        events
            .remove(&event_id)
            .map(|_| ())
            .ok_or(ApiError::NotFound {
                entity_type: "Event",
                id: event_id,
            })
    }
}
