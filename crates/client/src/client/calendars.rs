//! Calendar API operations.

use reqwest::Method;
use uoacal_core::api::{calendar_path, CALENDARS_PATH};
use uoacal_core::calendar::{Calendar, CalendarId, CreateCalendarRequest};

use super::{CalendarClient, Reply};
use crate::error::Result;

impl CalendarClient {
    /// Create a new calendar.
    ///
    /// Not idempotent: the same name twice creates two calendars unless the
    /// server rejects duplicates.
    pub async fn add_calendar(&self, name: impl Into<String>) -> Result<Reply<Calendar>> {
        let request = self
            .request(Method::POST, CALENDARS_PATH)
            .json(&CreateCalendarRequest::new(name));
        let raw = self.send(request).await?;
        self.handle_response(raw)
    }

    /// List all calendars.
    pub async fn list_calendars(&self) -> Result<Reply<Vec<Calendar>>> {
        let raw = self
            .send(self.request(Method::GET, CALENDARS_PATH))
            .await?;
        self.handle_response(raw)
    }

    /// Delete calendar by ID.
    pub async fn delete_calendar(&self, id: CalendarId) -> Result<Reply<()>> {
        let raw = self
            .send(self.request(Method::DELETE, &calendar_path(id)))
            .await?;
        self.handle_delete_response(raw)
    }
}
