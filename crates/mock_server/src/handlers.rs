//! Calendar and event handlers.

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    Json,
};

use uoacal_core::calendar::{
    validate_calendar_name, validate_event, Calendar, CalendarId, CreateCalendarRequest, Event,
    EventId, FindEventsQuery, NewEvent,
};

use crate::{error::ApiError, state::ServerState};

fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, ApiError> {
    payload
        .map(|Json(body)| body)
        .map_err(|e| ApiError::Validation(format!("Failed to parse body: {}", e.body_text())))
}

/// Create a calendar (POST /api/calendars).
pub async fn create_calendar(
    State(state): State<ServerState>,
    payload: Result<Json<CreateCalendarRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Calendar>), ApiError> {
    let request = json_body(payload)?;
    validate_calendar_name(&request.name)?;

    let calendar = state.store.create_calendar(request.name).await;
    tracing::info!(calendar_id = calendar.id, name = %calendar.name, "Created calendar");

    Ok((StatusCode::CREATED, Json(calendar)))
}

/// List calendars (GET /api/calendars).
pub async fn list_calendars(State(state): State<ServerState>) -> Json<Vec<Calendar>> {
    Json(state.store.list_calendars().await)
}

/// Delete a calendar and its events (DELETE /api/calendars/{id}).
pub async fn delete_calendar(
    State(state): State<ServerState>,
    Path(calendar_id): Path<CalendarId>,
) -> Result<StatusCode, ApiError> {
    state.store.delete_calendar(calendar_id).await?;
    tracing::info!(calendar_id, "Deleted calendar");
    Ok(StatusCode::NO_CONTENT)
}

/// Create an event (POST /api/calendars/{id}/events).
pub async fn create_event(
    State(state): State<ServerState>,
    Path(calendar_id): Path<CalendarId>,
    payload: Result<Json<NewEvent>, JsonRejection>,
) -> Result<(StatusCode, Json<Event>), ApiError> {
    let new_event = json_body(payload)?;
    validate_event(&new_event)?;

    let event = state.store.create_event(calendar_id, new_event).await?;
    tracing::info!(calendar_id, event_id = event.id, title = %event.title, "Created event");

    Ok((StatusCode::CREATED, Json(event)))
}

/// Find events overlapping a window (GET /api/calendars/{id}/events?rangeStart=..&rangeEnd=..).
pub async fn find_events(
    State(state): State<ServerState>,
    Path(calendar_id): Path<CalendarId>,
    query: Result<Query<FindEventsQuery>, QueryRejection>,
) -> Result<Json<Vec<Event>>, ApiError> {
    let Query(query) =
        query.map_err(|e| ApiError::Validation(format!("Invalid query: {}", e.body_text())))?;
    let range = query.to_range()?;

    let events = state.store.find_events(calendar_id, range).await?;
    tracing::debug!(calendar_id, count = events.len(), "Found events");

    Ok(Json(events))
}

/// Delete an event (DELETE /api/calendars/{id}/events/{event_id}).
pub async fn delete_event(
    State(state): State<ServerState>,
    Path((calendar_id, event_id)): Path<(CalendarId, EventId)>,
) -> Result<StatusCode, ApiError> {
    state.store.delete_event(calendar_id, event_id).await?;
    tracing::info!(calendar_id, event_id, "Deleted event");
    Ok(StatusCode::NO_CONTENT)
}
