//! Router construction.

use axum::{
    middleware,
    routing::{delete, get},
    Router,
};
use tower_http::trace::TraceLayer;
use uoacal_core::api::CALENDARS_PATH;

use crate::{auth::require_bearer, handlers, state::ServerState};

/// Builds the calendar API router. Every route requires the bearer token.
///
/// Paths are built from the same prefix the client uses.
pub fn create_app(state: ServerState) -> Router {
    let calendar = format!("{CALENDARS_PATH}/{{id}}");
    let events = format!("{calendar}/events");
    let event = format!("{events}/{{event_id}}");

    Router::new()
        .route(
            CALENDARS_PATH,
            get(handlers::list_calendars).post(handlers::create_calendar),
        )
        .route(&calendar, delete(handlers::delete_calendar))
        .route(
            &events,
            get(handlers::find_events).post(handlers::create_event),
        )
        .route(&event, delete(handlers::delete_event))
        .layer(middleware::from_fn_with_state(state.clone(), require_bearer))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
