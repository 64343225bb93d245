//! Wire-level conventions shared by the client and the server.

mod paths;
mod status;

pub use paths::{calendar_path, event_path, events_path, CALENDARS_PATH};
pub use status::{classify_status, FailureKind};
