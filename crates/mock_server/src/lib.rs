//! uoacal_mock_server - In-memory implementation of the calendar REST API.
//!
//! Stands in for the remote calendar service in integration tests and local
//! development. All state lives in process memory and is lost on shutdown.

pub mod app;
pub mod auth;
pub mod error;
pub mod handlers;
pub mod server;
pub mod state;
pub mod store;

pub use app::create_app;
pub use server::MockCalendarServer;
pub use state::ServerState;
