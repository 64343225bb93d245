//! uoacal_client - Client library and CLI for the UoA calendar API.
//!
//! ```no_run
//! use uoacal_client::{CalendarClient, ClientConfig};
//!
//! # async fn demo() -> uoacal_client::Result<()> {
//! let client = CalendarClient::new(ClientConfig::new("my-token"));
//! let calendar = client.add_calendar("test").await?.data;
//! assert!(calendar.id > 0);
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod output;

pub use client::{CalendarClient, RawResponse, Reply};
pub use config::{ApiToken, ClientConfig};
pub use error::{ClientError, ErrorBody, Result};
