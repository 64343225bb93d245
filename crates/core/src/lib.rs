//! uoacal_core - Functional core for the uoacal calendar client.
//!
//! Everything in this crate is pure: data types shared between the client and
//! the server, request payloads, the date-range overlap contract, validation
//! and status-code classification. No I/O happens here.

pub mod api;
pub mod calendar;
pub mod instant;
