//! Upstream subsystem.
//!
//! One outbound GET per forwarded request, relayed back to the client by
//! `http::response`. Transport failures and origin error statuses are split
//! into distinct error variants so the handler can log them apart.

pub mod forwarder;

pub use forwarder::{ForwardError, Forwarder};
