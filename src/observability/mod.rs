//! Observability subsystem.
//!
//! Structured logging only; the request path is traced by `tower-http`'s
//! `TraceLayer` and forwarding errors are logged where they are handled.

pub mod logging;
