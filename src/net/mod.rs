//! Network subsystem.
//!
//! Owns the inbound TCP socket. HTTP framing happens one layer up in
//! `http::server`; this module only binds and accepts.

pub mod listener;

pub use listener::{Listener, ListenerError};
