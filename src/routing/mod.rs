//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming request URI
//!     → router.rs (prefix / exact-path decision)
//!     → Return: Forward(outbound URL) or Redirect(location)
//! ```
//!
//! # Design Decisions
//! - Route table resolved at startup, immutable at runtime
//! - Deterministic: the outbound URL is derived only from the inbound URI
//! - First match wins (update prefix, server list, redirect fallback)

pub mod router;

pub use router::{RouteDecision, RouteTable};
