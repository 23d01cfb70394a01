//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (main.rs):
//!     Load config → Validate → Construct router/forwarder → Bind → Serve
//!
//! Shutdown (shutdown.rs):
//!     Signal received → Stop accepting → Drain connections → Exit
//!
//! Signals (signals.rs):
//!     SIGINT/SIGTERM → Trigger graceful shutdown
//! ```
//!
//! # Design Decisions
//! - One shutdown attempt per process lifetime
//! - Shutdown has a deadline: draining stops when the grace period elapses
//! - A missed deadline is logged but the process still exits normally

pub mod shutdown;
pub mod signals;

pub use shutdown::{Shutdown, ShutdownTimeout};
pub use signals::shutdown_signal;
