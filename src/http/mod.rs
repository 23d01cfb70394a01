//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (hyper connection serving, Axum dispatch)
//!     → routing layer decides forward vs redirect
//!     → response.rs (redirect / streamed relay)
//!     → Send to client
//! ```

pub mod response;
pub mod server;

pub use server::{HttpServer, ServerError};
