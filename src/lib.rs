//! HTTP gateway for the primary domain.
//!
//! Accepts GET/HEAD traffic and either proxies it to a fixed upstream origin
//! or issues a permanent redirect to the same path on the primary domain.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request        ┌─────────┐    ┌─────────┐    ┌──────────┐
//!     ──────────────────────▶   net   │───▶│  http   │───▶│ routing  │
//!                           │listener │    │ server  │    │ decision │
//!                           └─────────┘    └─────────┘    └────┬─────┘
//!                                                              │
//!                                             redirect ◀───────┴───▶ forward
//!                                                                      │
//!     Client Response       ┌─────────┐    ┌──────────┐                ▼
//!     ◀─────────────────────│response │◀───│ upstream │◀──────── Origin host
//!                           │ (relay) │    │forwarder │     (primary / update
//!                           └─────────┘    └──────────┘          mirror)
//! ```
//!
//! Cross-cutting: `config` (defaulted TOML schema), `lifecycle`
//! (signals, bounded graceful shutdown), `observability` (tracing setup).

// Core subsystems
pub mod config;
pub mod http;
pub mod net;
pub mod routing;
pub mod upstream;

// Cross-cutting concerns
pub mod lifecycle;
pub mod observability;

pub use config::GatewayConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
