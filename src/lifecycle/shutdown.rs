//! Shutdown coordination for the gateway.

use std::time::Duration;

use thiserror::Error;
use tokio::sync::broadcast;

/// Graceful shutdown did not finish before the grace deadline.
///
/// Connections still open at the deadline are closed forcibly; the process
/// logs this error and still exits normally.
#[derive(Debug, Error)]
#[error("graceful shutdown incomplete after {grace:?}")]
pub struct ShutdownTimeout {
    grace: Duration,
}

impl ShutdownTimeout {
    pub fn new(grace: Duration) -> Self {
        Self { grace }
    }
}

/// Coordinator for graceful shutdown.
///
/// Provides a broadcast channel the server loop subscribes to. Triggered
/// exactly once per process lifetime, after the termination signal.
pub struct Shutdown {
    tx: broadcast::Sender<()>,
}

impl Shutdown {
    /// Create a new shutdown coordinator.
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(1);
        Self { tx }
    }

    /// Subscribe to the shutdown signal.
    pub fn subscribe(&self) -> broadcast::Receiver<()> {
        self.tx.subscribe()
    }

    /// Trigger the shutdown signal.
    pub fn trigger(&self) {
        let _ = self.tx.send(());
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}
