//! Outbound request execution.
//!
//! # Responsibilities
//! - Own the shared outbound HTTP client
//! - Issue one bounded GET per forwarded request
//! - Classify failures before any response byte is relayed
//!
//! # Design Decisions
//! - Status is checked before the body is touched; an origin error never
//!   leaks partial output to the client
//! - No retries at any layer; a failed attempt is terminal for that request

use std::time::Duration;

use reqwest::StatusCode;
use thiserror::Error;

use crate::config::UpstreamConfig;

/// Error type for a failed forward attempt.
#[derive(Debug, Error)]
pub enum ForwardError {
    /// Connection, DNS, TLS, or timeout failure reaching the origin.
    #[error("error sending request to origin: {0}")]
    Transport(#[from] reqwest::Error),

    /// The origin answered with an error status.
    #[error("error from origin: {0}")]
    Upstream(StatusCode),
}

/// Shared outbound HTTP client.
///
/// Constructed once at startup and used concurrently by all request tasks;
/// connection reuse is left to the client's defaults.
pub struct Forwarder {
    client: reqwest::Client,
}

impl Forwarder {
    pub fn new(config: &UpstreamConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;
        Ok(Self { client })
    }

    /// Issue a GET to `url` and return the response for streaming.
    ///
    /// An origin status >= 400 is a [`ForwardError::Upstream`]; the error
    /// body, if any, is never relayed.
    pub async fn fetch(&self, url: &str) -> Result<reqwest::Response, ForwardError> {
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if status.is_client_error() || status.is_server_error() {
            return Err(ForwardError::Upstream(status));
        }

        Ok(response)
    }
}
