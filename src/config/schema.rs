//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.
//! Every field has a default equal to the gateway's built-in constants, so
//! running without a config file yields the canonical deployment.

use serde::{Deserialize, Serialize};

/// Root configuration for the gateway.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct GatewayConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Per-connection timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Upstream origin configuration.
    pub upstream: UpstreamConfig,

    /// Graceful shutdown configuration.
    pub shutdown: ShutdownConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
        }
    }
}

/// Timeout configuration for inbound connections.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Request header read timeout in seconds.
    pub read_header_secs: u64,

    /// Full request read timeout in seconds.
    pub read_secs: u64,

    /// Response write timeout in seconds.
    pub write_secs: u64,

    /// Idle keep-alive timeout between requests in seconds.
    pub idle_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            read_header_secs: 5,
            read_secs: 20,
            write_secs: 300,
            idle_secs: 60,
        }
    }
}

/// Upstream origin configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct UpstreamConfig {
    /// Canonical origin host that unmatched paths redirect to and that
    /// proxied paths ultimately target.
    pub primary_domain: String,

    /// Host serving `/update*` traffic. Defaults to `upd.<primary_domain>`.
    pub update_host: Option<String>,

    /// Scheme for outbound requests and redirect targets.
    pub scheme: String,

    /// Total outbound request timeout in seconds.
    pub request_timeout_secs: u64,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            primary_domain: "puyovs.com".to_string(),
            update_host: None,
            scheme: "https".to_string(),
            request_timeout_secs: 300,
        }
    }
}

impl UpstreamConfig {
    /// The effective update mirror host.
    pub fn update_host(&self) -> String {
        self.update_host
            .clone()
            .unwrap_or_else(|| format!("upd.{}", self.primary_domain))
    }
}

/// Graceful shutdown configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ShutdownConfig {
    /// Grace period for draining in-flight requests in seconds.
    pub grace_secs: u64,
}

impl Default for ShutdownConfig {
    fn default() -> Self {
        Self { grace_secs: 10 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_canonical_deployment() {
        let config = GatewayConfig::default();
        assert_eq!(config.listener.bind_address, "0.0.0.0:8080");
        assert_eq!(config.timeouts.read_header_secs, 5);
        assert_eq!(config.timeouts.read_secs, 20);
        assert_eq!(config.timeouts.write_secs, 300);
        assert_eq!(config.timeouts.idle_secs, 60);
        assert_eq!(config.upstream.primary_domain, "puyovs.com");
        assert_eq!(config.upstream.scheme, "https");
        assert_eq!(config.upstream.update_host(), "upd.puyovs.com");
        assert_eq!(config.shutdown.grace_secs, 10);
    }

    #[test]
    fn update_host_override_wins() {
        let upstream = UpstreamConfig {
            update_host: Some("mirror.example.net".to_string()),
            ..Default::default()
        };
        assert_eq!(upstream.update_host(), "mirror.example.net");
    }

    #[test]
    fn partial_toml_falls_back_to_defaults() {
        let config: GatewayConfig = toml::from_str(
            r#"
            [listener]
            bind_address = "127.0.0.1:9000"

            [upstream]
            primary_domain = "example.com"
            "#,
        )
        .unwrap();
        assert_eq!(config.listener.bind_address, "127.0.0.1:9000");
        assert_eq!(config.upstream.primary_domain, "example.com");
        assert_eq!(config.upstream.update_host(), "upd.example.com");
        assert_eq!(config.timeouts.write_secs, 300);
    }
}
