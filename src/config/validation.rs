//! Configuration validation.
//!
//! Semantic checks on top of what serde already guarantees syntactically.
//! Returns all validation errors, not just the first.

use std::net::SocketAddr;

use url::Url;

use crate::config::schema::GatewayConfig;

/// A single semantic validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Bind address does not parse as a socket address.
    InvalidBindAddress(String),
    /// Primary domain is empty or not a bare host.
    InvalidPrimaryDomain(String),
    /// Update host override is not a bare host.
    InvalidUpdateHost(String),
    /// Upstream scheme is neither "http" nor "https".
    InvalidScheme(String),
    /// A timeout or grace period is zero.
    ZeroDuration(&'static str),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::InvalidBindAddress(addr) => {
                write!(f, "invalid bind address '{}'", addr)
            }
            ValidationError::InvalidPrimaryDomain(host) => {
                write!(f, "invalid primary domain '{}'", host)
            }
            ValidationError::InvalidUpdateHost(host) => {
                write!(f, "invalid update host '{}'", host)
            }
            ValidationError::InvalidScheme(scheme) => {
                write!(f, "invalid upstream scheme '{}' (expected http or https)", scheme)
            }
            ValidationError::ZeroDuration(field) => {
                write!(f, "{} must be greater than zero", field)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Validate a loaded configuration, collecting every failure.
pub fn validate_config(config: &GatewayConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidBindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    if !is_bare_host(&config.upstream.primary_domain) {
        errors.push(ValidationError::InvalidPrimaryDomain(
            config.upstream.primary_domain.clone(),
        ));
    }

    if let Some(host) = &config.upstream.update_host {
        if !is_bare_host(host) {
            errors.push(ValidationError::InvalidUpdateHost(host.clone()));
        }
    }

    if config.upstream.scheme != "http" && config.upstream.scheme != "https" {
        errors.push(ValidationError::InvalidScheme(config.upstream.scheme.clone()));
    }

    for (field, value) in [
        ("timeouts.read_header_secs", config.timeouts.read_header_secs),
        ("timeouts.read_secs", config.timeouts.read_secs),
        ("timeouts.write_secs", config.timeouts.write_secs),
        ("timeouts.idle_secs", config.timeouts.idle_secs),
        ("upstream.request_timeout_secs", config.upstream.request_timeout_secs),
        ("shutdown.grace_secs", config.shutdown.grace_secs),
    ] {
        if value == 0 {
            errors.push(ValidationError::ZeroDuration(field));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// A host (optionally with port) with no scheme, path, or userinfo.
fn is_bare_host(host: &str) -> bool {
    if host.is_empty() || host.contains('/') || host.contains('@') {
        return false;
    }
    match Url::parse(&format!("http://{}", host)) {
        Ok(url) => {
            url.host_str().is_some()
                && url.path() == "/"
                && url.query().is_none()
                && url.username().is_empty()
        }
        Err(_) => false,
    }
}
