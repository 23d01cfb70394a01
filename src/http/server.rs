//! HTTP server setup and request dispatch.
//!
//! # Responsibilities
//! - Create the Axum router with the single catch-all handler
//! - Wire up middleware (tracing, timeouts)
//! - Serve HTTP/1.1 and HTTP/2 connections from the listener
//! - Dispatch requests: method check → route decision → forward or redirect
//! - Drain in-flight connections on shutdown, bounded by the grace period

use std::sync::Arc;
use std::time::Duration;

use axum::extract::{Request, State};
use axum::http::{Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::any;
use axum::Router;
use hyper_util::rt::{TokioExecutor, TokioIo, TokioTimer};
use hyper_util::server::conn::auto;
use hyper_util::server::graceful::GracefulShutdown;
use hyper_util::service::TowerToHyperService;
use thiserror::Error;
use tokio::sync::broadcast;
use tower_http::timeout::{ResponseBodyTimeoutLayer, TimeoutLayer};
use tower_http::trace::TraceLayer;

use crate::config::GatewayConfig;
use crate::http::response;
use crate::lifecycle::ShutdownTimeout;
use crate::net::Listener;
use crate::routing::{RouteDecision, RouteTable};
use crate::upstream::Forwarder;

/// Error type for the server loop.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("listener I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    ShutdownTimeout(#[from] ShutdownTimeout),
}

/// Application state injected into the handler.
#[derive(Clone)]
pub struct AppState {
    pub routes: Arc<RouteTable>,
    pub forwarder: Arc<Forwarder>,
}

/// HTTP server for the gateway.
pub struct HttpServer {
    config: GatewayConfig,
    state: AppState,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration and
    /// collaborators. The route table and forwarder are injected rather than
    /// constructed here so tests can point them at local origins.
    pub fn new(config: GatewayConfig, routes: Arc<RouteTable>, forwarder: Arc<Forwarder>) -> Self {
        Self {
            config,
            state: AppState { routes, forwarder },
        }
    }

    /// Build the Axum router with all middleware layers.
    ///
    /// The write timeout bounds both handler completion and response body
    /// streaming. Only GET/HEAD are served, so the read phase is the header
    /// read, bounded at the connection level in `run`.
    fn build_router(config: &GatewayConfig, state: AppState) -> Router {
        let write = Duration::from_secs(config.timeouts.write_secs);

        Router::new()
            .route("/{*path}", any(gateway_handler))
            .route("/", any(gateway_handler))
            .with_state(state)
            .layer(ResponseBodyTimeoutLayer::new(write))
            .layer(TimeoutLayer::new(write))
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server until `shutdown` fires, then drain.
    ///
    /// Accepting stops the moment the shutdown signal is received; in-flight
    /// connections get up to the configured grace period to finish.
    pub async fn run(
        self,
        listener: Listener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), ServerError> {
        let addr = listener.local_addr()?;
        let app = Self::build_router(&self.config, self.state.clone());

        let mut builder = auto::Builder::new(TokioExecutor::new());
        builder
            .http1()
            .timer(TokioTimer::new())
            .header_read_timeout(Duration::from_secs(self.config.timeouts.read_header_secs));
        // timeouts.idle_secs is a recognized option, but hyper 1.x exposes no
        // keep-alive idle knob; idle connections end at shutdown.

        let graceful = GracefulShutdown::new();

        tracing::info!(address = %addr, "HTTP server starting");

        loop {
            tokio::select! {
                accepted = listener.accept() => {
                    let (stream, peer_addr) = match accepted {
                        Ok(pair) => pair,
                        Err(err) => {
                            tracing::warn!(error = %err, "failed to accept connection");
                            continue;
                        }
                    };

                    let io = TokioIo::new(stream);
                    let service = TowerToHyperService::new(app.clone());
                    let conn = builder.serve_connection(io, service);
                    let conn = graceful.watch(conn.into_owned());
                    tokio::spawn(async move {
                        if let Err(err) = conn.await {
                            tracing::debug!(
                                peer_addr = %peer_addr,
                                error = %err,
                                "connection ended with error"
                            );
                        }
                    });
                }
                _ = shutdown.recv() => break,
            }
        }

        // Dropping the listener closes the accept socket immediately.
        drop(listener);

        let grace = Duration::from_secs(self.config.shutdown.grace_secs);
        tracing::info!(grace_secs = grace.as_secs(), "draining in-flight connections");

        tokio::select! {
            _ = graceful.shutdown() => {
                tracing::info!("HTTP server stopped");
                Ok(())
            }
            _ = tokio::time::sleep(grace) => Err(ShutdownTimeout::new(grace).into()),
        }
    }
}

/// Main gateway handler.
///
/// Order is strict: method check, route decision, then forward or redirect.
async fn gateway_handler(State(state): State<AppState>, request: Request) -> Response {
    let method = request.method();
    if method != Method::GET && method != Method::HEAD {
        // Expected traffic (crawlers, probes); not worth logging.
        return StatusCode::METHOD_NOT_ALLOWED.into_response();
    }

    match state.routes.decide(request.uri()) {
        RouteDecision::Redirect(location) => response::redirect(&location),
        RouteDecision::Forward(url) => match state.forwarder.fetch(&url).await {
            Ok(origin) => response::proxied(origin),
            Err(err) => {
                tracing::error!(url = %url, error = %err, "error proxying request");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        },
    }
}
