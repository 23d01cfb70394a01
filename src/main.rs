use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;

use origin_gateway::config::{self, GatewayConfig};
use origin_gateway::http::HttpServer;
use origin_gateway::lifecycle::{shutdown_signal, Shutdown};
use origin_gateway::net::Listener;
use origin_gateway::observability;
use origin_gateway::routing::RouteTable;
use origin_gateway::upstream::Forwarder;

#[derive(Parser)]
#[command(name = "origin-gateway")]
#[command(about = "HTTP gateway for the primary domain", long_about = None)]
struct Cli {
    /// Path to a TOML config file; built-in defaults are used when absent.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    observability::logging::init();

    let config = match &cli.config {
        Some(path) => match config::load_config(path) {
            Ok(config) => config,
            Err(err) => {
                tracing::error!(path = %path.display(), error = %err, "failed to load configuration");
                std::process::exit(1);
            }
        },
        None => GatewayConfig::default(),
    };

    tracing::info!(
        bind_address = %config.listener.bind_address,
        primary_domain = %config.upstream.primary_domain,
        update_host = %config.upstream.update_host(),
        "Configuration loaded"
    );

    let routes = Arc::new(RouteTable::new(&config.upstream));
    let forwarder = match Forwarder::new(&config.upstream) {
        Ok(forwarder) => Arc::new(forwarder),
        Err(err) => {
            tracing::error!(error = %err, "failed to build outbound client");
            std::process::exit(1);
        }
    };

    let listener = match Listener::bind(&config.listener).await {
        Ok(listener) => listener,
        Err(err) => {
            tracing::error!(error = %err, "error in server");
            std::process::exit(1);
        }
    };

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config, routes, forwarder);
    let server_shutdown = shutdown.subscribe();

    let server_task = tokio::spawn(async move { server.run(listener, server_shutdown).await });

    shutdown_signal().await;
    shutdown.trigger();

    // Shutdown-timeout still exits normally; the error is for operators only.
    match server_task.await {
        Ok(Ok(())) => tracing::info!("Shutdown complete"),
        Ok(Err(err)) => tracing::error!(error = %err, "error during graceful shutdown"),
        Err(err) => tracing::error!(error = %err, "server task failed"),
    }
}
