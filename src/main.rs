//! Edgeline server - HTTP front end for the in-memory graph store.

use clap::Parser;
use edgeline::{GraphStore, HttpServer, ServerConfig};
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Edgeline Server - in-memory graph store over HTTP
#[derive(Parser, Debug)]
#[command(name = "edgeline-server")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Host address to bind to
    #[arg(long, default_value = "0.0.0.0", env = "EDGELINE_HOST")]
    host: String,

    /// Port to listen on
    #[arg(short, long, default_value_t = 8080, env = "PORT")]
    port: u16,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = 15, env = "EDGELINE_REQUEST_TIMEOUT_SECS")]
    request_timeout_secs: u64,

    /// Seconds in-flight requests may run after a shutdown signal
    #[arg(long, default_value_t = 30, env = "EDGELINE_SHUTDOWN_GRACE_SECS")]
    shutdown_grace_secs: u64,

    /// Comma-separated list of allowed CORS origins (default: any)
    #[arg(long, env = "EDGELINE_CORS_ORIGIN")]
    cors_origin: Option<String>,
}

impl From<Args> for ServerConfig {
    fn from(args: Args) -> Self {
        ServerConfig {
            address: args.host,
            port: args.port,
            request_timeout: Duration::from_secs(args.request_timeout_secs),
            shutdown_grace: Duration::from_secs(args.shutdown_grace_secs),
            cors_origins: args
                .cors_origin
                .as_deref()
                .map(ServerConfig::parse_origins)
                .unwrap_or_default(),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config: ServerConfig = Args::parse().into();
    tracing::info!("Edgeline Graph Store v{}", edgeline::version());
    if config.is_cors_permissive() {
        tracing::warn!("CORS: permissive. Set EDGELINE_CORS_ORIGIN to restrict origins.");
    }
    tracing::info!("Graph data is in-memory only and will NOT survive a restart.");

    let store = Arc::new(GraphStore::new());
    let server = HttpServer::new(store, config);
    server.start(edgeline::http::shutdown_signal()).await
}
