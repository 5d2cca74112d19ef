//! HTTP server wiring: routes, middleware, graceful shutdown

use axum::{
    extract::Request,
    http::{HeaderValue, Method, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use crate::config::ServerConfig;
use crate::graph::GraphStore;
use anyhow::Context;
use std::future::{Future, IntoFuture};
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Notify;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use super::handler::{
    add_edge_handler, add_node_handler, clear_handler, export_handler, get_node_handler,
    health_handler, status_handler,
};

/// Build the CORS layer; an empty origin list allows any origin
pub fn build_cors_layer(config: &ServerConfig) -> CorsLayer {
    if config.is_cors_permissive() {
        return CorsLayer::permissive();
    }

    let origin_list: Vec<HeaderValue> = config
        .cors_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(e) => {
                warn!("CORS: ignoring unparsable origin {:?}: {}", origin, e);
                None
            }
        })
        .collect();
    info!("CORS: restricted to {} origin(s)", origin_list.len());

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origin_list))
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Answer any OPTIONS request that is not a CORS preflight with an empty 200
async fn answer_options(request: Request, next: Next) -> Response {
    if request.method() == Method::OPTIONS {
        return StatusCode::OK.into_response();
    }
    next.run(request).await
}

/// Build the full application router over a shared store
pub fn build_router(store: Arc<GraphStore>, config: &ServerConfig) -> Router {
    Router::new()
        .route("/node", post(add_node_handler))
        .route("/node/get", get(get_node_handler))
        .route("/edge", post(add_edge_handler))
        .route("/export", get(export_handler))
        .route("/clear", post(clear_handler))
        .route("/health", get(health_handler))
        .route("/status", get(status_handler))
        .layer(TimeoutLayer::new(config.request_timeout))
        .layer(middleware::from_fn(answer_options))
        .layer(build_cors_layer(config))
        .layer(TraceLayer::new_for_http())
        .with_state(store)
}

/// Resolves on Ctrl+C or, on unix, SIGTERM
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                warn!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

/// HTTP server exposing a graph store
pub struct HttpServer {
    store: Arc<GraphStore>,
    config: ServerConfig,
}

impl HttpServer {
    /// Create a new HTTP server
    pub fn new(store: Arc<GraphStore>, config: ServerConfig) -> Self {
        Self { store, config }
    }

    pub fn router(&self) -> Router {
        build_router(Arc::clone(&self.store), &self.config)
    }

    /// Bind the configured address and serve until `shutdown` resolves
    pub async fn start<F>(&self, shutdown: F) -> anyhow::Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr = self.config.socket_addr();
        let listener = TcpListener::bind(&addr)
            .await
            .with_context(|| format!("failed to bind {}", addr))?;

        self.serve(listener, shutdown).await
    }

    /// Serve on an already-bound listener
    ///
    /// Once `shutdown` resolves, in-flight requests get
    /// `shutdown_grace` to finish before the server stops regardless.
    pub async fn serve<F>(&self, listener: TcpListener, shutdown: F) -> anyhow::Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        info!("Graph store server listening on http://{}", listener.local_addr()?);

        let signalled = Arc::new(Notify::new());
        let notify = Arc::clone(&signalled);
        let server = axum::serve(listener, self.router())
            .with_graceful_shutdown(async move {
                shutdown.await;
                info!("Server is shutting down...");
                notify.notify_one();
            })
            .into_future();

        let grace = self.config.shutdown_grace;
        tokio::select! {
            result = server => result.context("server error")?,
            _ = async {
                signalled.notified().await;
                tokio::time::sleep(grace).await;
            } => {
                warn!("Server forced to shutdown after {:?}", grace);
            }
        }

        info!("Server stopped");
        Ok(())
    }
}
