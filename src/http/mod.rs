//! HTTP transport for the graph store

pub mod handler;
pub mod server;

pub use handler::{ApiError, AppState};
pub use server::{build_router, shutdown_signal, HttpServer};
