//! Data models for the Edgeline SDK
//!
//! These types mirror the HTTP response bodies and are returned by
//! both EmbeddedClient and RemoteClient.

use serde::{Deserialize, Serialize};

/// Server status information
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerStatus {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Server version
    pub version: String,
    /// Storage statistics
    pub storage: StorageStats,
}

/// Storage statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageStats {
    /// Number of nodes
    pub nodes: u64,
    /// Number of edges
    pub edges: u64,
}

/// Error body sent by the server on 4xx responses
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ErrorBody {
    pub error: String,
    #[serde(default)]
    pub kind: Option<String>,
}
