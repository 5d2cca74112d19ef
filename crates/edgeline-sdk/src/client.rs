//! GraphClient trait — the unified interface for embedded and remote modes

use async_trait::async_trait;
use edgeline::{Edge, GraphSnapshot, Node};
use crate::analysis::GraphAnalysis;
use crate::error::SdkResult;
use crate::models::ServerStatus;

/// Unified client interface for the Edgeline graph store.
///
/// Implemented by:
/// - `EmbeddedClient` — in-process, no network (for tests, embedded use)
/// - `RemoteClient` — connects to a running server via HTTP
#[async_trait]
pub trait GraphClient: Send + Sync {
    /// Create a node, replacing any node with the same id
    async fn add_node(&self, node: Node) -> SdkResult<()>;

    /// Append an edge between two existing nodes
    async fn add_edge(&self, edge: Edge) -> SdkResult<()>;

    /// Fetch a node; `Ok(None)` when it does not exist
    async fn get_node(&self, id: &str) -> SdkResult<Option<Node>>;

    /// Export the whole graph
    async fn export(&self) -> SdkResult<GraphSnapshot>;

    /// Remove every node and edge
    async fn clear(&self) -> SdkResult<()>;

    /// Liveness check, returns the reported health string
    async fn health(&self) -> SdkResult<String>;

    /// Get server status
    async fn status(&self) -> SdkResult<ServerStatus>;

    /// Export the graph and summarize it, keeping `top` nodes per degree ranking
    async fn analyze(&self, top: usize) -> SdkResult<GraphAnalysis> {
        let snapshot = self.export().await?;
        Ok(GraphAnalysis::from_snapshot(&snapshot, top))
    }
}
