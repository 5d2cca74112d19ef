//! EmbeddedClient — in-process graph store client
//!
//! Calls GraphStore directly, no network needed.

use async_trait::async_trait;
use edgeline::{Edge, GraphSnapshot, GraphStore, Node};
use std::sync::Arc;

use crate::client::GraphClient;
use crate::error::SdkResult;
use crate::models::{ServerStatus, StorageStats};

/// In-process client that wraps a GraphStore directly.
///
/// No network overhead — operations execute in the same process.
pub struct EmbeddedClient {
    store: Arc<GraphStore>,
}

impl EmbeddedClient {
    /// Create a new EmbeddedClient with a fresh empty graph store
    pub fn new() -> Self {
        Self {
            store: Arc::new(GraphStore::new()),
        }
    }

    /// Create an EmbeddedClient wrapping an existing store
    pub fn with_store(store: Arc<GraphStore>) -> Self {
        Self { store }
    }
}

impl Default for EmbeddedClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl GraphClient for EmbeddedClient {
    async fn add_node(&self, node: Node) -> SdkResult<()> {
        Ok(self.store.add_node(node)?)
    }

    async fn add_edge(&self, edge: Edge) -> SdkResult<()> {
        Ok(self.store.add_edge(edge)?)
    }

    async fn get_node(&self, id: &str) -> SdkResult<Option<Node>> {
        Ok(self.store.get_node(id))
    }

    async fn export(&self) -> SdkResult<GraphSnapshot> {
        Ok(self.store.export())
    }

    async fn clear(&self) -> SdkResult<()> {
        self.store.clear();
        Ok(())
    }

    async fn health(&self) -> SdkResult<String> {
        Ok("healthy".to_string())
    }

    async fn status(&self) -> SdkResult<ServerStatus> {
        Ok(ServerStatus {
            status: "healthy".to_string(),
            version: edgeline::VERSION.to_string(),
            storage: StorageStats {
                nodes: self.store.node_count() as u64,
                edges: self.store.edge_count() as u64,
            },
        })
    }
}
