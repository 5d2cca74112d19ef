//! Edgeline Graph Store
//!
//! An in-memory graph of string-identified nodes and directed, optionally
//! labeled edges, exposed over HTTP.
//!
//! # Architecture
//!
//! - [`graph::GraphStore`] owns all nodes and edges behind a single
//!   reader/writer lock and enforces that every edge joins two existing
//!   nodes at the moment it is added.
//! - [`http`] maps HTTP routes 1:1 onto store operations.
//! - [`config::ServerConfig`] carries bind address, timeouts and CORS
//!   settings for the server binary.
//!
//! Nothing is persisted; a restart starts from an empty graph.
//!
//! ## Example Usage
//!
//! ```rust
//! use edgeline::graph::{Edge, GraphStore, Node};
//!
//! let store = GraphStore::new();
//!
//! store.add_node(Node::new("alice").with_property("role", "engineer")).unwrap();
//! store.add_node(Node::new("bob")).unwrap();
//! store.add_edge(Edge::new_with_label("alice", "bob", "reports_to")).unwrap();
//!
//! let snapshot = store.export();
//! assert_eq!(snapshot.stats.node_count, 2);
//! assert_eq!(snapshot.stats.edge_count, 1);
//! ```

#![warn(clippy::all)]

pub mod config;
pub mod graph;
pub mod http;

// Re-export main types for convenience
pub use config::ServerConfig;
pub use graph::{
    Edge, ErrorKind, GraphError, GraphResult, GraphSnapshot, GraphStats, GraphStore, Label,
    Node, NodeId, PropertyMap,
};
pub use http::{build_router, HttpServer};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        let ver = version();
        assert!(!ver.is_empty());
        assert_eq!(ver, "0.1.0");
    }
}
