//! Edgeline SDK — Client library for the Edgeline graph store
//!
//! Provides two client implementations:
//!
//! - **`EmbeddedClient`** — In-process, no network. Uses `GraphStore`
//!   directly. Ideal for tests and embedded applications.
//!
//! - **`RemoteClient`** — Connects to a running Edgeline server via HTTP.
//!
//! Both implement the `GraphClient` trait for a unified API, including
//! `analyze`, which summarizes an exported snapshot (counts, density,
//! top in/out degree).
//!
//! # Quick Start
//!
//! ```rust
//! use edgeline_sdk::{Edge, EmbeddedClient, GraphClient, Node};
//!
//! #[tokio::main]
//! async fn main() {
//!     let client = EmbeddedClient::new();
//!
//!     client.add_node(Node::new("alice")).await.unwrap();
//!     client.add_node(Node::new("bob")).await.unwrap();
//!     client.add_edge(Edge::new_with_label("alice", "bob", "reports_to")).await.unwrap();
//!
//!     let snapshot = client.export().await.unwrap();
//!     println!("{} nodes, {} edges", snapshot.stats.node_count, snapshot.stats.edge_count);
//! }
//! ```

pub mod analysis;
pub mod client;
pub mod embedded;
pub mod error;
pub mod models;
pub mod remote;

pub use analysis::{DegreeEntry, GraphAnalysis, DEFAULT_TOP};
pub use client::GraphClient;
pub use embedded::EmbeddedClient;
pub use remote::RemoteClient;
pub use error::{SdkError, SdkResult};
pub use models::{ServerStatus, StorageStats};

// Graph types (re-exported from edgeline core)
pub use edgeline::graph::{
    Edge, GraphSnapshot, GraphStats, GraphStore, Label, Node, NodeId, PropertyMap,
};

pub use edgeline::VERSION;
