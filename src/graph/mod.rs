//! Core graph store implementation
//!
//! This module implements the graph data model:
//! - Nodes identified by strings, carrying string properties
//! - Directed edges with an optional label, kept in insertion order
//! - A single lock-guarded store enforcing that edges join existing nodes

pub mod edge;
pub mod node;
pub mod snapshot;
pub mod store;
pub mod types;

// Re-export main types
pub use edge::Edge;
pub use node::Node;
pub use snapshot::{GraphSnapshot, GraphStats};
pub use store::{ErrorKind, GraphError, GraphResult, GraphStore};
pub use types::{Label, NodeId, PropertyMap};
