//! In-memory graph storage implementation
//!
//! Nodes live in a hash map keyed by id, edges in an append-only vector.
//! Both sit behind one reader/writer lock: the referential check in
//! `add_edge` reads the node map and writes the edge list, so the two
//! collections are never locked separately.

use super::edge::Edge;
use super::node::Node;
use super::snapshot::{GraphSnapshot, GraphStats};
use super::types::NodeId;
use parking_lot::RwLock;
use std::collections::HashMap;
use thiserror::Error;

/// Broad classification of store failures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed input (empty required identifier)
    Validation,
    /// Edge references a node that does not exist
    Referential,
}

/// Errors that can occur during graph operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("node ID cannot be empty")]
    EmptyNodeId,

    #[error("edge From and To cannot be empty")]
    EmptyEdgeEndpoint,

    #[error("source node {0} does not exist")]
    InvalidEdgeSource(NodeId),

    #[error("target node {0} does not exist")]
    InvalidEdgeTarget(NodeId),
}

impl GraphError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            GraphError::EmptyNodeId | GraphError::EmptyEdgeEndpoint => ErrorKind::Validation,
            GraphError::InvalidEdgeSource(_) | GraphError::InvalidEdgeTarget(_) => {
                ErrorKind::Referential
            }
        }
    }
}

pub type GraphResult<T> = Result<T, GraphError>;

#[derive(Debug, Default)]
struct GraphData {
    /// Node storage: NodeId -> Node
    nodes: HashMap<NodeId, Node>,

    /// Edges in insertion order
    edges: Vec<Edge>,
}

/// In-memory graph storage
///
/// All methods take `&self`; share the store between tasks with
/// `Arc<GraphStore>`. Reads return owned copies, never references into
/// the guarded collections.
#[derive(Debug, Default)]
pub struct GraphStore {
    data: RwLock<GraphData>,
}

impl GraphStore {
    /// Create a new empty graph store
    pub fn new() -> Self {
        GraphStore {
            data: RwLock::new(GraphData::default()),
        }
    }

    /// Insert a node, replacing any node stored under the same id
    ///
    /// Replacement is total: properties of the previous node are dropped,
    /// not merged.
    pub fn add_node(&self, node: Node) -> GraphResult<()> {
        if node.id.is_empty() {
            return Err(GraphError::EmptyNodeId);
        }

        let mut data = self.data.write();
        data.nodes.insert(node.id.clone(), node);
        Ok(())
    }

    /// Append an edge between two existing nodes
    ///
    /// The source is checked before the target, so a missing source is
    /// reported even when the target is missing too. Duplicate edges are
    /// accepted as-is.
    pub fn add_edge(&self, mut edge: Edge) -> GraphResult<()> {
        if edge.from.is_empty() || edge.to.is_empty() {
            return Err(GraphError::EmptyEdgeEndpoint);
        }
        edge.normalize();

        let mut data = self.data.write();

        // Validate nodes exist
        if !data.nodes.contains_key(&edge.from) {
            return Err(GraphError::InvalidEdgeSource(edge.from));
        }
        if !data.nodes.contains_key(&edge.to) {
            return Err(GraphError::InvalidEdgeTarget(edge.to));
        }

        data.edges.push(edge);
        Ok(())
    }

    /// Look up a node by id
    pub fn get_node(&self, id: &str) -> Option<Node> {
        self.data.read().nodes.get(id).cloned()
    }

    /// Get total number of nodes
    pub fn node_count(&self) -> usize {
        self.data.read().nodes.len()
    }

    /// Get total number of edges
    pub fn edge_count(&self) -> usize {
        self.data.read().edges.len()
    }

    /// Copy out every node and edge together with their counts
    pub fn export(&self) -> GraphSnapshot {
        let data = self.data.read();

        GraphSnapshot {
            nodes: data
                .nodes
                .iter()
                .map(|(id, node)| (id.clone(), node.clone()))
                .collect(),
            edges: data.edges.clone(),
            stats: GraphStats {
                node_count: data.nodes.len(),
                edge_count: data.edges.len(),
            },
        }
    }

    /// Drop all nodes and edges
    pub fn clear(&self) {
        let mut data = self.data.write();
        *data = GraphData::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::types::PropertyMap;

    fn props(pairs: &[(&str, &str)]) -> PropertyMap {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_add_and_get_node() {
        let store = GraphStore::new();
        let node = Node::new_with_properties("alice", props(&[("team", "core")]));
        store.add_node(node.clone()).unwrap();

        assert_eq!(store.node_count(), 1);
        assert_eq!(store.get_node("alice"), Some(node));
    }

    #[test]
    fn test_get_missing_node() {
        let store = GraphStore::new();
        assert_eq!(store.get_node("nobody"), None);
        assert_eq!(store.node_count(), 0);
    }

    #[test]
    fn test_add_node_empty_id() {
        let store = GraphStore::new();
        let result = store.add_node(Node::new(""));
        assert_eq!(result, Err(GraphError::EmptyNodeId));
        assert_eq!(result.unwrap_err().kind(), ErrorKind::Validation);
        assert_eq!(store.node_count(), 0);
    }

    #[test]
    fn test_readd_node_replaces_properties() {
        let store = GraphStore::new();
        store
            .add_node(Node::new_with_properties("a", props(&[("x", "1")])))
            .unwrap();
        store
            .add_node(Node::new_with_properties("a", props(&[("y", "2")])))
            .unwrap();

        let node = store.get_node("a").unwrap();
        assert_eq!(node.props, props(&[("y", "2")]));
        assert_eq!(store.node_count(), 1);
    }

    #[test]
    fn test_edge_validation() {
        let store = GraphStore::new();
        store.add_node(Node::new("a")).unwrap();

        let result = store.add_edge(Edge::new("", "a"));
        assert_eq!(result, Err(GraphError::EmptyEdgeEndpoint));

        let result = store.add_edge(Edge::new("a", ""));
        assert_eq!(result, Err(GraphError::EmptyEdgeEndpoint));

        // Invalid source node
        let result = store.add_edge(Edge::new("ghost", "a"));
        assert_eq!(result, Err(GraphError::InvalidEdgeSource(NodeId::new("ghost"))));

        // Invalid target node
        let result = store.add_edge(Edge::new("a", "ghost"));
        assert_eq!(result, Err(GraphError::InvalidEdgeTarget(NodeId::new("ghost"))));
        assert_eq!(result.unwrap_err().kind(), ErrorKind::Referential);

        assert_eq!(store.edge_count(), 0);
    }

    #[test]
    fn test_missing_source_reported_first() {
        let store = GraphStore::new();
        let result = store.add_edge(Edge::new("x", "y"));
        assert_eq!(result, Err(GraphError::InvalidEdgeSource(NodeId::new("x"))));
    }

    #[test]
    fn test_edges_keep_insertion_order() {
        let store = GraphStore::new();
        for id in ["a", "b", "c"] {
            store.add_node(Node::new(id)).unwrap();
        }

        let e1 = Edge::new_with_label("a", "b", "first");
        let e2 = Edge::new("c", "a");
        let e3 = Edge::new_with_label("b", "c", "third");
        store.add_edge(e1.clone()).unwrap();
        store.add_edge(e2.clone()).unwrap();
        store.add_edge(e3.clone()).unwrap();

        assert_eq!(store.export().edges, vec![e1, e2, e3]);
    }

    #[test]
    fn test_duplicate_edges_allowed() {
        let store = GraphStore::new();
        store.add_node(Node::new("a")).unwrap();
        store.add_node(Node::new("b")).unwrap();

        let edge = Edge::new_with_label("a", "b", "knows");
        store.add_edge(edge.clone()).unwrap();
        store.add_edge(edge.clone()).unwrap();

        assert_eq!(store.edge_count(), 2);
    }

    #[test]
    fn test_self_loop() {
        let store = GraphStore::new();
        store.add_node(Node::new("a")).unwrap();
        store.add_edge(Edge::new("a", "a")).unwrap();
        assert_eq!(store.edge_count(), 1);
    }

    #[test]
    fn test_empty_label_stored_as_none() {
        let store = GraphStore::new();
        store.add_node(Node::new("a")).unwrap();
        store.add_node(Node::new("b")).unwrap();

        let mut edge = Edge::new("a", "b");
        edge.label = Some("".into());
        store.add_edge(edge).unwrap();

        assert_eq!(store.export().edges[0].label, None);
    }

    #[test]
    fn test_export_stats_match_contents() {
        let store = GraphStore::new();
        store.add_node(Node::new("alice")).unwrap();
        store.add_node(Node::new("bob")).unwrap();
        store
            .add_edge(Edge::new_with_label("alice", "bob", "reports_to"))
            .unwrap();

        let snapshot = store.export();
        assert_eq!(snapshot.stats.node_count, snapshot.nodes.len());
        assert_eq!(snapshot.stats.edge_count, snapshot.edges.len());
        assert_eq!(snapshot.stats, GraphStats { node_count: 2, edge_count: 1 });
    }

    #[test]
    fn test_export_is_a_copy() {
        let store = GraphStore::new();
        store.add_node(Node::new("a")).unwrap();

        let mut snapshot = store.export();
        snapshot.nodes.clear();
        snapshot.edges.push(Edge::new("a", "a"));

        assert_eq!(store.node_count(), 1);
        assert_eq!(store.edge_count(), 0);
    }

    #[test]
    fn test_clear() {
        let store = GraphStore::new();
        store.add_node(Node::new("a")).unwrap();
        store.add_node(Node::new("b")).unwrap();
        store.add_edge(Edge::new("a", "b")).unwrap();

        store.clear();
        assert_eq!(store.node_count(), 0);
        assert_eq!(store.edge_count(), 0);
        assert!(store.export().is_empty());

        // Cleared nodes no longer satisfy the referential check
        let result = store.add_edge(Edge::new("a", "b"));
        assert_eq!(result, Err(GraphError::InvalidEdgeSource(NodeId::new("a"))));
    }

    #[test]
    fn test_clear_empty_store() {
        let store = GraphStore::new();
        store.clear();
        assert_eq!(store.export(), GraphSnapshot::default());
    }
}
