//! Point-in-time export of the whole graph

use super::edge::Edge;
use super::node::Node;
use super::types::NodeId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Counts taken in the same read acquisition as the exported data
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphStats {
    pub node_count: usize,
    pub edge_count: usize,
}

/// Owned copy of the store contents
///
/// `nodes` is keyed by id in sorted order so serialized output is stable.
/// `edges` keeps insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphSnapshot {
    pub nodes: BTreeMap<NodeId, Node>,
    pub edges: Vec<Edge>,
    pub stats: GraphStats,
}

impl GraphSnapshot {
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_snapshot_shape() {
        let snapshot = GraphSnapshot::default();
        assert!(snapshot.is_empty());
        assert_eq!(
            serde_json::to_value(&snapshot).unwrap(),
            serde_json::json!({
                "nodes": {},
                "edges": [],
                "stats": { "node_count": 0, "edge_count": 0 }
            })
        );
    }

    #[test]
    fn test_snapshot_decodes_export_body() {
        let body = r#"{
            "nodes": {"b": {"id": "b"}, "a": {"id": "a", "props": {"k": "v"}}},
            "edges": [{"From": "a", "To": "b", "Label": "x"}],
            "stats": {"node_count": 2, "edge_count": 1}
        }"#;
        let snapshot: GraphSnapshot = serde_json::from_str(body).unwrap();
        let ids: Vec<&str> = snapshot.nodes.keys().map(NodeId::as_str).collect();
        assert_eq!(ids, vec!["a", "b"]);
        assert_eq!(snapshot.edges, vec![Edge::new_with_label("a", "b", "x")]);
        assert!(!snapshot.is_empty());
    }
}
