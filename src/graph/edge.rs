//! Edge implementation for the graph store
//!
//! Edges are directed and carry no identity of their own. Several edges
//! with the same endpoints and label may coexist.

use super::types::{Label, NodeId};
use serde::{Deserialize, Serialize};

/// A directed edge in the graph
///
/// Wire form uses capitalized field names (`From`, `To`, `Label`); the
/// lowercase spellings are accepted on input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    /// Source node (edge goes FROM this node)
    #[serde(rename = "From", alias = "from", default)]
    pub from: NodeId,

    /// Target node (edge goes TO this node)
    #[serde(rename = "To", alias = "to", default)]
    pub to: NodeId,

    /// Optional relationship label
    #[serde(
        rename = "Label",
        alias = "label",
        default,
        skip_serializing_if = "label_is_absent"
    )]
    pub label: Option<Label>,
}

fn label_is_absent(label: &Option<Label>) -> bool {
    label.as_ref().map_or(true, Label::is_empty)
}

impl Edge {
    /// Create an unlabeled edge
    pub fn new(from: impl Into<NodeId>, to: impl Into<NodeId>) -> Self {
        Edge {
            from: from.into(),
            to: to.into(),
            label: None,
        }
    }

    /// Create a labeled edge
    pub fn new_with_label(
        from: impl Into<NodeId>,
        to: impl Into<NodeId>,
        label: impl Into<Label>,
    ) -> Self {
        Edge::new(from, to).normalized_with(Some(label.into()))
    }

    /// Label as a plain string, if any
    pub fn label_str(&self) -> Option<&str> {
        self.label.as_ref().map(Label::as_str)
    }

    /// Collapse an empty label into "no label"
    pub(crate) fn normalize(&mut self) {
        if label_is_absent(&self.label) {
            self.label = None;
        }
    }

    fn normalized_with(mut self, label: Option<Label>) -> Self {
        self.label = label;
        self.normalize();
        self
    }
}
