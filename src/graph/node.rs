//! Node implementation for the graph store

use super::types::{NodeId, PropertyMap};
use serde::{Deserialize, Deserializer, Serialize};

/// A node in the graph
///
/// Nodes have:
/// - A unique string ID
/// - Optional string properties
///
/// Wire form is `{"id": ..., "props": {...}}`; `props` is omitted when empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    /// Unique identifier for this node
    #[serde(default)]
    pub id: NodeId,

    /// Properties associated with this node
    #[serde(
        default,
        deserialize_with = "null_as_empty",
        skip_serializing_if = "PropertyMap::is_empty"
    )]
    pub props: PropertyMap,
}

/// `"props": null` decodes the same as an absent `props`
fn null_as_empty<'de, D>(deserializer: D) -> Result<PropertyMap, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<PropertyMap>::deserialize(deserializer)?.unwrap_or_default())
}

impl Node {
    /// Create a new node without properties
    pub fn new(id: impl Into<NodeId>) -> Self {
        Node {
            id: id.into(),
            props: PropertyMap::new(),
        }
    }

    /// Create a new node with properties
    pub fn new_with_properties(id: impl Into<NodeId>, props: PropertyMap) -> Self {
        Node {
            id: id.into(),
            props,
        }
    }

    /// Builder-style property setter
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.props.insert(key.into(), value.into());
        self
    }

    pub fn get_property(&self, key: &str) -> Option<&str> {
        self.props.get(key).map(String::as_str)
    }
}
