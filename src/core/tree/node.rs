//! Node data and arena entries

use crate::data::{IntAttribute, IntListAttribute, Role};

use super::NodeId;

/// Serializable node payload: what a tree update carries for one node
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "json",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase", default)
)]
pub struct NodeData {
    pub id: NodeId,
    pub role: Role,
    /// Ignored nodes are transparent to table inference
    pub ignored: bool,
    pub int_attributes: Vec<(IntAttribute, i32)>,
    pub int_list_attributes: Vec<(IntListAttribute, Vec<i32>)>,
    pub child_ids: Vec<NodeId>,
}

impl NodeData {
    pub fn new(id: NodeId, role: Role) -> Self {
        Self {
            id,
            role,
            ..Default::default()
        }
    }

    pub fn with_int(mut self, attr: IntAttribute, value: i32) -> Self {
        self.add_int_attribute(attr, value);
        self
    }

    pub fn with_int_list(mut self, attr: IntListAttribute, value: Vec<i32>) -> Self {
        self.add_int_list_attribute(attr, value);
        self
    }

    pub fn with_children(mut self, child_ids: Vec<NodeId>) -> Self {
        self.child_ids = child_ids;
        self
    }

    pub fn with_ignored(mut self) -> Self {
        self.ignored = true;
        self
    }

    /// Set an integer attribute, replacing any previous value
    pub fn add_int_attribute(&mut self, attr: IntAttribute, value: i32) {
        match self.int_attributes.iter_mut().find(|(a, _)| *a == attr) {
            Some(entry) => entry.1 = value,
            None => self.int_attributes.push((attr, value)),
        }
    }

    pub fn int_attribute(&self, attr: IntAttribute) -> Option<i32> {
        self.int_attributes
            .iter()
            .find(|(a, _)| *a == attr)
            .map(|(_, v)| *v)
    }

    pub fn int_attribute_or(&self, attr: IntAttribute, default: i32) -> i32 {
        self.int_attribute(attr).unwrap_or(default)
    }

    /// Set an integer-list attribute, replacing any previous value
    pub fn add_int_list_attribute(&mut self, attr: IntListAttribute, value: Vec<i32>) {
        match self.int_list_attributes.iter_mut().find(|(a, _)| *a == attr) {
            Some(entry) => entry.1 = value,
            None => self.int_list_attributes.push((attr, value)),
        }
    }

    pub fn int_list_attribute(&self, attr: IntListAttribute) -> Option<&[i32]> {
        self.int_list_attributes
            .iter()
            .find(|(a, _)| *a == attr)
            .map(|(_, v)| v.as_slice())
    }
}

/// A node as stored in the tree arena
///
/// Parent links are plain ids; the arena owns every node.
#[derive(Debug, Clone)]
pub struct AxNode {
    pub(crate) data: NodeData,
    pub(crate) parent: Option<NodeId>,
    /// Stamp of the most recent change anywhere in this node's subtree
    pub(crate) subtree_version: u64,
}

impl AxNode {
    pub fn new(data: NodeData, parent: Option<NodeId>, subtree_version: u64) -> Self {
        Self {
            data,
            parent,
            subtree_version,
        }
    }

    pub fn id(&self) -> NodeId {
        self.data.id
    }

    pub fn role(&self) -> Role {
        self.data.role
    }

    pub fn data(&self) -> &NodeData {
        &self.data
    }

    pub fn is_ignored(&self) -> bool {
        self.data.ignored
    }

    pub fn children(&self) -> &[NodeId] {
        &self.data.child_ids
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn subtree_version(&self) -> u64 {
        self.subtree_version
    }

    pub fn int_attribute(&self, attr: IntAttribute) -> Option<i32> {
        self.data.int_attribute(attr)
    }
}
