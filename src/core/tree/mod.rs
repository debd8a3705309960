//! Accessibility tree arena
//!
//! The table core only reads the tree, through [`TreeSource`]. [`AxTree`] is a
//! small owner that applies [`TreeUpdate`]s, keeps parent back-references as
//! ids, and stamps every changed subtree with a fresh version number.

mod ax_tree;
mod node;

pub use ax_tree::AxTree;
pub use node::{AxNode, NodeData};

use fxhash::FxHashMap;

/// Node identity. Real nodes are positive; synthesized nodes are negative.
pub type NodeId = i32;

/// Read access to a tree of [`AxNode`]s
pub trait TreeSource {
    /// Look up a node by id
    fn node(&self, id: NodeId) -> Option<&AxNode>;
}

/// Id-indexed node storage
#[derive(Debug, Clone, Default)]
pub struct NodeArena {
    nodes: FxHashMap<NodeId, AxNode>,
}

impl NodeArena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut AxNode> {
        self.nodes.get_mut(&id)
    }

    pub fn insert(&mut self, node: AxNode) -> Option<AxNode> {
        self.nodes.insert(node.id(), node)
    }

    pub fn remove(&mut self, id: NodeId) -> Option<AxNode> {
        self.nodes.remove(&id)
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
    }

    pub fn ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes.keys().copied()
    }
}

impl TreeSource for NodeArena {
    fn node(&self, id: NodeId) -> Option<&AxNode> {
        self.nodes.get(&id)
    }
}

/// A batch of node replacements applied atomically
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "json",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase", default)
)]
pub struct TreeUpdate {
    /// Required for the first update; a different id replaces the whole tree
    pub root_id: Option<NodeId>,
    pub nodes: Vec<NodeData>,
}

impl TreeUpdate {
    pub fn new(root_id: NodeId, nodes: Vec<NodeData>) -> Self {
        Self {
            root_id: Some(root_id),
            nodes,
        }
    }

    /// An update against the current root
    pub fn patch(nodes: Vec<NodeData>) -> Self {
        Self {
            root_id: None,
            nodes,
        }
    }

    /// Parse an update from JSON
    #[cfg(feature = "json")]
    pub fn from_json(input: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(input)
    }
}
