//! Tree owner: update application and version stamping

use fxhash::{FxHashMap, FxHashSet};

use crate::core::table::{CacheStats, TableConfig, TableInfo, TableInfoCache};
use crate::utils::error::{TreeError, TreeResult};

use super::{AxNode, NodeArena, NodeData, NodeId, TreeSource, TreeUpdate};

/// An accessibility tree plus the table structures derived from it
#[derive(Debug, Default)]
pub struct AxTree {
    pub(crate) nodes: NodeArena,
    root_id: Option<NodeId>,
    /// Last version stamp handed out
    version: u64,
    pub(crate) table_cache: TableInfoCache,
}

/// Validated shape of an update, computed before anything is mutated
struct UpdatePlan {
    root_id: NodeId,
    replaces_root: bool,
    /// Child id -> parent id for every child listed in the update
    new_parent: FxHashMap<NodeId, NodeId>,
}

impl AxTree {
    /// Build a tree from its initial update
    pub fn new(update: TreeUpdate) -> TreeResult<Self> {
        Self::with_config(update, TableConfig::default())
    }

    pub fn with_config(update: TreeUpdate, config: TableConfig) -> TreeResult<Self> {
        let mut tree = AxTree {
            table_cache: TableInfoCache::new(config),
            ..Default::default()
        };
        tree.unserialize(update)?;
        Ok(tree)
    }

    pub fn root(&self) -> Option<&AxNode> {
        self.root_id.and_then(|id| self.nodes.node(id))
    }

    pub fn root_id(&self) -> Option<NodeId> {
        self.root_id
    }

    pub fn get_from_id(&self, id: NodeId) -> Option<&AxNode> {
        self.nodes.node(id)
    }

    pub fn parent_of(&self, id: NodeId) -> Option<&AxNode> {
        self.nodes
            .node(id)
            .and_then(|n| n.parent())
            .and_then(|p| self.nodes.node(p))
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn nodes(&self) -> &NodeArena {
        &self.nodes
    }

    /// Ids of every node, in document order
    pub fn document_order(&self) -> Vec<NodeId> {
        let mut out = Vec::with_capacity(self.nodes.len());
        let mut stack: Vec<NodeId> = self.root_id.into_iter().collect();
        while let Some(id) = stack.pop() {
            if let Some(node) = self.nodes.node(id) {
                out.push(id);
                stack.extend(node.children().iter().rev());
            }
        }
        out
    }

    /// Table structure for `id`, or `None` if it is not a table
    pub fn table_info(&mut self, id: NodeId) -> Option<&TableInfo> {
        self.table_cache.get(&self.nodes, id)
    }

    pub fn table_config(&self) -> &TableConfig {
        self.table_cache.config()
    }

    /// Toggle synthesized column and header-container nodes
    pub fn set_enable_extra_mac_nodes(&mut self, enabled: bool) {
        let config = TableConfig {
            enable_extra_mac_nodes: enabled,
            ..self.table_cache.config().clone()
        };
        self.table_cache.set_config(config);
    }

    pub fn table_cache_stats(&self) -> CacheStats {
        self.table_cache.stats()
    }

    /// Apply an update. On error the tree is left unchanged.
    pub fn unserialize(&mut self, update: TreeUpdate) -> TreeResult<()> {
        let plan = self.plan(&update)?;
        if plan.replaces_root {
            tracing::debug!(root_id = plan.root_id, "replacing tree root");
            self.nodes.clear();
            self.table_cache.clear();
        }
        self.apply(update, plan);
        Ok(())
    }

    fn plan(&self, update: &TreeUpdate) -> TreeResult<UpdatePlan> {
        let (root_id, replaces_root) = match (update.root_id, self.root_id) {
            (Some(new), Some(old)) => (new, new != old),
            (Some(new), None) => (new, true),
            (None, Some(old)) => (old, false),
            (None, None) => return Err(TreeError::MissingRoot),
        };

        let empty = NodeArena::new();
        let existing = if replaces_root { &empty } else { &self.nodes };

        let mut in_update: FxHashMap<NodeId, &NodeData> = FxHashMap::default();
        for data in &update.nodes {
            if data.id <= 0 {
                return Err(TreeError::InvalidId { id: data.id });
            }
            in_update.insert(data.id, data);
        }

        if !in_update.contains_key(&root_id) && !existing.contains(root_id) {
            return Err(TreeError::RootNotFound { root_id });
        }

        let mut new_parent: FxHashMap<NodeId, NodeId> = FxHashMap::default();
        for data in &update.nodes {
            for &child_id in &data.child_ids {
                if child_id <= 0 {
                    return Err(TreeError::InvalidId { id: child_id });
                }
                if !in_update.contains_key(&child_id) && !existing.contains(child_id) {
                    return Err(TreeError::UnknownChild {
                        parent_id: data.id,
                        child_id,
                    });
                }
                if child_id == root_id {
                    return Err(TreeError::Cycle { id: root_id });
                }
                if new_parent.insert(child_id, data.id).is_some() {
                    return Err(TreeError::DuplicateChild { child_id });
                }
            }
        }

        for (&child_id, &new_parent_id) in &new_parent {
            let old_parent = existing.node(child_id).and_then(|n| n.parent());
            if let Some(old_parent_id) = old_parent {
                if old_parent_id != new_parent_id && !in_update.contains_key(&old_parent_id) {
                    return Err(TreeError::Reparented {
                        child_id,
                        old_parent_id,
                        new_parent_id,
                    });
                }
            }
        }

        // Parent of `id` once the update is applied; nodes whose old parent
        // drops them without a new parent resolve to None.
        let effective_parent = |id: NodeId| -> Option<NodeId> {
            new_parent.get(&id).copied().or_else(|| {
                existing
                    .node(id)
                    .and_then(|n| n.parent())
                    .filter(|p| !in_update.contains_key(p))
            })
        };

        let limit = existing.len() + in_update.len() + 1;
        for id in update.nodes.iter().map(|d| d.id) {
            if id != root_id && effective_parent(id).is_none() {
                return Err(TreeError::Orphan { id });
            }
            let mut current = id;
            let mut steps = 0;
            while let Some(parent_id) = effective_parent(current) {
                steps += 1;
                if parent_id == id || steps > limit {
                    return Err(TreeError::Cycle { id });
                }
                current = parent_id;
            }
        }

        Ok(UpdatePlan {
            root_id,
            replaces_root,
            new_parent,
        })
    }

    fn apply(&mut self, update: TreeUpdate, plan: UpdatePlan) {
        self.version += 1;
        let stamp = self.version;
        let UpdatePlan {
            root_id,
            new_parent,
            ..
        } = plan;

        // Children dropped from an updated parent and not adopted elsewhere.
        let mut dropped = Vec::new();
        for data in &update.nodes {
            if let Some(old) = self.nodes.node(data.id) {
                dropped.extend(
                    old.children()
                        .iter()
                        .copied()
                        .filter(|c| !new_parent.contains_key(c)),
                );
            }
        }
        let mut deleted = FxHashSet::default();
        for id in dropped {
            self.delete_subtree(id, &new_parent, &mut deleted);
        }

        let touched: Vec<NodeId> = update.nodes.iter().map(|d| d.id).collect();
        for data in update.nodes {
            let id = data.id;
            let parent = if id == root_id {
                None
            } else {
                new_parent
                    .get(&id)
                    .copied()
                    .or_else(|| self.nodes.node(id).and_then(|n| n.parent()))
            };
            self.nodes.insert(AxNode::new(data, parent, stamp));
        }
        for (&child_id, &parent_id) in &new_parent {
            if let Some(child) = self.nodes.get_mut(child_id) {
                child.parent = Some(parent_id);
            }
        }
        for id in touched {
            self.stamp_ancestors(id, stamp);
        }

        self.root_id = Some(root_id);
        tracing::trace!(
            version = stamp,
            deleted = deleted.len(),
            nodes = self.nodes.len(),
            "applied tree update"
        );
    }

    fn delete_subtree(
        &mut self,
        id: NodeId,
        keep: &FxHashMap<NodeId, NodeId>,
        deleted: &mut FxHashSet<NodeId>,
    ) {
        let mut stack = vec![id];
        while let Some(id) = stack.pop() {
            if let Some(node) = self.nodes.remove(id) {
                self.table_cache.remove(id);
                deleted.insert(id);
                stack.extend(
                    node.children()
                        .iter()
                        .copied()
                        .filter(|c| !keep.contains_key(c)),
                );
            }
        }
    }

    fn stamp_ancestors(&mut self, id: NodeId, stamp: u64) {
        let mut current = Some(id);
        while let Some(node_id) = current {
            match self.nodes.get_mut(node_id) {
                Some(node) => {
                    node.subtree_version = stamp;
                    current = node.parent;
                }
                None => break,
            }
        }
    }
}

impl TreeSource for AxTree {
    fn node(&self, id: NodeId) -> Option<&AxNode> {
        self.nodes.node(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Role;

    fn simple_tree() -> AxTree {
        AxTree::new(TreeUpdate::new(
            1,
            vec![
                NodeData::new(1, Role::RootWebArea).with_children(vec![2, 3]),
                NodeData::new(2, Role::GenericContainer).with_children(vec![4]),
                NodeData::new(3, Role::StaticText),
                NodeData::new(4, Role::StaticText),
            ],
        ))
        .unwrap()
    }

    #[test]
    fn test_initial_tree() {
        let tree = simple_tree();
        assert_eq!(tree.len(), 4);
        assert_eq!(tree.root().map(|n| n.id()), Some(1));
        assert_eq!(tree.parent_of(4).map(|n| n.id()), Some(2));
        assert!(tree.parent_of(1).is_none());
        assert_eq!(tree.document_order(), vec![1, 2, 4, 3]);
    }

    #[test]
    fn test_first_update_needs_root() {
        let err = AxTree::new(TreeUpdate::patch(vec![NodeData::new(1, Role::Table)]));
        assert_eq!(err.unwrap_err(), TreeError::MissingRoot);
    }

    #[test]
    fn test_version_bumps_ancestors_only() {
        let mut tree = simple_tree();
        let before_3 = tree.get_from_id(3).unwrap().subtree_version();

        tree.unserialize(TreeUpdate::patch(vec![NodeData::new(4, Role::Cell)]))
            .unwrap();

        let v4 = tree.get_from_id(4).unwrap().subtree_version();
        assert_eq!(tree.get_from_id(2).unwrap().subtree_version(), v4);
        assert_eq!(tree.get_from_id(1).unwrap().subtree_version(), v4);
        assert_eq!(tree.get_from_id(3).unwrap().subtree_version(), before_3);
        assert!(v4 > before_3);
    }

    #[test]
    fn test_dropped_children_are_deleted() {
        let mut tree = simple_tree();
        tree.unserialize(TreeUpdate::patch(vec![
            NodeData::new(1, Role::RootWebArea).with_children(vec![3])
        ]))
        .unwrap();
        assert!(tree.get_from_id(2).is_none());
        assert!(tree.get_from_id(4).is_none());
        assert_eq!(tree.len(), 2);
    }

    #[test]
    fn test_move_within_update() {
        let mut tree = simple_tree();
        tree.unserialize(TreeUpdate::patch(vec![
            NodeData::new(2, Role::GenericContainer),
            NodeData::new(1, Role::RootWebArea).with_children(vec![2, 3, 4]),
        ]))
        .unwrap();
        assert_eq!(tree.len(), 4);
        assert_eq!(tree.parent_of(4).map(|n| n.id()), Some(1));
    }

    #[test]
    fn test_invalid_updates_leave_tree_untouched() {
        let mut tree = simple_tree();

        let err = tree.unserialize(TreeUpdate::patch(vec![
            NodeData::new(3, Role::StaticText).with_children(vec![99])
        ]));
        assert_eq!(
            err.unwrap_err(),
            TreeError::UnknownChild {
                parent_id: 3,
                child_id: 99
            }
        );

        let err = tree.unserialize(TreeUpdate::patch(vec![
            NodeData::new(3, Role::StaticText).with_children(vec![4])
        ]));
        assert!(matches!(err, Err(TreeError::Reparented { child_id: 4, .. })));

        let err = tree.unserialize(TreeUpdate::patch(vec![
            NodeData::new(2, Role::GenericContainer).with_children(vec![4, 1])
        ]));
        assert_eq!(err.unwrap_err(), TreeError::Cycle { id: 1 });

        let err = tree.unserialize(TreeUpdate::patch(vec![
            NodeData::new(1, Role::RootWebArea).with_children(vec![3]),
            NodeData::new(2, Role::GenericContainer).with_children(vec![4]),
            NodeData::new(4, Role::StaticText).with_children(vec![2]),
        ]));
        assert!(matches!(err, Err(TreeError::Cycle { .. })));

        let err = tree.unserialize(TreeUpdate::patch(vec![NodeData::new(8, Role::Cell)]));
        assert_eq!(err.unwrap_err(), TreeError::Orphan { id: 8 });

        assert_eq!(tree.document_order(), vec![1, 2, 4, 3]);
    }

    #[test]
    fn test_new_root_replaces_tree() {
        let mut tree = simple_tree();
        tree.unserialize(TreeUpdate::new(10, vec![NodeData::new(10, Role::Table)]))
            .unwrap();
        assert_eq!(tree.len(), 1);
        assert_eq!(tree.root_id(), Some(10));
    }
}
