//! Table info cache
//!
//! One [`TableInfo`] per table node, reused while the node's subtree version
//! is unchanged and rebuilt from scratch otherwise.

use fxhash::FxHashMap;

use crate::core::tree::{NodeId, TreeSource};

use super::classify::is_table_like;
use super::info::TableInfo;

/// Options for table inference
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableConfig {
    /// Synthesize column and header-container nodes
    pub enable_extra_mac_nodes: bool,
}

impl TableConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_extra_mac_nodes() -> Self {
        Self {
            enable_extra_mac_nodes: true,
        }
    }
}

/// Cache counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub entries: usize,
    pub hits: usize,
    pub builds: usize,
}

/// Per-table cache keyed by node id
#[derive(Debug, Default)]
pub struct TableInfoCache {
    entries: FxHashMap<NodeId, TableInfo>,
    config: TableConfig,
    hits: usize,
    builds: usize,
}

impl TableInfoCache {
    pub fn new(config: TableConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    /// Structure of table node `id`, rebuilt if its subtree changed.
    /// `None` if `id` is missing or not a table.
    pub fn get<T: TreeSource + ?Sized>(&mut self, tree: &T, id: NodeId) -> Option<&TableInfo> {
        let Some(node) = tree.node(id) else {
            self.entries.remove(&id);
            return None;
        };
        if !is_table_like(node.role()) {
            // The node may have been a table before its role changed.
            self.entries.remove(&id);
            return None;
        }

        let version = node.subtree_version();
        let fresh = self
            .entries
            .get(&id)
            .is_some_and(|info| info.source_version == version);
        if fresh {
            self.hits += 1;
            tracing::trace!(table_id = id, version, "table info cache hit");
        } else {
            self.builds += 1;
            let info = TableInfo::build(tree, node, &self.config);
            tracing::debug!(
                table_id = id,
                version,
                rows = info.row_count,
                cols = info.col_count,
                warnings = info.warnings.len(),
                "built table info"
            );
            self.entries.insert(id, info);
        }
        self.entries.get(&id)
    }

    /// Drop the entry for a deleted node
    pub fn remove(&mut self, id: NodeId) -> Option<TableInfo> {
        self.entries.remove(&id)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    /// Replace the config; every entry is dropped since it may depend on it
    pub fn set_config(&mut self, config: TableConfig) {
        if config != self.config {
            self.config = config;
            self.entries.clear();
        }
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            entries: self.entries.len(),
            hits: self.hits,
            builds: self.builds,
        }
    }
}
