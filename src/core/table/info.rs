//! Computed table structure

use fxhash::FxHashMap;

use crate::core::tree::{AxNode, NodeId, TreeSource};
use crate::utils::error::TableWarning;

use super::cache::TableConfig;
use super::cell::CellData;
use super::extra_nodes::{synthesize_extra_nodes, ExtraNode};
use super::grid::GridBuilder;
use super::headers::aggregate_headers;

/// Everything derived from one table node. Built wholesale, never patched.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "json",
    derive(serde::Serialize),
    serde(rename_all = "camelCase")
)]
pub struct TableInfo {
    pub table_id: NodeId,
    /// Row count declared on the table node, 0 if absent
    pub authored_row_count: usize,
    pub authored_col_count: usize,
    pub row_count: usize,
    pub col_count: usize,
    /// Row-major, `row_count` x `col_count`; 0 marks an empty slot
    pub cell_ids: Vec<Vec<NodeId>>,
    /// Distinct cells in document order
    pub unique_cell_ids: Vec<NodeId>,
    pub cell_id_to_index: FxHashMap<NodeId, usize>,
    /// Geometry of each entry in `unique_cell_ids`
    pub cell_data: Vec<CellData>,
    pub row_nodes: Vec<NodeId>,
    /// Row node id -> resolved row index
    pub row_id_to_index: FxHashMap<NodeId, usize>,
    pub row_headers: Vec<Vec<NodeId>>,
    pub col_headers: Vec<Vec<NodeId>>,
    pub all_headers: Vec<NodeId>,
    pub extra_mac_nodes: Vec<ExtraNode>,
    pub warnings: Vec<TableWarning>,
    /// Subtree version of the table node this was computed from
    pub source_version: u64,
}

impl TableInfo {
    /// Compute the structure of `table`. The caller has already checked
    /// that it is a table node.
    pub fn build<T: TreeSource + ?Sized>(tree: &T, table: &AxNode, config: &TableConfig) -> Self {
        let layout = GridBuilder::new(tree).build(table);
        let headers = aggregate_headers(&layout);
        let extra_mac_nodes = if config.enable_extra_mac_nodes {
            synthesize_extra_nodes(table.id(), &layout, &headers)
        } else {
            Vec::new()
        };

        TableInfo {
            table_id: table.id(),
            authored_row_count: layout.authored_row_count,
            authored_col_count: layout.authored_col_count,
            row_count: layout.row_count,
            col_count: layout.col_count,
            cell_ids: layout.cell_ids,
            unique_cell_ids: layout.unique_cell_ids,
            cell_id_to_index: layout.cell_id_to_index,
            cell_data: layout.cell_data,
            row_nodes: layout.row_nodes,
            row_id_to_index: layout.row_id_to_index,
            row_headers: headers.row_headers,
            col_headers: headers.col_headers,
            all_headers: headers.all_headers,
            extra_mac_nodes,
            warnings: layout.warnings,
            source_version: table.subtree_version(),
        }
    }

    /// Cell id at a grid slot, `None` if out of range or empty
    pub fn cell_id_at(&self, row: usize, col: usize) -> Option<NodeId> {
        self.cell_ids
            .get(row)
            .and_then(|r| r.get(col))
            .copied()
            .filter(|&id| id != 0)
    }

    pub fn cell_id_at_index(&self, index: usize) -> Option<NodeId> {
        self.unique_cell_ids.get(index).copied()
    }

    pub fn cell_data_for(&self, cell_id: NodeId) -> Option<&CellData> {
        self.cell_id_to_index
            .get(&cell_id)
            .and_then(|&i| self.cell_data.get(i))
    }

    pub fn extra_node(&self, id: NodeId) -> Option<&ExtraNode> {
        self.extra_mac_nodes.iter().find(|n| n.id() == id)
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}
