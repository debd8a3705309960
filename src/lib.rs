//! # axtable
//!
//! Table structure inference over accessibility trees.
//!
//! ## Features
//!
//! - **Grid inference**: Row/column counts, per-slot cell ids and distinct
//!   cells, reconciling authored counts with actual row and column spans
//! - **Tolerant traversal**: Ignored nodes and generic wrappers between a
//!   table, its rows and its cells are looked through
//! - **Headers**: Row and column header lists fanned out over spans
//! - **Synthesized nodes**: Optional column and header-container nodes with
//!   negative ids for platforms that expect them
//! - **Caching**: One result per table, rebuilt only when the table's subtree
//!   version changes
//!
//! ## Usage Example
//!
//! ```rust
//! use axtable::{AxTree, IntAttribute, NodeData, Role, TreeUpdate};
//!
//! let mut tree = AxTree::new(TreeUpdate::new(
//!     1,
//!     vec![
//!         NodeData::new(1, Role::Table).with_children(vec![2, 3]),
//!         NodeData::new(2, Role::Row).with_children(vec![4, 5]),
//!         NodeData::new(3, Role::Row).with_children(vec![6]),
//!         NodeData::new(4, Role::ColumnHeader),
//!         NodeData::new(5, Role::ColumnHeader),
//!         NodeData::new(6, Role::Cell).with_int(IntAttribute::TableCellColumnSpan, 2),
//!     ],
//! ))
//! .unwrap();
//!
//! let info = tree.table_info(1).unwrap();
//! assert_eq!((info.row_count, info.col_count), (2, 2));
//! assert_eq!(info.cell_ids, vec![vec![4, 5], vec![6, 6]]);
//!
//! let headers: Vec<i32> = tree.table_cell_col_headers(6).iter().map(|n| n.id()).collect();
//! assert_eq!(headers, vec![4]);
//! ```

/// Core modules: tree model and table engine
pub mod core;

/// Data layer - role and attribute vocabularies
pub mod data;

/// Utility modules
pub mod utils;

// Re-export core types
pub use crate::core::table::{
    CacheStats, CellData, CellKind, ExtraNode, ExtraNodeKind, TableConfig, TableInfo,
    TableInfoCache,
};
pub use crate::core::tree::{AxNode, AxTree, NodeArena, NodeData, NodeId, TreeSource, TreeUpdate};

// Re-export data types
pub use data::{IntAttribute, IntListAttribute, Role};

// Re-export utilities
pub use utils::dump::{format_table_info, format_warnings};
pub use utils::error::{TableWarning, TreeError, TreeResult};

/// Compute the table structure of `table_id` without caching
///
/// Returns `None` if the node is missing or is not a table.
pub fn compute_table_info<T: TreeSource + ?Sized>(
    tree: &T,
    table_id: NodeId,
    config: &TableConfig,
) -> Option<TableInfo> {
    let node = tree.node(table_id)?;
    if !crate::core::table::is_table_like(node.role()) {
        return None;
    }
    Some(TableInfo::build(tree, node, config))
}

/// Ids of every table node in the tree, in document order
pub fn find_tables(tree: &AxTree) -> Vec<NodeId> {
    tree.document_order()
        .into_iter()
        .filter(|&id| tree.is_table(id))
        .collect()
}
