//! Human-readable dumps of computed tables
//!
//! ## Example
//!
//! ```rust
//! use axtable::{format_table_info, AxTree, NodeData, Role, TreeUpdate};
//!
//! let mut tree = AxTree::new(TreeUpdate::new(
//!     1,
//!     vec![
//!         NodeData::new(1, Role::Table).with_children(vec![2]),
//!         NodeData::new(2, Role::Row).with_children(vec![3]),
//!         NodeData::new(3, Role::Cell),
//!     ],
//! ))
//! .unwrap();
//!
//! let dump = format_table_info(tree.table_info(1).unwrap());
//! assert!(dump.contains("1 x 1"));
//! ```

use std::fmt::Write;

use crate::core::table::{ExtraNodeKind, TableInfo};
use crate::core::tree::NodeId;

/// Render a table's grid, headers and synthesized nodes
pub fn format_table_info(info: &TableInfo) -> String {
    let mut output = String::new();

    let _ = writeln!(
        output,
        "table {}: {} x {} (authored {} x {})",
        info.table_id,
        info.row_count,
        info.col_count,
        info.authored_row_count,
        info.authored_col_count
    );

    let width = info
        .unique_cell_ids
        .iter()
        .map(|id| id.to_string().len())
        .max()
        .unwrap_or(1);
    for row in &info.cell_ids {
        let cells: Vec<String> = row
            .iter()
            .map(|&id| {
                if id == 0 {
                    format!("{:>width$}", ".", width = width)
                } else {
                    format!("{:>width$}", id, width = width)
                }
            })
            .collect();
        let _ = writeln!(output, "  | {} |", cells.join(" "));
    }

    let _ = writeln!(output, "cells: {}", join_ids(&info.unique_cell_ids));
    for (row, headers) in info.row_headers.iter().enumerate() {
        if !headers.is_empty() {
            let _ = writeln!(output, "row {} headers: {}", row, join_ids(headers));
        }
    }
    for (col, headers) in info.col_headers.iter().enumerate() {
        if !headers.is_empty() {
            let _ = writeln!(output, "column {} headers: {}", col, join_ids(headers));
        }
    }

    for node in &info.extra_mac_nodes {
        let label = match node.kind {
            ExtraNodeKind::Column { index } => format!("column {}", index),
            ExtraNodeKind::HeaderContainer => "header container".to_string(),
        };
        let _ = writeln!(
            output,
            "extra {} ({}): {}",
            node.id(),
            label,
            join_ids(node.indirect_child_ids())
        );
    }

    output
}

/// One warning per line, prefixed with the table id
pub fn format_warnings(info: &TableInfo) -> String {
    let mut output = String::new();
    for warning in &info.warnings {
        let _ = writeln!(output, "[table {}] {}", info.table_id, warning);
    }
    output
}

fn join_ids(ids: &[NodeId]) -> String {
    if ids.is_empty() {
        return "-".to_string();
    }
    ids.iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::table::TableConfig;
    use crate::core::tree::{AxTree, NodeData, TreeUpdate};
    use crate::data::{IntAttribute, Role};

    fn spanning_table() -> AxTree {
        AxTree::with_config(
            TreeUpdate::new(
                1,
                vec![
                    NodeData::new(1, Role::Table).with_children(vec![2, 3]),
                    NodeData::new(2, Role::Row).with_children(vec![10, 11]),
                    NodeData::new(3, Role::Row).with_children(vec![12]),
                    NodeData::new(10, Role::ColumnHeader),
                    NodeData::new(11, Role::ColumnHeader),
                    NodeData::new(12, Role::Cell).with_int(IntAttribute::TableCellColumnSpan, 0),
                ],
            ),
            TableConfig::with_extra_mac_nodes(),
        )
        .unwrap()
    }

    #[test]
    fn test_grid_dump() {
        let mut tree = spanning_table();
        let output = format_table_info(tree.table_info(1).unwrap());

        assert!(output.contains("table 1: 2 x 2 (authored 0 x 0)"));
        assert!(output.contains("| 10 11 |"));
        assert!(output.contains("| 12  . |"));
        assert!(output.contains("column 1 headers: 11"));
        assert!(output.contains("extra -3 (header container): 10, 11"));
    }

    #[test]
    fn test_warning_dump() {
        let mut tree = spanning_table();
        let output = format_warnings(tree.table_info(1).unwrap());
        assert!(output.starts_with("[table 1] Warning: node 12"));
        assert_eq!(output.lines().count(), 1);
    }
}
