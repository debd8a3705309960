//! Role predicates for table inference

use crate::data::Role;

/// How a node takes part in a table's structure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableRole {
    Table,
    Row,
    Cell,
    ColumnHeader,
    RowHeader,
    /// Generic wrappers and anything else without a table role.
    /// Their children are visited as if they were the node's siblings.
    Ignorable,
}

pub fn is_table_like(role: Role) -> bool {
    matches!(
        role,
        Role::Table | Role::Grid | Role::TreeGrid | Role::LayoutTable
    )
}

pub fn is_table_row(role: Role) -> bool {
    matches!(role, Role::Row | Role::LayoutTableRow)
}

pub fn is_cell_or_table_header(role: Role) -> bool {
    matches!(
        role,
        Role::Cell | Role::LayoutTableCell | Role::ColumnHeader | Role::RowHeader
    )
}

pub fn is_column_header(role: Role) -> bool {
    role == Role::ColumnHeader
}

pub fn is_row_header(role: Role) -> bool {
    role == Role::RowHeader
}

/// Classify a role tag. The ignored flag is not consulted here; grid
/// traversal looks through ignored nodes whatever their role.
pub fn classify(role: Role) -> TableRole {
    if is_table_like(role) {
        TableRole::Table
    } else if is_table_row(role) {
        TableRole::Row
    } else if is_column_header(role) {
        TableRole::ColumnHeader
    } else if is_row_header(role) {
        TableRole::RowHeader
    } else if is_cell_or_table_header(role) {
        TableRole::Cell
    } else {
        TableRole::Ignorable
    }
}
