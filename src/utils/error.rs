//! Error handling for axtable
//!
//! Only tree updates can fail. Table inference never fails; irregularities
//! it absorbs are reported as [`TableWarning`] values instead.

use std::fmt;

use crate::core::tree::NodeId;

/// Tree update error type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    /// The update creates a tree but does not say which node is the root
    MissingRoot,
    /// The declared root is neither in the tree nor in the update
    RootNotFound { root_id: NodeId },
    /// A node id is not a valid real node id (must be positive)
    InvalidId { id: NodeId },
    /// A child id is neither in the tree nor in the update
    UnknownChild { parent_id: NodeId, child_id: NodeId },
    /// A node is listed as a child more than once
    DuplicateChild { child_id: NodeId },
    /// A child would keep its old parent and gain a new one
    Reparented {
        child_id: NodeId,
        old_parent_id: NodeId,
        new_parent_id: NodeId,
    },
    /// The update would make a node its own ancestor
    Cycle { id: NodeId },
    /// A new node is not reachable from any parent
    Orphan { id: NodeId },
}

impl fmt::Display for TreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TreeError::MissingRoot => write!(f, "Tree update error: no root id given"),
            TreeError::RootNotFound { root_id } => {
                write!(f, "Tree update error: root {} not found", root_id)
            }
            TreeError::InvalidId { id } => {
                write!(f, "Tree update error: invalid node id {}", id)
            }
            TreeError::UnknownChild {
                parent_id,
                child_id,
            } => write!(
                f,
                "Tree update error: node {} has unknown child {}",
                parent_id, child_id
            ),
            TreeError::DuplicateChild { child_id } => write!(
                f,
                "Tree update error: node {} is listed as a child more than once",
                child_id
            ),
            TreeError::Reparented {
                child_id,
                old_parent_id,
                new_parent_id,
            } => write!(
                f,
                "Tree update error: node {} moved from {} to {} without updating {}",
                child_id, old_parent_id, new_parent_id, old_parent_id
            ),
            TreeError::Cycle { id } => {
                write!(f, "Tree update error: node {} would be its own ancestor", id)
            }
            TreeError::Orphan { id } => {
                write!(f, "Tree update error: node {} has no parent", id)
            }
        }
    }
}

impl std::error::Error for TreeError {}

/// Result type for tree operations
pub type TreeResult<T> = Result<T, TreeError>;

/// Non-fatal irregularities found while building a table
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
pub enum TableWarning {
    /// An index, count or span outside its allowed range was clamped
    Clamped {
        node_id: NodeId,
        attribute: &'static str,
        value: i32,
        clamped_to: usize,
    },
    /// A grid slot was already claimed by an earlier cell
    SlotClaimed {
        cell_id: NodeId,
        row: usize,
        col: usize,
        owner_id: NodeId,
    },
    /// Every slot of the cell was already claimed; the cell is left out
    FullyOverlapped { cell_id: NodeId },
    /// The grid was cut down to `kept_rows` rows to bound its size
    GridTruncated {
        table_id: NodeId,
        rows: usize,
        cols: usize,
        kept_rows: usize,
    },
    /// The cell starts below the last kept row; the cell is left out
    OutsideGrid { cell_id: NodeId },
}

impl fmt::Display for TableWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableWarning::Clamped {
                node_id,
                attribute,
                value,
                clamped_to,
            } => write!(
                f,
                "Warning: node {} has {} = {}, using {}",
                node_id, attribute, value, clamped_to
            ),
            TableWarning::SlotClaimed {
                cell_id,
                row,
                col,
                owner_id,
            } => write!(
                f,
                "Warning: cell {} overlaps ({}, {}) already held by cell {}",
                cell_id, row, col, owner_id
            ),
            TableWarning::FullyOverlapped { cell_id } => write!(
                f,
                "Warning: cell {} is hidden entirely by earlier cells",
                cell_id
            ),
            TableWarning::GridTruncated {
                table_id,
                rows,
                cols,
                kept_rows,
            } => write!(
                f,
                "Warning: table {} is {} x {}, keeping the first {} rows",
                table_id, rows, cols, kept_rows
            ),
            TableWarning::OutsideGrid { cell_id } => write!(
                f,
                "Warning: cell {} starts past the last kept row",
                cell_id
            ),
        }
    }
}
