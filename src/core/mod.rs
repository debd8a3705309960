//! Core modules
//!
//! This module contains the tree model and the table engine:
//! - `tree`: accessibility tree arena with version stamps
//! - `table`: table structure inference and its cache
//! - `accessors`: table lookups on tree nodes

pub mod accessors;
pub mod table;
pub mod tree;

// Re-export main types
pub use table::{
    CacheStats, CellData, CellKind, ExtraNode, ExtraNodeKind, TableConfig, TableInfo,
    TableInfoCache,
};
pub use tree::{AxNode, AxTree, NodeArena, NodeData, NodeId, TreeSource, TreeUpdate};
