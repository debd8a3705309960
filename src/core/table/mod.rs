//! Table structure inference
//!
//! Derives a logical grid from a table subtree of an accessibility tree:
//! - Row and column counts reconciled with authored counts
//! - Cell ids per grid slot, honoring row and column spans
//! - Row and column header lists
//! - Optional synthesized column and header-container nodes
//!
//! # Architecture
//!
//! ```text
//! TableInfoCache::get -> classify -> GridBuilder -> aggregate_headers
//!                                                -> synthesize_extra_nodes
//! ```
//!
//! Results are cached per table node and rebuilt whenever the node's subtree
//! version changes.

mod cache;
mod cell;
mod classify;
mod extra_nodes;
mod grid;
mod headers;
mod info;


// Re-export public API
pub use cache::{CacheStats, TableConfig, TableInfoCache};
pub use cell::{CellData, CellKind};
pub use classify::{
    classify, is_cell_or_table_header, is_column_header, is_row_header, is_table_like,
    is_table_row, TableRole,
};
pub use extra_nodes::{synthesize_extra_nodes, ExtraNode, ExtraNodeKind};
pub use grid::{
    GridBuilder, GridLayout, MAX_COL_SPAN, MAX_GRID_SLOTS, MAX_INDEX, MAX_ROW_SPAN,
};
pub use headers::{aggregate_headers, HeaderMap};
pub use info::TableInfo;
