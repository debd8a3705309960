//! Header aggregation
//!
//! Fans every header cell out over the grid slots it actually won, so a
//! header never lists itself for a row or column it does not sit in.

use indexmap::IndexSet;

use crate::core::tree::NodeId;

use super::cell::CellKind;
use super::grid::GridLayout;

/// Per-row and per-column header lists, in document order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderMap {
    pub row_headers: Vec<Vec<NodeId>>,
    pub col_headers: Vec<Vec<NodeId>>,
    pub all_headers: Vec<NodeId>,
}

pub fn aggregate_headers(layout: &GridLayout) -> HeaderMap {
    let mut row_sets: Vec<IndexSet<NodeId>> = vec![IndexSet::new(); layout.row_count];
    let mut col_sets: Vec<IndexSet<NodeId>> = vec![IndexSet::new(); layout.col_count];
    let mut all_headers = Vec::new();

    // cell_data is in document order, so each set fills in order.
    for cell in layout.cell_data.iter().filter(|c| c.is_header()) {
        for row in cell.rows() {
            for col in cell.cols() {
                let won = layout
                    .cell_ids
                    .get(row)
                    .and_then(|r| r.get(col))
                    .is_some_and(|&id| id == cell.id);
                if !won {
                    continue;
                }
                match cell.kind {
                    CellKind::ColumnHeader => col_sets[col].insert(cell.id),
                    _ => row_sets[row].insert(cell.id),
                };
            }
        }
        all_headers.push(cell.id);
    }

    HeaderMap {
        row_headers: row_sets.into_iter().map(|s| s.into_iter().collect()).collect(),
        col_headers: col_sets.into_iter().map(|s| s.into_iter().collect()).collect(),
        all_headers,
    }
}
