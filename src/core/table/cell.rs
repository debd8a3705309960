//! Resolved cell geometry

use std::ops::Range;

use crate::core::tree::NodeId;

/// Header role of a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "json",
    derive(serde::Serialize),
    serde(rename_all = "camelCase")
)]
pub enum CellKind {
    Cell,
    ColumnHeader,
    RowHeader,
}

/// A cell placed in the grid: origin plus spans, all already clamped
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "json",
    derive(serde::Serialize),
    serde(rename_all = "camelCase")
)]
pub struct CellData {
    pub id: NodeId,
    pub kind: CellKind,
    pub row_index: usize,
    pub col_index: usize,
    /// Always at least 1
    pub row_span: usize,
    /// Always at least 1
    pub col_span: usize,
}

impl CellData {
    pub fn rows(&self) -> Range<usize> {
        self.row_index..self.row_index.saturating_add(self.row_span)
    }

    pub fn cols(&self) -> Range<usize> {
        self.col_index..self.col_index.saturating_add(self.col_span)
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.rows().contains(&row) && self.cols().contains(&col)
    }

    pub fn is_header(&self) -> bool {
        self.kind != CellKind::Cell
    }
}
