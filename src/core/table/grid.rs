//! Grid builder
//!
//! Walks a table's rows and cells in document order, resolves each cell's
//! origin and spans, grows the table to fit, then replays the placements
//! into a row-major grid where the first cell to claim a slot keeps it.
//!
//! Attribute values are bounded where they are read: spans follow the HTML
//! limits (`MAX_COL_SPAN`, `MAX_ROW_SPAN`) and indices and authored counts stop
//! at `MAX_INDEX`. A grid that would still exceed `MAX_GRID_SLOTS` keeps only
//! as many rows as fit.

use fxhash::FxHashMap;

use crate::core::tree::{AxNode, NodeId, TreeSource};
use crate::data::IntAttribute;
use crate::utils::error::TableWarning;

use super::cell::{CellData, CellKind};
use super::classify::{classify, TableRole};

/// Largest column span honored
pub const MAX_COL_SPAN: usize = 1000;
/// Largest row span honored
pub const MAX_ROW_SPAN: usize = 65534;
/// Largest row or column index, and largest authored count
pub const MAX_INDEX: usize = 65534;
/// Upper bound on `row_count * col_count`
pub const MAX_GRID_SLOTS: usize = 1 << 22;

/// Output of the grid builder
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GridLayout {
    pub authored_row_count: usize,
    pub authored_col_count: usize,
    pub row_count: usize,
    pub col_count: usize,
    /// Row-major; 0 marks an empty slot
    pub cell_ids: Vec<Vec<NodeId>>,
    pub unique_cell_ids: Vec<NodeId>,
    pub cell_id_to_index: FxHashMap<NodeId, usize>,
    /// Parallel to `unique_cell_ids`
    pub cell_data: Vec<CellData>,
    pub row_nodes: Vec<NodeId>,
    pub row_id_to_index: FxHashMap<NodeId, usize>,
    pub warnings: Vec<TableWarning>,
}

/// State-aware grid builder for one table node
pub struct GridBuilder<'a, T: TreeSource + ?Sized> {
    tree: &'a T,
    table_id: NodeId,
    /// Cells in document order with resolved geometry
    placements: Vec<CellData>,
    row_nodes: Vec<NodeId>,
    row_id_to_index: FxHashMap<NodeId, usize>,
    row_count: usize,
    col_count: usize,
    warnings: Vec<TableWarning>,
}

impl<'a, T: TreeSource + ?Sized> GridBuilder<'a, T> {
    pub fn new(tree: &'a T) -> Self {
        GridBuilder {
            tree,
            table_id: 0,
            placements: Vec::new(),
            row_nodes: Vec::new(),
            row_id_to_index: FxHashMap::default(),
            row_count: 0,
            col_count: 0,
            warnings: Vec::new(),
        }
    }

    /// Build the grid for `table`
    pub fn build(mut self, table: &AxNode) -> GridLayout {
        self.table_id = table.id();
        let authored_row_count = self
            .read_index(table, IntAttribute::TableRowCount)
            .unwrap_or(0);
        let authored_col_count = self
            .read_index(table, IntAttribute::TableColumnCount)
            .unwrap_or(0);
        self.row_count = authored_row_count;
        self.col_count = authored_col_count;

        let tree = self.tree;
        for row_id in self.collect(table, TableRole::Row) {
            if let Some(row) = tree.node(row_id) {
                self.process_row(row);
            }
        }

        let mut layout = self.fill();
        layout.authored_row_count = authored_row_count;
        layout.authored_col_count = authored_col_count;
        layout
    }

    /// Descendants of `parent` matching `wanted`, in document order,
    /// looking through ignored and ignorable nodes. Nested tables are never
    /// entered.
    fn collect(&self, parent: &AxNode, wanted: TableRole) -> Vec<NodeId> {
        let mut found = Vec::new();
        let mut stack: Vec<NodeId> = parent.children().iter().rev().copied().collect();
        while let Some(id) = stack.pop() {
            let Some(node) = self.tree.node(id) else {
                continue;
            };
            if node.is_ignored() {
                stack.extend(node.children().iter().rev());
                continue;
            }
            match classify(node.role()) {
                TableRole::Ignorable => stack.extend(node.children().iter().rev()),
                TableRole::Row if wanted == TableRole::Row => found.push(id),
                TableRole::Cell | TableRole::ColumnHeader | TableRole::RowHeader
                    if wanted == TableRole::Cell =>
                {
                    found.push(id)
                }
                _ => {}
            }
        }
        found
    }

    /// Resolve the cells of one row
    fn process_row(&mut self, row: &AxNode) {
        let row_index = self
            .read_index(row, IntAttribute::TableRowIndex)
            .unwrap_or_else(|| self.row_nodes.len().min(MAX_INDEX));
        self.row_nodes.push(row.id());
        self.row_id_to_index.insert(row.id(), row_index);

        let tree = self.tree;
        let mut next_col = 0;
        for cell_id in self.collect(row, TableRole::Cell) {
            let Some(cell) = tree.node(cell_id) else {
                continue;
            };
            let kind = match classify(cell.role()) {
                TableRole::ColumnHeader => CellKind::ColumnHeader,
                TableRole::RowHeader => CellKind::RowHeader,
                _ => CellKind::Cell,
            };

            let row_index = self
                .read_index(cell, IntAttribute::TableCellRowIndex)
                .unwrap_or(row_index);
            let row_span = self.read_span(cell, IntAttribute::TableCellRowSpan, MAX_ROW_SPAN);
            let col_span = self.read_span(cell, IntAttribute::TableCellColumnSpan, MAX_COL_SPAN);
            let col_index = match self.read_index(cell, IntAttribute::TableCellColumnIndex) {
                Some(col) => col,
                None => self.next_unclaimed_col(row_index, next_col).min(MAX_INDEX),
            };
            next_col = col_index.saturating_add(col_span);

            self.row_count = self.row_count.max(row_index.saturating_add(row_span));
            self.col_count = self.col_count.max(col_index.saturating_add(col_span));

            self.placements.push(CellData {
                id: cell_id,
                kind,
                row_index,
                col_index,
                row_span,
                col_span,
            });
        }
    }

    /// First column at or after `start` not covered by an earlier cell
    fn next_unclaimed_col(&self, row: usize, start: usize) -> usize {
        let mut col = start;
        while let Some(owner) = self.placements.iter().find(|c| c.contains(row, col)) {
            col = owner.col_index.saturating_add(owner.col_span);
        }
        col
    }

    /// Allocate the grid at its final size and replay placements
    fn fill(mut self) -> GridLayout {
        let row_count = self.fitted_row_count();
        let mut layout = GridLayout {
            row_count,
            col_count: self.col_count,
            cell_ids: vec![vec![0; self.col_count]; row_count],
            row_nodes: self.row_nodes,
            row_id_to_index: self.row_id_to_index,
            warnings: self.warnings,
            ..Default::default()
        };

        for mut cell in self.placements {
            if cell.row_index >= row_count {
                layout
                    .warnings
                    .push(TableWarning::OutsideGrid { cell_id: cell.id });
                continue;
            }
            cell.row_span = cell.row_span.min(row_count - cell.row_index);

            let mut claimed = 0usize;
            for row in cell.rows() {
                for col in cell.cols() {
                    let slot = &mut layout.cell_ids[row][col];
                    if *slot == 0 {
                        *slot = cell.id;
                        claimed += 1;
                    } else {
                        layout.warnings.push(TableWarning::SlotClaimed {
                            cell_id: cell.id,
                            row,
                            col,
                            owner_id: *slot,
                        });
                    }
                }
            }

            if claimed == 0 {
                tracing::debug!(cell_id = cell.id, "cell hidden by earlier cells");
                layout
                    .warnings
                    .push(TableWarning::FullyOverlapped { cell_id: cell.id });
                continue;
            }

            layout
                .cell_id_to_index
                .insert(cell.id, layout.unique_cell_ids.len());
            layout.unique_cell_ids.push(cell.id);
            layout.cell_data.push(cell);
        }

        layout
    }

    /// Rows kept so that the grid stays within `MAX_GRID_SLOTS`
    fn fitted_row_count(&mut self) -> usize {
        if self.col_count == 0 || self.row_count.saturating_mul(self.col_count) <= MAX_GRID_SLOTS {
            return self.row_count;
        }
        let kept_rows = MAX_GRID_SLOTS / self.col_count;
        tracing::debug!(
            table_id = self.table_id,
            rows = self.row_count,
            cols = self.col_count,
            kept_rows,
            "table grid too large"
        );
        self.warnings.push(TableWarning::GridTruncated {
            table_id: self.table_id,
            rows: self.row_count,
            cols: self.col_count,
            kept_rows,
        });
        kept_rows
    }

    /// Read an index or count attribute, bounded to `0..=MAX_INDEX`
    fn read_index(&mut self, node: &AxNode, attr: IntAttribute) -> Option<usize> {
        let value = node.int_attribute(attr)?;
        let bounded = (value.max(0) as usize).min(MAX_INDEX);
        if bounded as i64 != i64::from(value) {
            self.clamped(node.id(), attr, value, bounded);
        }
        Some(bounded)
    }

    /// Read a span attribute, bounded to `1..=max`; absent means 1
    fn read_span(&mut self, node: &AxNode, attr: IntAttribute, max: usize) -> usize {
        let value = node.data().int_attribute_or(attr, 1);
        let bounded = (value.max(1) as usize).min(max);
        if bounded as i64 != i64::from(value) {
            self.clamped(node.id(), attr, value, bounded);
        }
        bounded
    }

    fn clamped(&mut self, node_id: NodeId, attr: IntAttribute, value: i32, clamped_to: usize) {
        tracing::debug!(node_id, attribute = attr.name(), value, "clamping table attribute");
        self.warnings.push(TableWarning::Clamped {
            node_id,
            attribute: attr.name(),
            value,
            clamped_to,
        });
    }
}
