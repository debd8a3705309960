//! Table accessors on tree nodes
//!
//! Convenience lookups for screen-reader style consumers. Every lookup goes
//! through the table info cache; rows and cells find their table by walking
//! up the parent chain.

use crate::core::table::{self, CellData, TableInfo};
use crate::core::tree::{AxNode, AxTree, NodeId, TreeSource};

impl AxTree {
    pub fn is_table(&self, id: NodeId) -> bool {
        self.get_from_id(id)
            .is_some_and(|n| table::is_table_like(n.role()))
    }

    pub fn is_table_row(&self, id: NodeId) -> bool {
        self.get_from_id(id)
            .is_some_and(|n| table::is_table_row(n.role()))
    }

    pub fn is_table_cell_or_header(&self, id: NodeId) -> bool {
        self.get_from_id(id)
            .is_some_and(|n| table::is_cell_or_table_header(n.role()))
    }

    /// Nearest table ancestor of `id`, excluding `id` itself
    pub fn table_ancestor(&self, id: NodeId) -> Option<NodeId> {
        let mut current = self.get_from_id(id)?.parent();
        while let Some(node) = current.and_then(|p| self.get_from_id(p)) {
            if table::is_table_like(node.role()) {
                return Some(node.id());
            }
            current = node.parent();
        }
        None
    }

    pub fn table_row_count(&mut self, table_id: NodeId) -> Option<usize> {
        self.table_info(table_id).map(|info| info.row_count)
    }

    pub fn table_col_count(&mut self, table_id: NodeId) -> Option<usize> {
        self.table_info(table_id).map(|info| info.col_count)
    }

    /// Cell at a grid position; negative or out-of-range coordinates give `None`
    pub fn table_cell_from_coords(&mut self, table_id: NodeId, row: i32, col: i32) -> Option<&AxNode> {
        let row = usize::try_from(row).ok()?;
        let col = usize::try_from(col).ok()?;
        let cell_id = self.table_info(table_id)?.cell_id_at(row, col)?;
        self.get_from_id(cell_id)
    }

    /// Cell by its position among the table's distinct cells
    pub fn table_cell_from_index(&mut self, table_id: NodeId, index: i32) -> Option<&AxNode> {
        let index = usize::try_from(index).ok()?;
        let cell_id = self.table_info(table_id)?.cell_id_at_index(index)?;
        self.get_from_id(cell_id)
    }

    pub fn table_row_row_index(&mut self, row_id: NodeId) -> Option<usize> {
        if !self.is_table_row(row_id) {
            return None;
        }
        let table_id = self.table_ancestor(row_id)?;
        self.table_info(table_id)?
            .row_id_to_index
            .get(&row_id)
            .copied()
    }

    pub fn table_cell_index(&mut self, cell_id: NodeId) -> Option<usize> {
        let (_, info) = self.containing_table_info(cell_id)?;
        info.cell_id_to_index.get(&cell_id).copied()
    }

    pub fn table_cell_row_index(&mut self, cell_id: NodeId) -> Option<usize> {
        self.cell_data(cell_id).map(|c| c.row_index)
    }

    pub fn table_cell_col_index(&mut self, cell_id: NodeId) -> Option<usize> {
        self.cell_data(cell_id).map(|c| c.col_index)
    }

    pub fn table_cell_row_span(&mut self, cell_id: NodeId) -> Option<usize> {
        self.cell_data(cell_id).map(|c| c.row_span)
    }

    pub fn table_cell_col_span(&mut self, cell_id: NodeId) -> Option<usize> {
        self.cell_data(cell_id).map(|c| c.col_span)
    }

    /// Column headers of the cell's origin column, in document order
    pub fn table_cell_col_headers(&mut self, cell_id: NodeId) -> Vec<&AxNode> {
        let ids = self
            .containing_table_info(cell_id)
            .and_then(|(data, info)| info.col_headers.get(data.col_index).cloned())
            .unwrap_or_default();
        self.resolve(&ids)
    }

    /// Row headers of the cell's origin row, in document order
    pub fn table_cell_row_headers(&mut self, cell_id: NodeId) -> Vec<&AxNode> {
        let ids = self
            .containing_table_info(cell_id)
            .and_then(|(data, info)| info.row_headers.get(data.row_index).cloned())
            .unwrap_or_default();
        self.resolve(&ids)
    }

    fn cell_data(&mut self, cell_id: NodeId) -> Option<CellData> {
        self.containing_table_info(cell_id).map(|(data, _)| data)
    }

    fn containing_table_info(&mut self, cell_id: NodeId) -> Option<(CellData, &TableInfo)> {
        if !self.is_table_cell_or_header(cell_id) {
            return None;
        }
        let table_id = self.table_ancestor(cell_id)?;
        let info = self.table_info(table_id)?;
        let data = info.cell_data_for(cell_id)?.clone();
        Some((data, info))
    }

    fn resolve(&self, ids: &[NodeId]) -> Vec<&AxNode> {
        ids.iter().filter_map(|&id| self.nodes.node(id)).collect()
    }
}
