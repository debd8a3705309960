//! Synthesized column and header-container nodes
//!
//! Some platforms expect a table to expose one node per column plus a node
//! holding all headers. These are generated from a finished grid and carry
//! negative ids so they can never collide with real nodes.

use crate::core::tree::{NodeData, NodeId};
use crate::data::{IntAttribute, IntListAttribute, Role};

use super::grid::GridLayout;
use super::headers::HeaderMap;

/// What a synthesized node stands for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "json",
    derive(serde::Serialize),
    serde(rename_all = "camelCase")
)]
pub enum ExtraNodeKind {
    Column { index: usize },
    HeaderContainer,
}

/// A presentation-only node owned by a table's structure, not by the tree
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "json",
    derive(serde::Serialize),
    serde(rename_all = "camelCase")
)]
pub struct ExtraNode {
    pub kind: ExtraNodeKind,
    pub parent_id: NodeId,
    pub data: NodeData,
}

impl ExtraNode {
    pub fn id(&self) -> NodeId {
        self.data.id
    }

    pub fn role(&self) -> Role {
        self.data.role
    }

    pub fn parent_id(&self) -> NodeId {
        self.parent_id
    }

    /// Real cell ids this node refers to, in document order
    pub fn indirect_child_ids(&self) -> &[NodeId] {
        self.data
            .int_list_attribute(IntListAttribute::IndirectChildIds)
            .unwrap_or(&[])
    }

    pub fn int_attribute(&self, attr: IntAttribute) -> Option<i32> {
        self.data.int_attribute(attr)
    }
}

/// Hands out -1, -2, ... in allocation order
struct IdAllocator(NodeId);

impl IdAllocator {
    fn next(&mut self) -> NodeId {
        self.0 -= 1;
        self.0
    }
}

/// One node per column, then a header container if any header exists
pub fn synthesize_extra_nodes(
    table_id: NodeId,
    layout: &GridLayout,
    headers: &HeaderMap,
) -> Vec<ExtraNode> {
    let mut ids = IdAllocator(0);
    let mut nodes = Vec::with_capacity(layout.col_count + 1);

    // cell_data is in document order; a cell joins every column it won a slot in.
    let mut columns: Vec<Vec<NodeId>> = vec![Vec::new(); layout.col_count];
    for cell in &layout.cell_data {
        for col in cell.cols() {
            let won = cell.rows().any(|row| {
                layout
                    .cell_ids
                    .get(row)
                    .and_then(|r| r.get(col))
                    .is_some_and(|&id| id == cell.id)
            });
            if won {
                columns[col].push(cell.id);
            }
        }
    }

    for (col, cells) in columns.into_iter().enumerate() {
        let data = NodeData::new(ids.next(), Role::Column)
            .with_int(
                IntAttribute::TableColumnIndex,
                i32::try_from(col).unwrap_or(i32::MAX),
            )
            .with_int_list(IntListAttribute::IndirectChildIds, cells);
        nodes.push(ExtraNode {
            kind: ExtraNodeKind::Column { index: col },
            parent_id: table_id,
            data,
        });
    }

    if !headers.all_headers.is_empty() {
        let data = NodeData::new(ids.next(), Role::TableHeaderContainer).with_int_list(
            IntListAttribute::IndirectChildIds,
            headers.all_headers.clone(),
        );
        nodes.push(ExtraNode {
            kind: ExtraNodeKind::HeaderContainer,
            parent_id: table_id,
            data,
        });
    }

    nodes
}
