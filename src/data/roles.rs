//! Role and attribute vocabularies
//!
//! Roles and attribute keys are closed enums on the Rust side. The static
//! name tables map the textual names used in JSON tree fixtures and on the
//! command line back to those enums.

use phf::phf_map;
use std::fmt;
use std::str::FromStr;

/// Node role tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "json",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub enum Role {
    #[default]
    Unknown,
    None,
    GenericContainer,
    Group,
    RowGroup,
    RootWebArea,
    StaticText,
    Caption,
    // Table-like containers
    Table,
    Grid,
    TreeGrid,
    LayoutTable,
    // Rows
    Row,
    LayoutTableRow,
    // Cells and headers
    Cell,
    LayoutTableCell,
    ColumnHeader,
    RowHeader,
    // Synthesized only
    Column,
    TableHeaderContainer,
}

/// Role name to role mapping
pub static ROLE_NAMES: phf::Map<&'static str, Role> = phf_map! {
    "unknown" => Role::Unknown,
    "none" => Role::None,
    "genericContainer" => Role::GenericContainer,
    "group" => Role::Group,
    "rowGroup" => Role::RowGroup,
    "rootWebArea" => Role::RootWebArea,
    "staticText" => Role::StaticText,
    "caption" => Role::Caption,
    "table" => Role::Table,
    "grid" => Role::Grid,
    "treeGrid" => Role::TreeGrid,
    "layoutTable" => Role::LayoutTable,
    "row" => Role::Row,
    "layoutTableRow" => Role::LayoutTableRow,
    "cell" => Role::Cell,
    "layoutTableCell" => Role::LayoutTableCell,
    "columnHeader" => Role::ColumnHeader,
    "rowHeader" => Role::RowHeader,
    "column" => Role::Column,
    "tableHeaderContainer" => Role::TableHeaderContainer,
};

impl Role {
    /// Canonical camelCase name
    pub fn name(&self) -> &'static str {
        match self {
            Role::Unknown => "unknown",
            Role::None => "none",
            Role::GenericContainer => "genericContainer",
            Role::Group => "group",
            Role::RowGroup => "rowGroup",
            Role::RootWebArea => "rootWebArea",
            Role::StaticText => "staticText",
            Role::Caption => "caption",
            Role::Table => "table",
            Role::Grid => "grid",
            Role::TreeGrid => "treeGrid",
            Role::LayoutTable => "layoutTable",
            Role::Row => "row",
            Role::LayoutTableRow => "layoutTableRow",
            Role::Cell => "cell",
            Role::LayoutTableCell => "layoutTableCell",
            Role::ColumnHeader => "columnHeader",
            Role::RowHeader => "rowHeader",
            Role::Column => "column",
            Role::TableHeaderContainer => "tableHeaderContainer",
        }
    }

    /// Look up a role by name
    pub fn from_name(name: &str) -> Option<Role> {
        ROLE_NAMES.get(name).copied()
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::from_name(s).ok_or_else(|| format!("unknown role '{}'", s))
    }
}

impl TryFrom<String> for Role {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        role.name().to_string()
    }
}

/// Integer attribute keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "json",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub enum IntAttribute {
    TableRowCount,
    TableColumnCount,
    TableRowIndex,
    TableColumnIndex,
    TableCellRowIndex,
    TableCellColumnIndex,
    TableCellRowSpan,
    TableCellColumnSpan,
}

/// Integer attribute name to key mapping
pub static INT_ATTRIBUTE_NAMES: phf::Map<&'static str, IntAttribute> = phf_map! {
    "tableRowCount" => IntAttribute::TableRowCount,
    "tableColumnCount" => IntAttribute::TableColumnCount,
    "tableRowIndex" => IntAttribute::TableRowIndex,
    "tableColumnIndex" => IntAttribute::TableColumnIndex,
    "tableCellRowIndex" => IntAttribute::TableCellRowIndex,
    "tableCellColumnIndex" => IntAttribute::TableCellColumnIndex,
    "tableCellRowSpan" => IntAttribute::TableCellRowSpan,
    "tableCellColumnSpan" => IntAttribute::TableCellColumnSpan,
};

impl IntAttribute {
    pub fn name(&self) -> &'static str {
        match self {
            IntAttribute::TableRowCount => "tableRowCount",
            IntAttribute::TableColumnCount => "tableColumnCount",
            IntAttribute::TableRowIndex => "tableRowIndex",
            IntAttribute::TableColumnIndex => "tableColumnIndex",
            IntAttribute::TableCellRowIndex => "tableCellRowIndex",
            IntAttribute::TableCellColumnIndex => "tableCellColumnIndex",
            IntAttribute::TableCellRowSpan => "tableCellRowSpan",
            IntAttribute::TableCellColumnSpan => "tableCellColumnSpan",
        }
    }
}

impl fmt::Display for IntAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<String> for IntAttribute {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        INT_ATTRIBUTE_NAMES
            .get(value.as_str())
            .copied()
            .ok_or_else(|| format!("unknown int attribute '{}'", value))
    }
}

impl From<IntAttribute> for String {
    fn from(attr: IntAttribute) -> Self {
        attr.name().to_string()
    }
}

/// Integer-list attribute keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "json",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub enum IntListAttribute {
    /// Ids of nodes a synthesized node refers to without owning them
    IndirectChildIds,
}

/// Integer-list attribute name to key mapping
pub static INT_LIST_ATTRIBUTE_NAMES: phf::Map<&'static str, IntListAttribute> = phf_map! {
    "indirectChildIds" => IntListAttribute::IndirectChildIds,
};

impl IntListAttribute {
    pub fn name(&self) -> &'static str {
        match self {
            IntListAttribute::IndirectChildIds => "indirectChildIds",
        }
    }
}

impl fmt::Display for IntListAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<String> for IntListAttribute {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        INT_LIST_ATTRIBUTE_NAMES
            .get(value.as_str())
            .copied()
            .ok_or_else(|| format!("unknown int list attribute '{}'", value))
    }
}

impl From<IntListAttribute> for String {
    fn from(attr: IntListAttribute) -> Self {
        attr.name().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_names_round_trip() {
        for (name, role) in ROLE_NAMES.entries() {
            assert_eq!(role.name(), *name);
        }
    }

    #[test]
    fn test_unknown_role_name() {
        assert_eq!(Role::from_name("spreadsheet"), None);
        assert!("spreadsheet".parse::<Role>().is_err());
        assert_eq!("columnHeader".parse::<Role>(), Ok(Role::ColumnHeader));
    }

    #[test]
    fn test_attribute_names() {
        for (name, attr) in INT_ATTRIBUTE_NAMES.entries() {
            assert_eq!(attr.name(), *name);
        }
        assert_eq!(
            IntListAttribute::try_from("indirectChildIds".to_string()),
            Ok(IntListAttribute::IndirectChildIds)
        );
    }
}
