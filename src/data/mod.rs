//! Data layer - Static vocabularies
//!
//! This module contains the closed sets of names shared by the tree and the
//! table core:
//! - Node roles
//! - Integer and integer-list attribute keys

pub mod roles;

// Re-export commonly used items
pub use roles::{
    IntAttribute, IntListAttribute, Role, INT_ATTRIBUTE_NAMES, INT_LIST_ATTRIBUTE_NAMES,
    ROLE_NAMES,
};
