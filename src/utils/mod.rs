//! Utility modules
//!
//! This module contains utilities and helpers:
//! - Error and warning types
//! - Text dumps of computed tables

pub mod dump;
pub mod error;

// Re-export commonly used items
pub use dump::{format_table_info, format_warnings};
pub use error::{TableWarning, TreeError, TreeResult};
