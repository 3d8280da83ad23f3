//! Utility modules
//!
//! This module contains utilities and helpers:
//! - Error types and result types
//! - HTML escaping and the escape policy

pub mod error;
pub mod escaping;

// Re-export commonly used items
pub use error::{TableError, TableResult};
pub use escaping::{escape_html, is_valid_attribute_name, EscapePolicy};
