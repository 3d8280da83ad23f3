//! Core table model
//!
//! This module contains the data model of a table, leaf-first:
//! - `attributes`: HTML attribute dictionaries with `class` list handling
//! - `cell`: keyed, optionally hidden value holders
//! - `row`: ordered, key-addressable cell collections
//! - `table`: header row plus body rows, column reconciliation
//! - `input` / `record`: the raw input records and the exported record tree

pub mod attributes;
pub mod cell;
pub mod entity;
pub mod input;
pub mod record;
pub mod row;
pub mod table;

#[cfg(test)]
mod tests;

// Re-export main types
pub use attributes::{AttributeValue, HtmlAttributes};
pub use cell::TableCell;
pub use entity::HtmlEntity;
pub use input::{row_input, CellInput, CellSpec, RowInput, ScalarValue, TableInput};
pub use record::{CellRecord, RowRecord, TableRecord};
pub use row::TableRow;
pub use table::{Table, TableRenderer};
