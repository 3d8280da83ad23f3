//! Tables: a header row plus ordered body rows
//!
//! The header defines the canonical column set. Body cells whose key is not
//! a header key can be deleted ([`Table::remove_headerless_columns`]) or
//! hidden ([`Table::hide_headerless_columns`]).
//!
//! ## Example
//!
//! ```rust
//! use tableclass::core::input::row_input;
//! use tableclass::Table;
//!
//! let mut table = Table::new();
//! table
//!     .set_header_from_record(row_input([("id", Some("ID")), ("name", Some("Name")), ("raw", None)]))
//!     .add_rows_from_records([row_input([("id", "1"), ("name", "Ada"), ("raw", "x"), ("extra", "y")])]);
//!
//! table.remove_headerless_columns();
//! assert_eq!(table.row(0).unwrap().cell_keys(false), ["id", "name", "raw"]);
//!
//! table.hide_headerless_columns();
//! assert_eq!(table.row(0).unwrap().cell_keys(true), ["id", "name"]);
//! ```

use std::collections::HashSet;

use tracing::debug;

use super::attributes::HtmlAttributes;
use super::entity::HtmlEntity;
use super::input::RowInput;
use super::record::TableRecord;
use super::row::TableRow;
use crate::utils::error::{TableError, TableResult};
use crate::utils::escaping::EscapePolicy;

/// A vertical HTML table
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Table {
    header: TableRow,
    rows: Vec<TableRow>,
    attributes: HtmlAttributes,
}

/// Anything that can turn a table into markup
pub trait TableRenderer {
    fn render(&self, table: &Table) -> TableResult<String>;
}

impl Table {
    /// Create a table with an empty header and no rows
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_header(mut self, header: TableRow) -> Self {
        self.header = header;
        self
    }

    pub fn with_rows<I>(mut self, rows: I) -> Self
    where
        I: IntoIterator<Item = TableRow>,
    {
        self.rows = rows.into_iter().collect();
        self
    }

    pub fn with_attributes(mut self, attributes: HtmlAttributes) -> Self {
        self.attributes = attributes;
        self
    }

    pub fn header(&self) -> &TableRow {
        &self.header
    }

    pub fn header_mut(&mut self) -> &mut TableRow {
        &mut self.header
    }

    pub fn set_header(&mut self, header: TableRow) -> &mut Self {
        self.header = header;
        self
    }

    /// Creates the header from a record. Header cells without a value are
    /// placeholder columns and become hidden.
    pub fn set_header_from_record(&mut self, record: RowInput) -> &mut Self {
        let mut header = TableRow::from_record(record);
        header.for_each_cell(|cell, _| {
            if cell.value().is_none() {
                cell.set_hidden(true);
            }
        });
        debug!(
            columns = header.cell_count(false),
            visible = header.cell_count(true),
            "header set from record"
        );
        self.header = header;
        self
    }

    /// Appends one row per record
    pub fn add_rows_from_records<I>(&mut self, records: I) -> &mut Self
    where
        I: IntoIterator<Item = RowInput>,
    {
        let before = self.rows.len();
        self.rows.extend(records.into_iter().map(TableRow::from_record));
        debug!(added = self.rows.len() - before, "rows added from records");
        self
    }

    pub fn add_row(&mut self, row: TableRow) -> &mut Self {
        self.rows.push(row);
        self
    }

    /// Replaces all body rows
    pub fn set_rows<I>(&mut self, rows: I) -> &mut Self
    where
        I: IntoIterator<Item = TableRow>,
    {
        self.rows = rows.into_iter().collect();
        self
    }

    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    pub fn rows_mut(&mut self) -> &mut [TableRow] {
        &mut self.rows
    }

    pub fn row(&self, index: usize) -> TableResult<&TableRow> {
        self.rows
            .get(index)
            .ok_or(TableError::out_of_range(index, self.rows.len()))
    }

    pub fn row_mut(&mut self, index: usize) -> TableResult<&mut TableRow> {
        let len = self.rows.len();
        self.rows
            .get_mut(index)
            .ok_or(TableError::out_of_range(index, len))
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Applies `f(row, index)` to every body row in order
    pub fn for_each_row<F>(&mut self, mut f: F) -> &mut Self
    where
        F: FnMut(&mut TableRow, usize),
    {
        for (index, row) in self.rows.iter_mut().enumerate() {
            f(row, index);
        }
        self
    }

    /// Deletes every body cell whose key is not a header key
    pub fn remove_headerless_columns(&mut self) -> &mut Self {
        let header_keys: HashSet<String> = self
            .header
            .cell_keys(false)
            .into_iter()
            .map(str::to_string)
            .collect();

        let mut removed = 0;
        for row in &mut self.rows {
            removed += row.retain_cells(|cell| header_keys.contains(cell.key()));
        }
        debug!(removed, "removed headerless cells");
        self
    }

    /// Hides every body cell whose key is not a visible header key.
    /// Cell counts never change.
    pub fn hide_headerless_columns(&mut self) -> &mut Self {
        let visible_keys: HashSet<String> = self
            .header
            .cell_keys(true)
            .into_iter()
            .map(str::to_string)
            .collect();

        let mut hidden = 0;
        for row in &mut self.rows {
            row.for_each_cell(|cell, _| {
                if !visible_keys.contains(cell.key()) {
                    cell.set_hidden(true);
                    hidden += 1;
                }
            });
        }
        debug!(hidden, "hid headerless cells");
        self
    }

    /// Returns the record representation
    pub fn to_record(&self) -> TableRecord {
        self.to_record_with(EscapePolicy::Raw)
    }

    pub fn to_record_with(&self, policy: EscapePolicy) -> TableRecord {
        TableRecord {
            header: self.header.to_record_with(policy),
            rows: self
                .rows
                .iter()
                .map(|row| row.to_record_with(policy))
                .collect(),
            attributes: self.attributes.serialize_with(policy),
        }
    }

    /// Renders the table through `renderer`
    pub fn render<R: TableRenderer + ?Sized>(&self, renderer: &R) -> TableResult<String> {
        renderer.render(self)
    }
}

impl HtmlEntity for Table {
    fn attributes(&self) -> &HtmlAttributes {
        &self.attributes
    }

    fn attributes_mut(&mut self) -> &mut HtmlAttributes {
        &mut self.attributes
    }
}
