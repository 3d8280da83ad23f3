//! Table rows
//!
//! A row keeps its cells in insertion order and addressable by key. Both
//! views share a single `IndexMap`, so position and key lookups can never
//! disagree about which cell they refer to.

use indexmap::IndexMap;
use tracing::debug;

use super::attributes::HtmlAttributes;
use super::cell::TableCell;
use super::entity::HtmlEntity;
use super::input::{CellInput, RowInput};
use super::record::RowRecord;
use crate::utils::error::{TableError, TableResult};
use crate::utils::escaping::EscapePolicy;

/// An ordered group of uniquely keyed cells
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TableRow {
    cells: IndexMap<String, TableCell>,
    attributes: HtmlAttributes,
}

impl TableRow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a row from cells; fails on the first duplicate key
    pub fn with_cells<I>(cells: I) -> TableResult<Self>
    where
        I: IntoIterator<Item = TableCell>,
    {
        let mut row = Self::new();
        for cell in cells {
            row.add_cell(cell)?;
        }
        Ok(row)
    }

    pub fn with_attributes(mut self, attributes: HtmlAttributes) -> Self {
        self.attributes = attributes;
        self
    }

    /// Creates a row from a `key → entry` record.
    ///
    /// Scalar entries become plain value cells, structured entries carry
    /// their value, classes and attributes. A `RowInput` holds each key once,
    /// so this cannot fail.
    pub fn from_record(record: RowInput) -> Self {
        let mut row = Self::new();
        for (key, input) in record {
            let cell = input.into_cell(key.clone());
            row.cells.insert(key, cell);
        }
        row
    }

    /// Creates a row from `(key, entry)` pairs; fails on the first repeated key
    pub fn from_pairs<I, K, V>(pairs: I) -> TableResult<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<CellInput>,
    {
        Self::with_cells(
            pairs
                .into_iter()
                .map(|(key, input)| Into::<CellInput>::into(input).into_cell(key)),
        )
    }

    /// Adds a cell by its unique key
    pub fn add_cell(&mut self, cell: TableCell) -> TableResult<&mut Self> {
        if self.cells.contains_key(cell.key()) {
            debug!(key = cell.key(), "rejecting duplicate cell key");
            return Err(TableError::duplicate_key(cell.key()));
        }
        self.cells.insert(cell.key().to_string(), cell);
        Ok(self)
    }

    /// Replaces all cells. On a duplicate key the row is left unchanged.
    pub fn set_cells<I>(&mut self, cells: I) -> TableResult<&mut Self>
    where
        I: IntoIterator<Item = TableCell>,
    {
        let replacement = Self::with_cells(cells)?;
        self.cells = replacement.cells;
        Ok(self)
    }

    /// Removes the cell with the given key, keeping the order of the others.
    ///
    /// Returns `None` when no such cell exists; that is not an error.
    pub fn remove_cell(&mut self, key: &str) -> Option<TableCell> {
        self.cells.shift_remove(key)
    }

    pub fn has_cell(&self, key: &str) -> bool {
        self.cells.contains_key(key)
    }

    /// Returns a cell by key
    pub fn cell(&self, key: &str) -> TableResult<&TableCell> {
        self.cells.get(key).ok_or_else(|| TableError::not_found(key))
    }

    pub fn cell_mut(&mut self, key: &str) -> TableResult<&mut TableCell> {
        self.cells.get_mut(key).ok_or_else(|| TableError::not_found(key))
    }

    /// Returns a cell by position
    pub fn cell_at(&self, index: usize) -> TableResult<&TableCell> {
        let len = self.cells.len();
        self.cells
            .get_index(index)
            .map(|(_, cell)| cell)
            .ok_or(TableError::out_of_range(index, len))
    }

    pub fn cell_at_mut(&mut self, index: usize) -> TableResult<&mut TableCell> {
        let len = self.cells.len();
        self.cells
            .get_index_mut(index)
            .map(|(_, cell)| cell)
            .ok_or(TableError::out_of_range(index, len))
    }

    /// Cells in order
    pub fn cells(&self) -> impl Iterator<Item = &TableCell> {
        self.cells.values()
    }

    pub fn cells_mut(&mut self) -> impl Iterator<Item = &mut TableCell> {
        self.cells.values_mut()
    }

    /// Keys in order, optionally skipping hidden cells
    pub fn cell_keys(&self, exclude_hidden: bool) -> Vec<&str> {
        self.cells
            .values()
            .filter(|cell| !(exclude_hidden && cell.is_hidden()))
            .map(TableCell::key)
            .collect()
    }

    pub fn cell_count(&self, exclude_hidden: bool) -> usize {
        if exclude_hidden {
            self.cells.values().filter(|cell| !cell.is_hidden()).count()
        } else {
            self.cells.len()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Applies `f(cell, index)` to every cell in order
    pub fn for_each_cell<F>(&mut self, mut f: F) -> &mut Self
    where
        F: FnMut(&mut TableCell, usize),
    {
        for (index, cell) in self.cells.values_mut().enumerate() {
            f(cell, index);
        }
        self
    }

    /// Keeps only the cells for which `keep` returns true; returns how many were removed
    pub fn retain_cells<F>(&mut self, mut keep: F) -> usize
    where
        F: FnMut(&TableCell) -> bool,
    {
        let before = self.cells.len();
        self.cells.retain(|_, cell| keep(cell));
        before - self.cells.len()
    }

    /// Returns the record representation
    pub fn to_record(&self) -> RowRecord {
        self.to_record_with(EscapePolicy::Raw)
    }

    pub fn to_record_with(&self, policy: EscapePolicy) -> RowRecord {
        let cells: Vec<_> = self
            .cells
            .values()
            .map(|cell| cell.to_record_with(policy))
            .collect();
        let cells_by_key = cells
            .iter()
            .map(|record| (record.key.clone(), record.clone()))
            .collect();

        RowRecord {
            cells,
            cells_by_key,
            attributes: self.attributes.serialize_with(policy),
        }
    }
}

impl From<RowInput> for TableRow {
    fn from(record: RowInput) -> Self {
        TableRow::from_record(record)
    }
}

impl HtmlEntity for TableRow {
    fn attributes(&self) -> &HtmlAttributes {
        &self.attributes
    }

    fn attributes_mut(&mut self) -> &mut HtmlAttributes {
        &mut self.attributes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::{row_input, CellSpec};
    use pretty_assertions::assert_eq;

    fn sample_row() -> TableRow {
        TableRow::with_cells([
            TableCell::with_key_value("id", "1"),
            TableCell::with_key_value("name", "Ada"),
            TableCell::with_key_value("secret", "x").with_hidden(true),
        ])
        .unwrap()
    }

    #[test]
    fn test_duplicate_key_leaves_row_unchanged() {
        let mut row = sample_row();
        let err = row
            .add_cell(TableCell::with_key_value("name", "Grace"))
            .unwrap_err();
        assert_eq!(err, TableError::duplicate_key("name"));
        assert_eq!(row.cell_count(false), 3);
        assert_eq!(row.cell("name").unwrap().value(), Some("Ada"));
        assert_eq!(row.cell_at(1).unwrap().value(), Some("Ada"));
    }

    #[test]
    fn test_with_cells_rejects_duplicates() {
        let result = TableRow::with_cells([TableCell::new("a"), TableCell::new("a")]);
        assert!(matches!(result, Err(TableError::DuplicateKey { .. })));
    }

    #[test]
    fn test_set_cells_is_atomic() {
        let mut row = sample_row();
        let result = row.set_cells([TableCell::new("x"), TableCell::new("x")]);
        assert!(result.is_err());
        assert_eq!(row.cell_keys(false), ["id", "name", "secret"]);

        row.set_cells([TableCell::new("y")]).unwrap();
        assert_eq!(row.cell_keys(false), ["y"]);
    }

    #[test]
    fn test_lookup_by_key_and_index() {
        let row = sample_row();
        assert_eq!(row.cell("id").unwrap().value(), Some("1"));
        assert_eq!(row.cell_at(2).unwrap().key(), "secret");
        assert_eq!(row.cell("nope").unwrap_err(), TableError::not_found("nope"));
        assert_eq!(row.cell_at(3).unwrap_err(), TableError::out_of_range(3, 3));
    }

    #[test]
    fn test_remove_cell_keeps_order() {
        let mut row = sample_row();
        let removed = row.remove_cell("id").unwrap();
        assert_eq!(removed.key(), "id");
        assert_eq!(row.cell_keys(false), ["name", "secret"]);
        assert_eq!(row.cell_at(0).unwrap().key(), "name");
        assert!(row.remove_cell("id").is_none());
    }

    #[test]
    fn test_keys_exclude_hidden() {
        let row = sample_row();
        assert_eq!(row.cell_keys(false), ["id", "name", "secret"]);
        assert_eq!(row.cell_keys(true), ["id", "name"]);
        assert_eq!(row.cell_count(true), 2);
    }

    #[test]
    fn test_for_each_cell_passes_index() {
        let mut row = sample_row();
        row.for_each_cell(|cell, index| {
            cell.set_value(format!("{}:{}", index, cell.key()));
        });
        assert_eq!(row.cell("name").unwrap().value(), Some("1:name"));
        // key index sees the same mutation
        assert_eq!(row.cell_at(1).unwrap().value(), Some("1:name"));
    }

    #[test]
    fn test_from_record_round_trips_scalars() {
        let record = row_input([("a", "x"), ("b", "y"), ("c", "z")]);
        let row = TableRow::from_record(record);
        assert_eq!(row.to_record().values(), vec![Some("x"), Some("y"), Some("z")]);
    }

    #[test]
    fn test_from_pairs_rejects_repeated_key() {
        let err = TableRow::from_pairs([("a", "1"), ("b", "2"), ("a", "3")]).unwrap_err();
        assert_eq!(err, TableError::duplicate_key("a"));

        let row = TableRow::from_pairs([("a", "1"), ("b", "2")]).unwrap();
        assert_eq!(row.cell_keys(false), ["a", "b"]);
        assert_eq!(row.cell("a").unwrap().value(), Some("1"));
    }

    #[test]
    fn test_from_record_structured() {
        let mut record = RowInput::new();
        record.insert("plain".into(), "v".into());
        record.insert(
            "fancy".into(),
            CellSpec::new("w").with_classes(["hot"]).into(),
        );
        let row = TableRow::from_record(record);
        assert!(row.cell("fancy").unwrap().has_class("hot"));
        assert_eq!(row.cell("plain").unwrap().attributes().serialize(), "");
    }

    #[test]
    fn test_record_cells_by_key_mirrors_cells() {
        let mut row = sample_row();
        row.add_class("even");
        let record = row.to_record();
        assert_eq!(record.cells.len(), 3);
        assert_eq!(record.cells_by_key.len(), 3);
        for cell in &record.cells {
            assert_eq!(&record.cells_by_key[&cell.key], cell);
        }
        assert_eq!(record.attributes, r#"class="even""#);
        assert_eq!(record.cells_by_key["secret"].attributes, r#"class="hidden""#);
    }
}
