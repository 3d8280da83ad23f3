//! Convenience constructors assembling tables from raw records
//!
//! ```rust
//! use tableclass::{HeaderlessPolicy, TableFactory};
//!
//! let table = TableFactory::new()
//!     .with_classes(["table", "striped"])
//!     .with_headerless(HeaderlessPolicy::Remove)
//!     .from_json(r#"{
//!         "header": {"id": "ID", "name": "Name"},
//!         "rows": [{"id": 1, "name": "Ada", "debug": "x"}]
//!     }"#)
//!     .unwrap();
//!
//! assert_eq!(table.row(0).unwrap().cell_keys(false), ["id", "name"]);
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::attributes::HtmlAttributes;
use crate::core::entity::HtmlEntity;
use crate::core::input::{RowInput, TableInput};
use crate::core::row::TableRow;
use crate::core::table::Table;
use crate::utils::error::TableResult;

/// What to do with body cells that have no header column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeaderlessPolicy {
    /// Leave body rows untouched
    #[default]
    Keep,
    /// Mark headerless cells hidden
    Hide,
    /// Delete headerless cells
    Remove,
}

impl HeaderlessPolicy {
    pub fn apply(&self, table: &mut Table) {
        match self {
            HeaderlessPolicy::Keep => {}
            HeaderlessPolicy::Hide => {
                table.hide_headerless_columns();
            }
            HeaderlessPolicy::Remove => {
                table.remove_headerless_columns();
            }
        }
    }
}

/// Factory for tables, carrying defaults applied to every table it builds
#[derive(Debug, Clone, Default)]
pub struct TableFactory {
    classes: Vec<String>,
    headerless: HeaderlessPolicy,
}

impl TableFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Classes added to every created table
    pub fn with_classes<I, S>(mut self, classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.classes.extend(classes.into_iter().map(Into::into));
        self
    }

    /// Column reconciliation applied to tables built from records
    pub fn with_headerless(mut self, policy: HeaderlessPolicy) -> Self {
        self.headerless = policy;
        self
    }

    /// Assemble a table from already built parts
    pub fn create_table(
        &self,
        header: Option<TableRow>,
        rows: Vec<TableRow>,
        attributes: Option<HtmlAttributes>,
    ) -> Table {
        let mut table = Table::new()
            .with_header(header.unwrap_or_default())
            .with_rows(rows)
            .with_attributes(attributes.unwrap_or_default());
        table.add_classes(&self.classes);
        table
    }

    /// Build a table from a header record and body records.
    ///
    /// Header cells without a value are hidden; the headerless policy is
    /// applied afterwards.
    pub fn from_records<I>(&self, header: Option<RowInput>, rows: I) -> Table
    where
        I: IntoIterator<Item = RowInput>,
    {
        let mut table = self.create_table(None, Vec::new(), None);
        if let Some(header) = header {
            table.set_header_from_record(header);
        }
        table.add_rows_from_records(rows);
        self.headerless.apply(&mut table);
        debug!(
            rows = table.row_count(),
            columns = table.header().cell_count(false),
            policy = ?self.headerless,
            "table built from records"
        );
        table
    }

    /// Build a table from a deserialized table document
    pub fn from_input(&self, input: TableInput) -> Table {
        let mut table = self.from_records(input.header, input.rows);
        let mut attributes = input.attributes;
        attributes.add_classes(table.attributes().classes());
        attributes.add_classes(&input.classes);
        table.set_attributes(attributes);
        table
    }

    /// Build a table from a JSON table document
    pub fn from_json(&self, json: &str) -> TableResult<Table> {
        let input: TableInput = serde_json::from_str(json)?;
        Ok(self.from_input(input))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::cell::TableCell;
    use crate::core::input::row_input;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_create_table_defaults() {
        let table = TableFactory::new().create_table(None, Vec::new(), None);
        assert!(table.header().is_empty());
        assert_eq!(table.row_count(), 0);
        assert!(table.attributes().is_empty());
    }

    #[test]
    fn test_create_table_with_parts() {
        let header = TableRow::with_cells([TableCell::with_key_value("a", "A")]).unwrap();
        let mut attrs = HtmlAttributes::new();
        attrs.set("id", "t1");
        let table = TableFactory::new().with_classes(["grid"]).create_table(
            Some(header),
            vec![TableRow::new(), TableRow::new()],
            Some(attrs),
        );
        assert_eq!(table.header().cell_keys(false), ["a"]);
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.attributes().serialize(), r#"class="grid" id="t1""#);
    }

    #[test]
    fn test_from_records_hides_untitled_header_cells() {
        let table = TableFactory::new().from_records(
            Some(row_input([("a", Some("A")), ("b", None)])),
            [row_input([("a", "1"), ("b", "2")])],
        );
        assert!(table.header().cell("b").unwrap().is_hidden());
        assert_eq!(table.row(0).unwrap().cell_count(true), 2);
    }

    #[test]
    fn test_from_records_with_hide_policy() {
        let table = TableFactory::new()
            .with_headerless(HeaderlessPolicy::Hide)
            .from_records(
                Some(row_input([("a", Some("A")), ("b", None)])),
                [row_input([("a", "1"), ("b", "2"), ("c", "3")])],
            );
        let row = table.row(0).unwrap();
        assert_eq!(row.cell_count(false), 3);
        assert_eq!(row.cell_keys(true), ["a"]);
    }

    #[test]
    fn test_from_json_merges_classes() {
        let table = TableFactory::new()
            .with_classes(["base"])
            .from_json(r#"{"rows": [], "attributes": {"id": "x", "class": "doc"}, "classes": ["extra", "base"]}"#)
            .unwrap();
        assert_eq!(table.attributes().classes(), ["doc", "base", "extra"]);
        assert_eq!(table.attributes().get("id").and_then(|v| v.as_str()), Some("x"));
    }

    #[test]
    fn test_from_json_invalid() {
        let err = TableFactory::new().from_json("[1, 2").unwrap_err();
        assert!(err.to_string().contains("JSON"));
    }

    #[test]
    fn test_policy_deserialize() {
        let policy: HeaderlessPolicy = serde_json::from_str("\"remove\"").unwrap();
        assert_eq!(policy, HeaderlessPolicy::Remove);
    }
}
