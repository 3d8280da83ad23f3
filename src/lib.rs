//! # tableclass
//!
//! Builder library for HTML tables: a [`Table`] made of a header [`TableRow`]
//! and body rows of keyed [`TableCell`]s, each carrying [`HtmlAttributes`].
//!
//! ## Features
//!
//! - **Keyed rows**: cells addressable by position and by unique key
//! - **Class handling**: de-duplicated `class` lists on every element
//! - **Column reconciliation**: hide or remove body cells without a header column
//! - **Record export**: a serializable record tree for templates
//! - **Rendering**: bundled Tera templates with an explicit escape policy
//! - **Loading**: tables from JSON, YAML and CSV documents
//!
//! ## Usage Examples
//!
//! ### Building a table fluently
//!
//! ```rust
//! use tableclass::{HtmlEntity, Table, TableCell, TableRow};
//!
//! let mut header = TableRow::new();
//! header
//!     .add_cell(TableCell::with_key_value("id", "ID"))?
//!     .add_cell(TableCell::with_key_value("name", "Name"))?;
//!
//! let mut row = TableRow::new();
//! row.add_cell(TableCell::with_key_value("id", "1"))?
//!     .add_cell(TableCell::with_key_value("name", "Ada"))?;
//!
//! let mut table = Table::new().with_header(header);
//! table.add_row(row).add_class("people");
//!
//! let record = table.to_record();
//! assert_eq!(record.attributes, r#"class="people""#);
//! assert_eq!(record.rows[0].cells_by_key["name"].value.as_deref(), Some("Ada"));
//! # Ok::<(), tableclass::TableError>(())
//! ```
//!
//! ### Rendering from records
//!
//! ```rust
//! use tableclass::core::input::row_input;
//! use tableclass::{render_table, table_from_records};
//!
//! let table = table_from_records(
//!     Some(row_input([("name", Some("Name")), ("id", None)])),
//!     [row_input([("name", "Ada"), ("id", "7")])],
//! );
//! let html = render_table(&table).unwrap();
//! assert!(html.contains("<td>Ada</td>"));
//! assert!(html.contains(r#"<th class="hidden"></th>"#));
//! ```
//!
//! The builders are plain owned values mutated through `&mut self`; share a
//! table across threads only behind external synchronization.

/// Core table model
pub mod core;

/// Data layer - constants and bundled templates
pub mod data;

/// Feature modules - factory, loading, rendering
pub mod features;

/// Utility modules
pub mod utils;

// Re-export core types
pub use core::{
    AttributeValue, CellInput, CellRecord, CellSpec, HtmlAttributes, HtmlEntity, RowInput,
    RowRecord, ScalarValue, Table, TableCell, TableInput, TableRecord, TableRenderer, TableRow,
};

// Re-export feature modules
pub use features::factory;
pub use features::loading;
#[cfg(feature = "render")]
pub use features::render;
pub use features::{HeaderlessPolicy, InputFormat, TableFactory};
#[cfg(feature = "render")]
pub use features::{RenderOptions, TeraRenderer};

// Re-export utilities
pub use utils::error::{TableError, TableResult};
pub use utils::escaping::{escape_html, is_valid_attribute_name, EscapePolicy};

/// Build a table from a header record and body records
///
/// Header cells without a value become hidden placeholder columns.
pub fn table_from_records<I>(header: Option<RowInput>, rows: I) -> Table
where
    I: IntoIterator<Item = RowInput>,
{
    TableFactory::new().from_records(header, rows)
}

/// Build a table from a JSON table document
pub fn table_from_json(json: &str) -> TableResult<Table> {
    TableFactory::new().from_json(json)
}

/// Render a table with the bundled template and default options
#[cfg(feature = "render")]
pub fn render_table(table: &Table) -> TableResult<String> {
    table.render(&TeraRenderer::new()?)
}

/// Render a table with custom options
#[cfg(feature = "render")]
pub fn render_table_with_options(table: &Table, options: RenderOptions) -> TableResult<String> {
    table.render(&TeraRenderer::with_options(options)?)
}
