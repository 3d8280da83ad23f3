//! Input records used to build rows and tables from raw data
//!
//! A row record is an ordered map `key → CellInput`. Each entry is either a
//! plain scalar, which becomes the cell value, or a structured entry carrying
//! value, classes and attributes:
//!
//! ```json
//! {
//!   "name": "Ada",
//!   "age": 36,
//!   "note": null,
//!   "status": { "value": "active", "classes": ["ok"], "attributes": { "title": "Active" } }
//! }
//! ```
//!
//! The `#value`, `#classes` and `#attributes` spellings are accepted as well.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::attributes::HtmlAttributes;
use super::cell::TableCell;
use super::entity::HtmlEntity;

/// Ordered `key → cell` record for one row
pub type RowInput = IndexMap<String, CellInput>;

/// A scalar cell value as found in JSON/YAML/CSV data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScalarValue {
    Bool(bool),
    Integer(i64),
    Float(f64),
    Text(String),
}

impl fmt::Display for ScalarValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScalarValue::Bool(b) => write!(f, "{}", b),
            ScalarValue::Integer(i) => write!(f, "{}", i),
            ScalarValue::Float(x) => write!(f, "{}", x),
            ScalarValue::Text(s) => f.write_str(s),
        }
    }
}

/// Structured cell entry
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CellSpec {
    #[serde(default, alias = "#value")]
    pub value: Option<ScalarValue>,
    #[serde(default, alias = "#classes", skip_serializing_if = "Vec::is_empty")]
    pub classes: Vec<String>,
    #[serde(default, alias = "#attributes")]
    pub attributes: HtmlAttributes,
    #[serde(default, rename = "beforeRaw", skip_serializing_if = "Option::is_none")]
    pub before_raw: Option<String>,
    #[serde(default, rename = "afterRaw", skip_serializing_if = "Option::is_none")]
    pub after_raw: Option<String>,
    #[serde(default)]
    pub hidden: bool,
}

impl CellSpec {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: Some(ScalarValue::Text(value.into())),
            ..Self::default()
        }
    }

    pub fn with_classes<I, S>(mut self, classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.classes.extend(classes.into_iter().map(Into::into));
        self
    }

    pub fn with_attributes(mut self, attributes: HtmlAttributes) -> Self {
        self.attributes = attributes;
        self
    }
}

/// One entry of a row record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellInput {
    /// `{value, classes, attributes}` entry
    Detailed(CellSpec),
    /// Plain scalar (or null) used as the cell value
    Plain(Option<ScalarValue>),
}

impl CellInput {
    /// Build the cell this entry describes
    pub fn into_cell(self, key: impl Into<String>) -> TableCell {
        let mut cell = TableCell::new(key);
        match self {
            CellInput::Plain(value) => {
                if let Some(value) = value {
                    cell.set_value(value.to_string());
                }
            }
            CellInput::Detailed(spec) => {
                let mut attributes = spec.attributes;
                attributes.add_classes(&spec.classes);
                cell.set_attributes(attributes).set_hidden(spec.hidden);
                if let Some(value) = spec.value {
                    cell.set_value(value.to_string());
                }
                if let Some(raw) = spec.before_raw {
                    cell.set_before_raw(raw);
                }
                if let Some(raw) = spec.after_raw {
                    cell.set_after_raw(raw);
                }
            }
        }
        cell
    }
}

impl From<&str> for CellInput {
    fn from(s: &str) -> Self {
        CellInput::Plain(Some(ScalarValue::Text(s.to_string())))
    }
}

impl From<String> for CellInput {
    fn from(s: String) -> Self {
        CellInput::Plain(Some(ScalarValue::Text(s)))
    }
}

impl From<Option<&str>> for CellInput {
    fn from(s: Option<&str>) -> Self {
        CellInput::Plain(s.map(|s| ScalarValue::Text(s.to_string())))
    }
}

impl From<i64> for CellInput {
    fn from(i: i64) -> Self {
        CellInput::Plain(Some(ScalarValue::Integer(i)))
    }
}

impl From<f64> for CellInput {
    fn from(x: f64) -> Self {
        CellInput::Plain(Some(ScalarValue::Float(x)))
    }
}

impl From<bool> for CellInput {
    fn from(b: bool) -> Self {
        CellInput::Plain(Some(ScalarValue::Bool(b)))
    }
}

impl From<CellSpec> for CellInput {
    fn from(spec: CellSpec) -> Self {
        CellInput::Detailed(spec)
    }
}

/// Build a row record from `(key, value)` pairs
///
/// ```rust
/// use tableclass::core::input::row_input;
///
/// let record = row_input([("id", "1"), ("name", "Ada")]);
/// assert_eq!(record.len(), 2);
/// ```
pub fn row_input<I, K, V>(entries: I) -> RowInput
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<CellInput>,
{
    entries
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}

/// A complete table document: header record, body records and table attributes
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TableInput {
    #[serde(default)]
    pub header: Option<RowInput>,
    #[serde(default)]
    pub rows: Vec<RowInput>,
    #[serde(default)]
    pub attributes: HtmlAttributes,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub classes: Vec<String>,
}
