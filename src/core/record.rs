//! Record tree produced by `to_record()`
//!
//! The record is the stable, serializable view of a table consumed by
//! templates. Field names are part of the template contract and are kept
//! verbatim (`beforeRaw`, `afterRaw`, `cellsByKey`).

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::utils::error::TableResult;

/// Record of a single cell
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellRecord {
    pub key: String,
    pub value: Option<String>,
    #[serde(rename = "beforeRaw")]
    pub before_raw: Option<String>,
    #[serde(rename = "afterRaw")]
    pub after_raw: Option<String>,
    /// Serialized attribute string
    pub attributes: String,
    pub hidden: bool,
}

/// Record of a row; `cells_by_key` mirrors `cells`
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RowRecord {
    pub cells: Vec<CellRecord>,
    #[serde(rename = "cellsByKey")]
    pub cells_by_key: IndexMap<String, CellRecord>,
    pub attributes: String,
}

impl RowRecord {
    /// Cell values in column order
    pub fn values(&self) -> Vec<Option<&str>> {
        self.cells.iter().map(|c| c.value.as_deref()).collect()
    }
}

/// Record of a whole table
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TableRecord {
    pub header: RowRecord,
    pub rows: Vec<RowRecord>,
    pub attributes: String,
}

impl TableRecord {
    pub fn to_json(&self) -> TableResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> TableResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
