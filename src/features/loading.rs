//! Loading table documents from JSON, YAML and CSV
//!
//! JSON and YAML documents use the [`TableInput`] shape
//! (`{header, rows, attributes, classes}`). A CSV file is read as a header
//! line followed by data lines: every column name becomes both the cell key
//! and the header title.
//!
//! YAML and CSV support requires the `data-loading` feature.

use std::fmt;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use tracing::debug;

use crate::core::input::TableInput;
use crate::utils::error::{TableError, TableResult};

#[cfg(feature = "data-loading")]
use crate::core::input::{CellInput, RowInput, ScalarValue};

/// Supported table document formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Json,
    Yaml,
    Csv,
}

impl InputFormat {
    /// Detect the format from a file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        ext.parse().ok()
    }
}

impl FromStr for InputFormat {
    type Err = TableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(InputFormat::Json),
            "yaml" | "yml" => Ok(InputFormat::Yaml),
            "csv" => Ok(InputFormat::Csv),
            other => Err(TableError::invalid(format!("unknown input format '{}'", other))),
        }
    }
}

impl fmt::Display for InputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            InputFormat::Json => "json",
            InputFormat::Yaml => "yaml",
            InputFormat::Csv => "csv",
        };
        f.write_str(name)
    }
}

/// Parse a JSON table document
pub fn load_json(text: &str) -> TableResult<TableInput> {
    Ok(serde_json::from_str(text)?)
}

/// Parse a YAML table document
#[cfg(feature = "data-loading")]
pub fn load_yaml(text: &str) -> TableResult<TableInput> {
    Ok(serde_yaml::from_str(text)?)
}

/// Read a CSV table: header line gives keys and titles, data lines give rows
#[cfg(feature = "data-loading")]
pub fn load_csv<R: Read>(reader: R) -> TableResult<TableInput> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);

    let keys: Vec<String> = csv_reader
        .headers()?
        .iter()
        .map(str::to_string)
        .collect();
    let header: RowInput = keys
        .iter()
        .map(|key| (key.clone(), CellInput::from(key.as_str())))
        .collect();

    let mut rows = Vec::new();
    for record in csv_reader.records() {
        let record = record?;
        let row: RowInput = keys
            .iter()
            .zip(record.iter())
            .map(|(key, value)| {
                let value = ScalarValue::Text(value.to_string());
                (key.clone(), CellInput::Plain(Some(value)))
            })
            .collect();
        rows.push(row);
    }

    debug!(columns = keys.len(), rows = rows.len(), "loaded csv table");
    Ok(TableInput {
        header: Some(header),
        rows,
        ..TableInput::default()
    })
}

/// Parse a table document in the given format
pub fn load_str(text: &str, format: InputFormat) -> TableResult<TableInput> {
    match format {
        InputFormat::Json => load_json(text),
        #[cfg(feature = "data-loading")]
        InputFormat::Yaml => load_yaml(text),
        #[cfg(feature = "data-loading")]
        InputFormat::Csv => load_csv(text.as_bytes()),
        #[cfg(not(feature = "data-loading"))]
        other => Err(TableError::invalid(format!(
            "{} input requires the data-loading feature",
            other
        ))),
    }
}

/// Read everything from `reader` and parse it
pub fn load_reader<R: Read>(mut reader: R, format: InputFormat) -> TableResult<TableInput> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    load_str(&text, format)
}

/// Load a table document from a file, detecting the format from its extension
pub fn load_file(path: &Path) -> TableResult<TableInput> {
    let format = InputFormat::from_path(path).ok_or_else(|| {
        TableError::invalid(format!("cannot detect input format of {}", path.display()))
    })?;
    let text = std::fs::read_to_string(path)?;
    debug!(path = %path.display(), %format, "loading table document");
    load_str(&text, format)
}
