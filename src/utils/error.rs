//! Error handling for tableclass
//!
//! This module provides a unified error type and result type for all
//! table building, loading and rendering operations.

use thiserror::Error;

/// Table error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    /// A cell with the same key already exists in the target row
    #[error("Cell with key '{key}' already exists in this row and cannot be added twice")]
    DuplicateKey { key: String },
    /// No cell with the requested key exists in the row
    #[error("No cell with key '{key}' in this row")]
    KeyNotFound { key: String },
    /// Index lookup past the end of a row or table
    #[error("Index {index} out of range (length {len})")]
    IndexOutOfRange { index: usize, len: usize },
    /// Invalid input data (malformed records, unreadable documents)
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },
    /// Template rendering failed
    #[error("Render error in template '{template}': {message}")]
    Render { template: String, message: String },
    /// IO error (CLI and file loading)
    #[error("IO error: {message}")]
    Io { message: String },
}

impl From<std::io::Error> for TableError {
    fn from(err: std::io::Error) -> Self {
        TableError::Io {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for TableError {
    fn from(err: serde_json::Error) -> Self {
        TableError::invalid(format!("JSON: {}", err))
    }
}

#[cfg(feature = "data-loading")]
impl From<serde_yaml::Error> for TableError {
    fn from(err: serde_yaml::Error) -> Self {
        TableError::invalid(format!("YAML: {}", err))
    }
}

#[cfg(feature = "data-loading")]
impl From<csv::Error> for TableError {
    fn from(err: csv::Error) -> Self {
        TableError::invalid(format!("CSV: {}", err))
    }
}

/// Result type for table operations
pub type TableResult<T> = Result<T, TableError>;

// Convenience constructors for errors
impl TableError {
    pub fn duplicate_key(key: impl Into<String>) -> Self {
        TableError::DuplicateKey { key: key.into() }
    }

    pub fn not_found(key: impl Into<String>) -> Self {
        TableError::KeyNotFound { key: key.into() }
    }

    pub fn out_of_range(index: usize, len: usize) -> Self {
        TableError::IndexOutOfRange { index, len }
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        TableError::InvalidInput {
            message: message.into(),
        }
    }

    pub fn render(template: impl Into<String>, message: impl Into<String>) -> Self {
        TableError::Render {
            template: template.into(),
            message: message.into(),
        }
    }
}
